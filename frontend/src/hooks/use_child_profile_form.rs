use std::rc::Rc;

use shared::{ChildProfile, ChildProfileForm, Gender, ProfileField, Relation};
use yew::prelude::*;

use crate::services::logging::Logger;

/// A profile that passed validation, numbered so each successful submit is
/// observed exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub seq: u32,
    pub profile: ChildProfile,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildProfileFormState {
    pub form: ChildProfileForm,
    pub last_submission: Option<Submission>,
    /// Submits rejected for missing fields since mount
    pub blocked_submits: u32,
}

pub enum ChildProfileAction {
    SetText(ProfileField, String),
    SelectRelation(Relation),
    SelectGender(Gender),
    Submit,
}

impl Reducible for ChildProfileFormState {
    type Action = ChildProfileAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            ChildProfileAction::SetText(field, value) => next.form.set_text(field, value),
            ChildProfileAction::SelectRelation(relation) => next.form.select_relation(relation),
            ChildProfileAction::SelectGender(gender) => next.form.select_gender(gender),
            ChildProfileAction::Submit => {
                match next.form.submit() {
                    Some(profile) => {
                        let seq = self.last_submission.as_ref().map_or(1, |s| s.seq + 1);
                        next.last_submission = Some(Submission { seq, profile });
                    }
                    None => next.blocked_submits += 1,
                }
            }
        }

        next.into()
    }
}

#[derive(Clone, PartialEq)]
pub struct UseChildProfileFormActions {
    pub set_text: Callback<(ProfileField, String)>,
    pub select_relation: Callback<Relation>,
    pub select_gender: Callback<Gender>,
    pub submit: Callback<()>,
}

pub struct UseChildProfileFormResult {
    pub state: ChildProfileFormState,
    pub actions: UseChildProfileFormActions,
}

/// Form state for the child profile step. `on_next` receives each profile that
/// passes validation, once per successful submit.
#[hook]
pub fn use_child_profile_form(on_next: &Callback<ChildProfile>) -> UseChildProfileFormResult {
    let state = use_reducer(ChildProfileFormState::default);

    let set_text = {
        let state = state.clone();
        use_callback((), move |(field, value): (ProfileField, String), _| {
            state.dispatch(ChildProfileAction::SetText(field, value));
        })
    };

    let select_relation = {
        let state = state.clone();
        use_callback((), move |relation: Relation, _| {
            state.dispatch(ChildProfileAction::SelectRelation(relation));
        })
    };

    let select_gender = {
        let state = state.clone();
        use_callback((), move |gender: Gender, _| {
            state.dispatch(ChildProfileAction::SelectGender(gender));
        })
    };

    let submit = {
        let state = state.clone();
        use_callback((), move |_: (), _| {
            state.dispatch(ChildProfileAction::Submit);
        })
    };

    // Hand each new submission to the caller after it has rendered
    use_effect_with(state.last_submission.clone(), {
        let on_next = on_next.clone();
        move |submission: &Option<Submission>| {
            if let Some(submission) = submission {
                let payload = serde_json::to_string(&submission.profile)
                    .unwrap_or_else(|e| format!("<unserializable profile: {}>", e));
                Logger::info_with_component(
                    "ChildProfileStep",
                    &format!("profile submitted: {}", payload),
                );
                on_next.emit(submission.profile.clone());
            }
            || ()
        }
    });

    // Surface blocked submits in the log as well as on screen
    use_effect_with(state.blocked_submits, {
        let missing = state.form.draft.missing_fields();
        move |blocked: &u32| {
            if *blocked > 0 {
                let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
                Logger::debug_with_component(
                    "ChildProfileStep",
                    &format!("submit blocked, missing: {}", labels.join(", ")),
                );
            }
            || ()
        }
    });

    UseChildProfileFormResult {
        state: (*state).clone(),
        actions: UseChildProfileFormActions {
            set_text,
            select_relation,
            select_gender,
            submit,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MISSING_FIELDS_MESSAGE;

    fn apply(state: Rc<ChildProfileFormState>, actions: Vec<ChildProfileAction>) -> Rc<ChildProfileFormState> {
        actions.into_iter().fold(state, |state, action| state.reduce(action))
    }

    fn fill_all() -> Vec<ChildProfileAction> {
        vec![
            ChildProfileAction::SetText(ProfileField::ChildName, "민지".to_string()),
            ChildProfileAction::SelectRelation(Relation::Mother),
            ChildProfileAction::SetText(ProfileField::Height, "110".to_string()),
            ChildProfileAction::SetText(ProfileField::Weight, "18.5".to_string()),
            ChildProfileAction::SetText(ProfileField::BirthDate, "2021-05-01".to_string()),
            ChildProfileAction::SelectGender(Gender::Female),
        ]
    }

    #[test]
    fn test_submit_with_missing_field_sets_error_only() {
        let mut actions = fill_all();
        actions.remove(3); // weight
        actions.push(ChildProfileAction::Submit);

        let state = apply(Rc::default(), actions);
        assert_eq!(state.form.error_message(), Some(MISSING_FIELDS_MESSAGE));
        assert_eq!(state.last_submission, None);
    }

    #[test]
    fn test_submit_complete_form_records_one_submission() {
        let mut actions = fill_all();
        actions.push(ChildProfileAction::Submit);

        let state = apply(Rc::default(), actions);
        assert_eq!(state.form.error_message(), None);

        let submission = state.last_submission.clone().unwrap();
        assert_eq!(submission.seq, 1);
        assert_eq!(submission.profile.child_name, "민지");
        assert_eq!(submission.profile.relation, Relation::Mother);
        assert_eq!(submission.profile.gender, Gender::Female);
    }

    #[test]
    fn test_error_clears_on_successful_resubmit() {
        let state = apply(Rc::default(), vec![ChildProfileAction::Submit]);
        assert!(state.form.error.is_some());

        let mut actions = fill_all();
        actions.push(ChildProfileAction::Submit);
        let state = apply(state, actions);
        assert_eq!(state.form.error, None);
        assert_eq!(state.last_submission.as_ref().map(|s| s.seq), Some(1));
    }

    #[test]
    fn test_repeated_submits_get_new_sequence_numbers() {
        let mut actions = fill_all();
        actions.push(ChildProfileAction::Submit);
        actions.push(ChildProfileAction::Submit);

        let state = apply(Rc::default(), actions);
        assert_eq!(state.last_submission.as_ref().map(|s| s.seq), Some(2));
    }

    #[test]
    fn test_relation_follows_latest_selection() {
        let state = apply(
            Rc::default(),
            vec![
                ChildProfileAction::SelectRelation(Relation::Father),
                ChildProfileAction::SelectRelation(Relation::Mother),
            ],
        );
        assert_eq!(state.form.draft.relation, Some(Relation::Mother));
    }

    #[test]
    fn test_each_blocked_submit_is_counted() {
        let state = apply(
            Rc::default(),
            vec![ChildProfileAction::Submit, ChildProfileAction::Submit],
        );
        assert_eq!(state.blocked_submits, 2);
        assert_eq!(state.last_submission, None);

        let mut actions = fill_all();
        actions.push(ChildProfileAction::Submit);
        let state = apply(state, actions);
        assert_eq!(state.blocked_submits, 2);
    }
}
