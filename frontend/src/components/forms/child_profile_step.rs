use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::{ChildProfile, Gender, ProfileField, Relation};

use crate::components::choice_toggle::ChoiceToggle;
use crate::hooks::use_child_profile_form;
use crate::services::date_utils::get_current_date;

#[derive(Properties, PartialEq)]
pub struct ChildProfileStepProps {
    /// Receives the validated profile when the form is submitted complete
    pub on_next: Callback<ChildProfile>,
}

#[function_component(ChildProfileStep)]
pub fn child_profile_step(props: &ChildProfileStepProps) -> Html {
    let form = use_child_profile_form(&props.on_next);
    let draft = &form.state.form.draft;
    let max_birth_date = use_memo((), |_| get_current_date());

    let on_submit = {
        let submit = form.actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let text_input = |field: ProfileField, input_type: &'static str, step: Option<&'static str>, max: Option<String>| {
        let set_text = form.actions.set_text.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_text.emit((field, input.value()));
        });

        html! {
            <>
                <label class="profile-label">{field.label()}</label>
                <input
                    type={input_type}
                    class="profile-input"
                    {step}
                    {max}
                    value={draft.text(field).to_string()}
                    {oninput}
                />
            </>
        }
    };

    let relation_labels: Vec<AttrValue> = Relation::ALL.iter().map(|r| AttrValue::from(r.label())).collect();
    let relation_selected = draft.relation.and_then(|r| Relation::ALL.iter().position(|x| *x == r));
    let on_relation_select = {
        let select_relation = form.actions.select_relation.clone();
        Callback::from(move |index: usize| {
            if let Some(relation) = Relation::ALL.get(index) {
                select_relation.emit(*relation);
            }
        })
    };

    let gender_labels: Vec<AttrValue> = Gender::ALL.iter().map(|g| AttrValue::from(g.label())).collect();
    let gender_selected = draft.gender.and_then(|g| Gender::ALL.iter().position(|x| *x == g));
    let on_gender_select = {
        let select_gender = form.actions.select_gender.clone();
        Callback::from(move |index: usize| {
            if let Some(gender) = Gender::ALL.get(index) {
                select_gender.emit(*gender);
            }
        })
    };

    html! {
        <form class="child-profile-form" onsubmit={on_submit}>
            <div class="profile-inputs">
                {text_input(ProfileField::ChildName, "text", None, None)}

                <label class="profile-label">{ProfileField::Relation.label()}</label>
                <ChoiceToggle
                    labels={relation_labels}
                    selected={relation_selected}
                    on_select={on_relation_select}
                />

                {text_input(ProfileField::Height, "number", None, None)}
                {text_input(ProfileField::Weight, "number", Some("0.1"), None)}
                {text_input(ProfileField::BirthDate, "date", None, Some((*max_birth_date).clone()))}

                <label class="profile-label">{ProfileField::Gender.label()}</label>
                <ChoiceToggle
                    labels={gender_labels}
                    selected={gender_selected}
                    on_select={on_gender_select}
                />
            </div>

            {if let Some(error) = form.state.form.error_message() {
                html! {
                    <div class="profile-error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            <button type="submit" class="btn btn-primary">{"다음"}</button>
        </form>
    }
}
