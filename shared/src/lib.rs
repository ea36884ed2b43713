use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown when the child profile form is submitted with empty fields
pub const MISSING_FIELDS_MESSAGE: &str = "모든 필드를 입력해주세요.";

/// Amount and memo entered on the deposit step.
///
/// The step that edits these values never owns them; the surrounding flow does.
/// `deposit` may hold `NaN` when the amount field contains text that is not a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountEntry {
    pub deposit: f64,
    pub memo: String,
}

impl Default for AmountEntry {
    fn default() -> Self {
        Self {
            deposit: 0.0,
            memo: String::new(),
        }
    }
}

impl AmountEntry {
    /// Store the amount as parsed by the step, `NaN` included
    pub fn set_deposit(&mut self, deposit: f64) {
        self.deposit = deposit;
    }

    pub fn set_memo(&mut self, memo: impl Into<String>) {
        self.memo = memo.into();
    }

    /// Deposit as a usable number.
    ///
    /// The amount step forwards whatever the user typed, so callers that need a real
    /// number before moving on check it here.
    pub fn checked_deposit(&self) -> Result<f64, AmountEntryError> {
        if self.deposit.is_nan() {
            Err(AmountEntryError::NotANumber)
        } else if self.deposit.is_infinite() {
            Err(AmountEntryError::NotFinite(self.deposit))
        } else {
            Ok(self.deposit)
        }
    }
}

/// Problems with a deposit value, reported only by [`AmountEntry::checked_deposit`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountEntryError {
    #[error("deposit amount is not a number")]
    NotANumber,
    #[error("deposit amount {0} is not finite")]
    NotFinite(f64),
}

/// Convert amount-field text to a number using browser number-coercion rules.
///
/// Blank text is `0`, `Infinity` with an optional sign is infinite, and anything
/// that is not a decimal literal is `NaN`. Rust-only spellings like `inf` or `nan`
/// are rejected so the result matches what the page would compute.
pub fn parse_deposit_input(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if trimmed
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
    {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Who is registering the child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    #[serde(rename = "엄마")]
    Mother,
    #[serde(rename = "아빠")]
    Father,
}

impl Relation {
    /// Button order on the form
    pub const ALL: [Relation; 2] = [Relation::Mother, Relation::Father];

    pub fn label(&self) -> &'static str {
        match self {
            Relation::Mother => "엄마",
            Relation::Father => "아빠",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "남자")]
    Male,
    #[serde(rename = "여자")]
    Female,
}

impl Gender {
    /// Button order on the form
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "남자",
            Gender::Female => "여자",
        }
    }
}

/// The six inputs of the child profile form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileField {
    ChildName,
    Relation,
    Height,
    Weight,
    BirthDate,
    Gender,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        ProfileField::ChildName,
        ProfileField::Relation,
        ProfileField::Height,
        ProfileField::Weight,
        ProfileField::BirthDate,
        ProfileField::Gender,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::ChildName => "아이 이름",
            ProfileField::Relation => "아이와의 관계",
            ProfileField::Height => "키 (cm)",
            ProfileField::Weight => "몸무게 (kg)",
            ProfileField::BirthDate => "생년월일",
            ProfileField::Gender => "성별",
        }
    }
}

/// In-progress child profile as the user fills it in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildProfileDraft {
    pub child_name: String,
    pub relation: Option<Relation>,
    pub height: String,
    pub weight: String,
    pub birth_date: String,
    pub gender: Option<Gender>,
}

impl ChildProfileDraft {
    /// Store raw text for a typed field. Button-pair fields are ignored here;
    /// use [`Self::select_relation`] and [`Self::select_gender`] for those.
    pub fn set_text(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::ChildName => self.child_name = value,
            ProfileField::Height => self.height = value,
            ProfileField::Weight => self.weight = value,
            ProfileField::BirthDate => self.birth_date = value,
            ProfileField::Relation | ProfileField::Gender => {}
        }
    }

    /// Current text of a typed field, or the selected label of a button pair
    pub fn text(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::ChildName => &self.child_name,
            ProfileField::Height => &self.height,
            ProfileField::Weight => &self.weight,
            ProfileField::BirthDate => &self.birth_date,
            ProfileField::Relation => self.relation.map(|r| r.label()).unwrap_or(""),
            ProfileField::Gender => self.gender.map(|g| g.label()).unwrap_or(""),
        }
    }

    pub fn select_relation(&mut self, relation: Relation) {
        self.relation = Some(relation);
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.gender = Some(gender);
    }

    /// Fields that would block submission, in display order.
    /// Text is not trimmed: a field holding only spaces counts as filled in.
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(|field| self.text(*field).is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<ChildProfile, ProfileValidationError> {
        let (Some(relation), Some(gender)) = (self.relation, self.gender) else {
            return Err(ProfileValidationError::MissingRequiredField {
                fields: self.missing_fields(),
            });
        };

        let fields = self.missing_fields();
        if !fields.is_empty() {
            return Err(ProfileValidationError::MissingRequiredField { fields });
        }

        Ok(ChildProfile {
            child_name: self.child_name.clone(),
            relation,
            height: self.height.clone(),
            weight: self.weight.clone(),
            birth_date: self.birth_date.clone(),
            gender,
        })
    }
}

/// Child profile that passed the required-field check.
///
/// Serializes with the camelCase keys the registration endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildProfile {
    pub child_name: String,
    pub relation: Relation,
    /// Centimetres, as typed
    pub height: String,
    /// Kilograms with one decimal place, as typed
    pub weight: String,
    /// YYYY-MM-DD from the date input
    pub birth_date: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileValidationError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingRequiredField { fields: Vec<ProfileField> },
}

/// Form state behind the child profile step: the draft plus the message shown
/// under the inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildProfileForm {
    pub draft: ChildProfileDraft,
    pub error: Option<String>,
}

impl ChildProfileForm {
    pub fn set_text(&mut self, field: ProfileField, value: impl Into<String>) {
        self.draft.set_text(field, value);
    }

    pub fn select_relation(&mut self, relation: Relation) {
        self.draft.select_relation(relation);
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.draft.select_gender(gender);
    }

    /// Validate the draft. Returns the profile to hand to the next step, or
    /// records the error message and returns `None`.
    pub fn submit(&mut self) -> Option<ChildProfile> {
        self.error = None;

        match self.draft.validate() {
            Ok(profile) => Some(profile),
            Err(error) => {
                self.error = Some(error.to_string());
                None
            }
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
