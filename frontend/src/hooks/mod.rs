pub mod use_child_profile_form;

pub use use_child_profile_form::{use_child_profile_form, ChildProfileAction, ChildProfileFormState};
