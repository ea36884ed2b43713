pub mod choice_toggle;
pub mod forms;

pub use choice_toggle::ChoiceToggle;
pub use forms::{AmountEntryStep, ChildProfileStep};
