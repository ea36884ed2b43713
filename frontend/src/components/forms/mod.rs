pub mod amount_entry_step;
pub mod child_profile_step;

pub use amount_entry_step::AmountEntryStep;
pub use child_profile_step::ChildProfileStep;
