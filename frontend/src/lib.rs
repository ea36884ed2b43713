//! Form steps for the onboarding and deposit flows.
//!
//! - [`components::AmountEntryStep`]: controlled amount and memo inputs
//! - [`components::ChildProfileStep`]: child profile form with required-field check

pub mod components;
pub mod hooks;
pub mod services;

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod test_utils;
