//! Questionnaire wizard: state, commands, validation, and the observable store

mod command;
mod state;
mod step;
mod store;
mod validation;

pub use command::{reduce, WizardCommand};
pub use state::{PersonalityProfile, WizardState};
pub use step::WizardStep;
pub use store::{SubscriptionId, WizardStore};
pub use validation::{
    all_steps_complete, can_jump_to, first_incomplete_step, is_step_complete,
    missing_requirement, Requirement,
};
