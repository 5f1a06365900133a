//! Growthwise domain: questionnaire value types and the wizard state machine.
//!
//! Everything here is synchronous and free of I/O so it can be shared by the
//! engine (prompt building, plan generation) and the player (UI) on both
//! native and wasm targets.

pub mod error;
pub mod types;
pub mod wizard;

pub use error::DomainError;

pub use types::{
    wings_for, DayKind, EnneagramType, GoalSet, GoalSuggestion, HourBudget, Language, MbtiType,
    TimeAvailability, TimeOfDay, GOAL_SLOTS,
};

pub use wizard::{
    all_steps_complete, can_jump_to, first_incomplete_step, is_step_complete, missing_requirement,
    reduce, PersonalityProfile, Requirement, SubscriptionId, WizardCommand, WizardState,
    WizardStep, WizardStore,
};
