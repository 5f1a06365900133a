//! Questionnaire step components

mod goals_step;
mod objectives_step;
mod personality_step;
mod situation_step;
mod step_indicator;
mod time_step;

pub use goals_step::GoalsStep;
pub use objectives_step::ObjectivesStep;
pub use personality_step::PersonalityStep;
pub use situation_step::SituationStep;
pub use step_indicator::StepIndicator;
pub use time_step::TimeStep;
