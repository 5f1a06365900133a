//! Growth plan generation
//!
//! - `prompt` - system instruction and user prompt from the questionnaire
//! - `fallback` - deterministic local plan when the endpoint cannot be used
//! - `service` - one remote attempt, falling back on any failure
//! - `sections`, `fields` - headings and answer rendering shared by both paths

pub mod fallback;
pub mod fields;
pub mod prompt;
pub mod sections;
pub mod service;

pub use fallback::synthesize_local_plan;
pub use prompt::{build_prompt, system_instruction, PromptBundle};
pub use sections::{Horizon, PlanSection};
pub use service::{GeneratedPlan, PlanGenerationService, PlanRequest, PlanSource};
