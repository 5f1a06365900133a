//! Growthwise Engine library.
//!
//! Everything between a completed questionnaire and a plan on screen.
//!
//! ## Structure
//!
//! - `plan/` - prompt building, generation service, local fallback
//! - `export/` - file names, outline extraction, mind-map SVG/HTML
//! - `infrastructure/` - completion port, OpenAI-compatible client, config, clock

pub mod export;
pub mod infrastructure;
pub mod plan;

/// Test fixtures shared by unit and end-to-end tests.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end tests against an in-process stub endpoint.
#[cfg(test)]
mod e2e_tests;

pub use infrastructure::clock::SystemClock;
pub use infrastructure::config::{ApiCredential, CompletionConfig};
pub use infrastructure::openai::OpenAiCompatibleClient;
pub use infrastructure::ports::{ClockPort, CompletionPort, LlmError, SamplingParams};
pub use plan::{GeneratedPlan, PlanGenerationService, PlanRequest, PlanSource};
