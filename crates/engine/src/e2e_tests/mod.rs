//! End-to-end plan generation tests.
//!
//! These run the real pipeline: questionnaire state, prompt builder,
//! reqwest client, and the generation service, against an in-process stub
//! endpoint. No network access or API key is needed.
//!
//! ```bash
//! cargo test -p growthwise-engine --lib e2e_tests
//! ```

mod export_flow_tests;
mod plan_flow_tests;
