//! Growthwise Player crate.
//!
//! The questionnaire client: UI, application state, and platform adapters.
//! Desktop and browser support is selected at compile time with `cfg`.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use ui::presentation;
pub use ui::routes;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_platform, Platform, Route};
