//! Application layer - UI-independent player logic
//!
//! - `i18n` - string table and `translate`
//! - `markdown` - plan Markdown to display HTML
//! - `export` - plan to downloadable file
//! - `settings` - persisted credential and language
//! - `plan_tracker` - request tickets for in-flight generation

pub mod export;
pub mod i18n;
pub mod markdown;
pub mod plan_tracker;
pub mod settings;

pub use i18n::{translate, translate_with};
