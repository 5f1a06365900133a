//! Presentation utilities

pub mod clipboard;

pub use clipboard::copy_to_clipboard;
