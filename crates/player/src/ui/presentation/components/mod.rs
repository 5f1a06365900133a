//! Reusable UI components

pub mod common;
pub mod home;
pub mod plan;
pub mod questionnaire;
