//! Signal-backed UI state, provided via Dioxus context by `AppRoot`

mod language_state;
mod plan_state;
mod questionnaire_state;
mod toast_state;

pub use language_state::{use_language_state, LanguageState};
pub use plan_state::{use_plan_state, PlanState};
pub use questionnaire_state::{use_questionnaire_state, QuestionnaireState};
pub use toast_state::{use_toast_state, Toast, ToastKind, ToastState};
