//! Page-level views, one per route

mod home_view;
mod not_found_view;
mod questionnaire_view;
mod results_view;

pub use home_view::HomeView;
pub use not_found_view::NotFoundView;
pub use questionnaire_view::QuestionnaireView;
pub use results_view::ResultsView;
