//! Route table and page-level route handlers

mod app_shell;
mod home;
mod not_found;
mod questionnaire;
mod results;

use dioxus::prelude::*;

use app_shell::AppShell;
use home::HomeRoute;
use not_found::NotFoundRoute;
use questionnaire::QuestionnaireRoute;
use results::ResultsRoute;

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        HomeRoute {},
        #[route("/questionnaire")]
        QuestionnaireRoute {},
        #[route("/results")]
        ResultsRoute {},
        #[route("/:..segments")]
        NotFoundRoute { segments: Vec<String> },
}

/// Page title shown in the browser tab or window
pub(crate) fn page_title(section: &str) -> String {
    format!("{section} | Growthwise")
}
