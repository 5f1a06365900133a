use dioxus::prelude::*;

use super::page_title;
use crate::presentation::state::use_language_state;
use crate::presentation::views::QuestionnaireView;
use crate::use_platform;

#[component]
pub fn QuestionnaireRoute() -> Element {
    let platform = use_platform();
    let lang = use_language_state();

    use_effect(move || {
        platform.set_page_title(&page_title(&lang.t(
            "create.plan",
            "Create Your Personalized Growth Plan",
        )));
    });

    rsx! {
        QuestionnaireView {}
    }
}
