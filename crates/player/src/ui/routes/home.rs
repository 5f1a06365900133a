use dioxus::prelude::*;

use super::page_title;
use crate::presentation::state::use_language_state;
use crate::presentation::views::HomeView;
use crate::use_platform;

#[component]
pub fn HomeRoute() -> Element {
    let platform = use_platform();
    let lang = use_language_state();

    use_effect(move || {
        platform.set_page_title(&page_title(&lang.t("home.title", "Personalized Growth Wisdom")));
    });

    rsx! {
        HomeView {}
    }
}
