use dioxus::prelude::*;

use super::page_title;
use crate::presentation::state::use_language_state;
use crate::presentation::views::NotFoundView;
use crate::use_platform;

/// Catch-all for unknown paths
#[component]
pub fn NotFoundRoute(segments: Vec<String>) -> Element {
    let platform = use_platform();
    let lang = use_language_state();
    let path = segments.join("/");

    use_effect(use_reactive!(|segments| {
        tracing::warn!(path = %segments.join("/"), "Unknown route");
    }));
    use_effect(move || {
        platform.set_page_title(&page_title(&lang.t("not_found.title", "Page not found")));
    });

    rsx! {
        NotFoundView { path }
    }
}
