use dioxus::prelude::*;

use crate::presentation::state::use_language_state;
use crate::use_platform;

/// Button showing the other language's name; click to switch.
#[component]
pub fn LanguageSwitcher() -> Element {
    let mut language = use_language_state();
    let platform = use_platform();
    let other = language.language().toggled();

    rsx! {
        button {
            class: "language-switcher",
            title: language.t("language.switch", "Switch language"),
            onclick: move |_| language.toggle(platform.as_ref()),
            span { class: "language-icon", "文A" }
            span { "{other.native_name()}" }
        }
    }
}
