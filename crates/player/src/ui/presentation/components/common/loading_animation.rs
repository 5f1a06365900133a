use dioxus::prelude::*;

use crate::presentation::state::use_language_state;

#[component]
pub fn LoadingAnimation() -> Element {
    let lang = use_language_state();

    rsx! {
        div { class: "loading",
            div { class: "loading-spinner",
                div { class: "ring ring-outer" }
                div { class: "ring ring-middle" }
                div { class: "ring ring-inner" }
            }
            p { class: "loading-message",
                {lang.t("loading.message", "Creating your personalized growth plan...")}
            }
        }
    }
}
