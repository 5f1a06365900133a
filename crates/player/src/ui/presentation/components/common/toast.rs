//! Toast host
//!
//! Renders the current toast in the corner. Auto-dismisses after a few
//! seconds or on click.

use dioxus::prelude::*;

use crate::presentation::state::{use_toast_state, ToastKind};
use crate::use_platform;

const TOAST_VISIBLE_MS: u64 = 5000;

#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toast_state();
    let platform = use_platform();

    use_effect(move || {
        // Reading here re-runs the effect for every new toast
        if let Some(id) = toasts.current().map(|t| t.id) {
            let platform = platform.clone();
            spawn(async move {
                platform.sleep_ms(TOAST_VISIBLE_MS).await;
                toasts.dismiss(id);
            });
        }
    });

    let Some(toast) = toasts.current() else {
        return rsx! {};
    };

    let kind_class = match toast.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Info => "toast toast-info",
        ToastKind::Error => "toast toast-error",
    };
    let id = toast.id;

    rsx! {
        div { class: "toast-host",
            div {
                class: kind_class,
                role: "status",
                onclick: move |_| toasts.dismiss(id),
                div { class: "toast-header",
                    strong { "{toast.title}" }
                    button { class: "toast-close", "×" }
                }
                if let Some(description) = toast.description {
                    p { class: "toast-description", "{description}" }
                }
            }
        }
    }
}
