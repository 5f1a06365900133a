//! API key entry
//!
//! The key is cached on the device and picked up when the next
//! questionnaire session starts. A key from the environment takes
//! precedence and cannot be edited here.

use dioxus::prelude::*;

use crate::application::settings::{clear_credential, has_stored_credential, store_credential};
use crate::presentation::services::use_services;
use crate::presentation::state::{use_language_state, use_toast_state, ToastKind};
use crate::use_platform;

#[component]
pub fn ApiKeyPanel() -> Element {
    let lang = use_language_state();
    let mut toasts = use_toast_state();
    let services = use_services();
    let platform = use_platform();

    let mut draft = use_signal(String::new);
    let mut stored = use_signal({
        let platform = platform.clone();
        move || has_stored_credential(platform.as_ref())
    });

    if services.env_credential.is_some() {
        return rsx! {
            section { class: "api-key-panel",
                h3 { {lang.t("api_key.title", "API Key")} }
                p { class: "api-key-status",
                    {lang.t("api_key.from_env", "Using the key from the environment")}
                }
            }
        };
    }

    let save_platform = platform.clone();
    let on_save = move |_| {
        if store_credential(save_platform.as_ref(), &draft.peek()) {
            draft.set(String::new());
            stored.set(true);
            toasts.show(
                ToastKind::Success,
                lang.t("api_key.saved", "API key saved on this device"),
                None,
            );
        }
    };

    let on_clear = move |_| {
        clear_credential(platform.as_ref());
        stored.set(false);
        toasts.show(ToastKind::Info, lang.t("api_key.cleared", "API key removed"), None);
    };

    rsx! {
        section { class: "api-key-panel",
            h3 { {lang.t("api_key.title", "API Key")} }
            p { class: "api-key-description",
                {lang.t(
                    "api_key.description",
                    "Plans are written by a chat-completion service. Without a key you still get a locally generated plan.",
                )}
            }
            if stored() {
                p { class: "api-key-status",
                    {lang.t("api_key.stored", "A key is stored on this device")}
                }
            }
            div { class: "api-key-row",
                input {
                    r#type: "password",
                    autocomplete: "off",
                    placeholder: lang.t("api_key.placeholder", "Paste your API key"),
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    class: "button button-primary",
                    disabled: draft.read().trim().is_empty(),
                    onclick: on_save,
                    {lang.t("api_key.save", "Save")}
                }
                if stored() {
                    button { class: "button button-outline", onclick: on_clear,
                        {lang.t("api_key.clear", "Remove")}
                    }
                }
            }
        }
    }
}
