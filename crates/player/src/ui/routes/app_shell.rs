//! Layout shared by every page: brand bar, language switcher, toasts

use dioxus::prelude::*;

use super::Route;
use crate::presentation::components::common::{LanguageSwitcher, ToastHost};
use crate::presentation::state::use_language_state;

#[component]
pub fn AppShell() -> Element {
    let lang = use_language_state();

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                Link { class: "brand", to: Route::HomeRoute {},
                    span { class: "brand-mark", "✦" }
                    span { {lang.t("home.title", "Personalized Growth Wisdom")} }
                }
                LanguageSwitcher {}
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}
