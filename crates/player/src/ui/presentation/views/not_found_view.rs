use dioxus::prelude::*;

use crate::presentation::state::use_language_state;
use crate::routes::Route;

#[component]
pub fn NotFoundView(path: String) -> Element {
    let lang = use_language_state();

    rsx! {
        div { class: "page not-found-page",
            h1 { {lang.t("not_found.title", "Page not found")} }
            p { {lang.t("not_found.description", "The page you are looking for does not exist.")} }
            code { class: "not-found-path", "/{path}" }
            Link { class: "button button-primary", to: Route::HomeRoute {},
                {lang.t("return.home", "Return to Home")}
            }
        }
    }
}
