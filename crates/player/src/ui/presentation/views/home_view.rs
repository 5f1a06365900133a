//! Landing page: intro, how-it-works cards, test links, API key entry

use dioxus::prelude::*;

use crate::application::settings::resolve_credential;
use crate::presentation::components::home::{ApiKeyPanel, PersonalityTestLinks};
use crate::presentation::services::use_services;
use crate::presentation::state::{use_language_state, use_plan_state, use_questionnaire_state};
use crate::routes::Route;
use crate::use_platform;

#[component]
pub fn HomeView() -> Element {
    let lang = use_language_state();
    let mut questionnaire = use_questionnaire_state();
    let mut plan_state = use_plan_state();
    let services = use_services();
    let platform = use_platform();
    let navigator = use_navigator();

    let on_start = move |_| {
        let credential = resolve_credential(services.env_credential.as_ref(), platform.as_ref());
        questionnaire.start_session(credential);
        plan_state.clear();
        navigator.push(Route::QuestionnaireRoute {});
    };

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                h1 { class: "hero-title", {lang.t("home.title", "Personalized Growth Wisdom")} }
                p { class: "hero-subtitle",
                    {lang.t(
                        "home.subtitle",
                        "Discover your unique self-improvement path through personalized plans.",
                    )}
                }
                button { class: "button button-primary button-large", onclick: on_start,
                    {lang.t("create.plan.button", "Create Your Growth Plan")}
                }
            }

            PersonalityTestLinks {}

            section { class: "how-it-works",
                h2 { {lang.t("how.it.works", "How It Works")} }
                div { class: "card-grid",
                    HowItWorksCard {
                        number: 1,
                        title: lang.t("share.profile", "Share Your Profile"),
                        description: lang.t("share.profile.desc", ""),
                    }
                    HowItWorksCard {
                        number: 2,
                        title: lang.t("determine.goals", "Determine Your Goals"),
                        description: lang.t("determine.goals.desc", ""),
                    }
                    HowItWorksCard {
                        number: 3,
                        title: lang.t("get.plan", "Get Your Custom Plan"),
                        description: lang.t("get.plan.desc", ""),
                    }
                }
            }

            ApiKeyPanel {}
        }
    }
}

#[component]
fn HowItWorksCard(number: u8, title: String, description: String) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-number", "{number}" }
            h3 { "{title}" }
            p { "{description}" }
        }
    }
}
