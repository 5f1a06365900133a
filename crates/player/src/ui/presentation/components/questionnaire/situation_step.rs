use dioxus::prelude::*;
use growthwise_domain::WizardCommand;

use crate::presentation::state::{use_language_state, use_questionnaire_state};

#[component]
pub fn SituationStep() -> Element {
    let questionnaire = use_questionnaire_state();
    let lang = use_language_state();
    let situation = questionnaire.snapshot().situation.clone();

    rsx! {
        div { class: "step-panel",
            h2 { {lang.t("situation.title", "Current Situation")} }
            p { class: "step-description",
                {lang.t("situation.description", "Tell us about where you are in life right now")}
            }
            textarea {
                class: "text-area",
                rows: 8,
                placeholder: lang.t(
                    "situation.placeholder",
                    "Describe your work, responsibilities, challenges and what occupies your days...",
                ),
                value: "{situation}",
                oninput: move |evt| {
                    let _ = questionnaire.dispatch(WizardCommand::SetSituation(evt.value()));
                },
            }
        }
    }
}
