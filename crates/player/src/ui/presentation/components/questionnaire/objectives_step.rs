use dioxus::prelude::*;
use growthwise_domain::WizardCommand;

use crate::presentation::state::{use_language_state, use_questionnaire_state};

#[component]
pub fn ObjectivesStep() -> Element {
    let questionnaire = use_questionnaire_state();
    let lang = use_language_state();
    let objectives = questionnaire.snapshot().objectives.clone();

    rsx! {
        div { class: "step-panel",
            h2 { {lang.t("life.objectives", "Life Objectives")} }
            p { class: "step-description",
                {lang.t("vision.description", "Share your long-term vision")}
            }
            label { r#for: "objectives",
                {lang.t("life.goals.question", "What are your life goals?")}
            }
            textarea {
                id: "objectives",
                class: "text-area",
                rows: 8,
                placeholder: lang.t(
                    "life.goals.placeholder",
                    "Describe your long-term vision, life goals, and what success means to you...",
                ),
                value: "{objectives}",
                oninput: move |evt| {
                    let _ = questionnaire.dispatch(WizardCommand::SetObjectives(evt.value()));
                },
            }
        }
    }
}
