//! Five-step questionnaire
//!
//! The current step's panel, the step indicator, and Previous/Next. Next is
//! gated on the step's requirements; the last step submits and moves to the
//! results page.

use dioxus::prelude::*;
use growthwise_domain::{missing_requirement, WizardStep};

use crate::application::settings::resolve_credential;
use crate::presentation::components::questionnaire::{
    GoalsStep, ObjectivesStep, PersonalityStep, SituationStep, StepIndicator, TimeStep,
};
use crate::presentation::services::use_services;
use crate::presentation::state::{use_language_state, use_plan_state, use_questionnaire_state};
use crate::routes::Route;
use crate::use_platform;

#[component]
pub fn QuestionnaireView() -> Element {
    let lang = use_language_state();
    let questionnaire = use_questionnaire_state();
    let mut plan_state = use_plan_state();
    let services = use_services();
    let platform = use_platform();
    let navigator = use_navigator();
    let mut show_validation = use_signal(|| false);

    // A direct link lands here without passing through the home page.
    use_effect({
        let mut questionnaire = questionnaire.clone();
        move || {
            questionnaire.ensure_session(|| {
                resolve_credential(services.env_credential.as_ref(), platform.as_ref())
            });
            // Coming back from the results page: reopen the last step.
            if questionnaire.peek().is_submission_ready() {
                questionnaire.jump_to(WizardStep::COUNT - 1);
            }
        }
    });

    let state = questionnaire.snapshot();
    let step = state.step().unwrap_or(WizardStep::Personality);
    let missing = missing_requirement(&state, step);
    let is_first = step.index() == 0;

    // Leaving the step hides the previous step's message.
    use_effect(use_reactive!(|step| {
        tracing::trace!(step = step.label_key(), "Showing step");
        show_validation.set(false);
    }));

    let on_next = {
        let questionnaire = questionnaire.clone();
        move |_| {
            let state = questionnaire.peek();
            let Some(step) = state.step() else {
                return;
            };
            if let Some(requirement) = missing_requirement(&state, step) {
                tracing::debug!(step = step.label_key(), ?requirement, "Step incomplete");
                show_validation.set(true);
                return;
            }
            show_validation.set(false);
            questionnaire.advance();
            if step.is_last() {
                tracing::info!("Questionnaire submitted");
                plan_state.clear();
                navigator.push(Route::ResultsRoute {});
            }
        }
    };
    let on_previous = {
        let questionnaire = questionnaire.clone();
        move |_| {
            show_validation.set(false);
            questionnaire.retreat();
        }
    };

    let next_label = if step.is_last() {
        lang.t("generate.plan", "Generate Plan")
    } else {
        lang.t("next", "Next")
    };

    rsx! {
        div { class: "page questionnaire-page",
            header { class: "page-header",
                Link { class: "back-link", to: Route::HomeRoute {},
                    "← "
                    {lang.t("back.home", "Back to Home")}
                }
                h1 { {lang.t("create.plan", "Create Your Personalized Growth Plan")} }
                p { class: "page-subtitle",
                    {lang.t("answer.questions", "Answer a few questions to receive a plan tailored to you")}
                }
            }

            StepIndicator {}

            div { class: "step-container",
                match step {
                    WizardStep::Personality => rsx! { PersonalityStep {} },
                    WizardStep::Situation => rsx! { SituationStep {} },
                    WizardStep::Time => rsx! { TimeStep {} },
                    WizardStep::Goals => rsx! { GoalsStep {} },
                    WizardStep::Objectives => rsx! { ObjectivesStep {} },
                }
            }

            if show_validation() {
                if let Some(requirement) = missing {
                    p { class: "validation-message", role: "alert",
                        {lang.t(requirement.message_key(), requirement.default_message())}
                    }
                }
            }

            footer { class: "step-actions",
                button {
                    class: "button button-outline",
                    disabled: is_first,
                    onclick: on_previous,
                    {lang.t("previous", "Previous")}
                }
                button { class: "button button-primary", onclick: on_next, "{next_label}" }
            }
        }
    }
}
