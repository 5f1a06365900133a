//! Step indicator
//!
//! One pill per step. A pill is clickable only when the navigation guard
//! allows jumping there; steps ahead of an incomplete one stay locked.

use dioxus::prelude::*;
use growthwise_domain::{can_jump_to, is_step_complete, WizardStep};

use crate::presentation::state::{use_language_state, use_questionnaire_state};

#[component]
pub fn StepIndicator() -> Element {
    let questionnaire = use_questionnaire_state();
    let lang = use_language_state();
    let state = questionnaire.snapshot();
    let current = state.current_step;

    rsx! {
        nav { class: "step-indicator",
            for step in WizardStep::all().iter().copied() {
                {
                    let index = step.index();
                    let reachable = can_jump_to(&state, index);
                    let class = if index == current {
                        "step-pill step-pill-active"
                    } else if index < current && is_step_complete(&state, step) {
                        "step-pill step-pill-complete"
                    } else if reachable {
                        "step-pill"
                    } else {
                        "step-pill step-pill-locked"
                    };
                    let questionnaire = questionnaire.clone();
                    rsx! {
                        button {
                            key: "{index}",
                            class,
                            disabled: !reachable,
                            onclick: move |_| questionnaire.jump_to(index),
                            span { class: "step-number", "{index + 1}" }
                            span { class: "step-label", {lang.t(step.label_key(), step.default_label())} }
                        }
                    }
                }
            }
        }
    }
}
