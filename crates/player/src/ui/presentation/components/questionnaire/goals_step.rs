//! Improvement goals: five slots, each a suggestion dropdown plus free text

use dioxus::prelude::*;
use growthwise_domain::{GoalSuggestion, Language, WizardCommand, GOAL_SLOTS};

use crate::presentation::state::{use_language_state, use_questionnaire_state};

#[component]
pub fn GoalsStep() -> Element {
    let questionnaire = use_questionnaire_state();
    let lang = use_language_state();
    let state = questionnaire.snapshot();

    rsx! {
        div { class: "step-panel",
            h2 { {lang.t("improvement.goals", "Improvement Goals")} }
            p { class: "step-description",
                {lang.t("goals.description", "Select up to 5 areas you'd like to improve")}
            }
            for slot in 0..GOAL_SLOTS {
                GoalSlot {
                    key: "{slot}",
                    slot,
                    value: state.goals.slot(slot).unwrap_or_default().to_string(),
                }
            }
        }
    }
}

/// The suggestion whose label matches `value` in either language.
fn matching_suggestion(value: &str) -> Option<GoalSuggestion> {
    GoalSuggestion::all().iter().copied().find(|suggestion| {
        Language::all()
            .iter()
            .any(|language| suggestion.label(*language) == value)
    })
}

#[component]
fn GoalSlot(slot: usize, value: String) -> Element {
    let questionnaire = use_questionnaire_state();
    let lang = use_language_state();
    let language = lang.language();
    let selected = matching_suggestion(&value);

    let on_select = {
        let questionnaire = questionnaire.clone();
        move |evt: Event<FormData>| {
            let index = evt.value().parse::<usize>().ok();
            let value = index
                .and_then(|i| GoalSuggestion::all().get(i))
                .map(|suggestion| suggestion.label(language).to_string())
                .unwrap_or_default();
            let _ = questionnaire.dispatch(WizardCommand::SetGoal { slot, value });
        }
    };
    let on_custom = move |evt: Event<FormData>| {
        let _ = questionnaire.dispatch(WizardCommand::SetGoal {
            slot,
            value: evt.value(),
        });
    };

    // Custom text shows in the input; a picked suggestion shows in the dropdown.
    let custom_value = if selected.is_some() { String::new() } else { value.clone() };

    rsx! {
        div { class: "goal-slot",
            label { class: "goal-label", {lang.t("goal", "Goal")} " {slot + 1}" }
            select { class: "goal-select", onchange: on_select,
                option { value: "", selected: selected.is_none(),
                    {lang.t("select.goal", "Select an improvement goal")}
                }
                for (index, suggestion) in GoalSuggestion::all().iter().enumerate() {
                    option {
                        key: "{index}",
                        value: "{index}",
                        selected: selected == Some(*suggestion),
                        {suggestion.label(language)}
                    }
                }
            }
            input {
                class: "goal-input",
                r#type: "text",
                placeholder: lang.t("custom.goal", "Or type your own goal"),
                value: "{custom_value}",
                oninput: on_custom,
            }
        }
    }
}
