//! Time availability: two hour sliders and a preferred time of day

use dioxus::prelude::*;
use growthwise_domain::{DayKind, HourBudget, TimeOfDay, WizardCommand};

use crate::presentation::state::{use_language_state, use_questionnaire_state};

#[component]
pub fn TimeStep() -> Element {
    let questionnaire = use_questionnaire_state();
    let lang = use_language_state();
    let language = lang.language();
    let time = questionnaire.snapshot().time;
    let hours_unit = lang.t("hours", "hours");

    let on_weekday = {
        let questionnaire = questionnaire.clone();
        move |hours: f32| {
            let _ = questionnaire.dispatch(WizardCommand::SetWeekdayHours(hours));
        }
    };
    let on_weekend = {
        let questionnaire = questionnaire.clone();
        move |hours: f32| {
            let _ = questionnaire.dispatch(WizardCommand::SetWeekendHours(hours));
        }
    };

    rsx! {
        div { class: "step-panel",
            h2 { {lang.t("time.availability", "Time Availability")} }
            p { class: "step-description",
                {lang.t("time.description", "How much time can you dedicate to personal growth?")}
            }

            HourSlider {
                id: "weekday-hours",
                label: lang.t("weekday.hours", "Weekday Hours (per day)"),
                unit: hours_unit.clone(),
                kind: DayKind::Weekday,
                value: time.weekday,
                on_change: on_weekday,
            }
            HourSlider {
                id: "weekend-hours",
                label: lang.t("weekend.hours", "Weekend Hours (per day)"),
                unit: hours_unit.clone(),
                kind: DayKind::Weekend,
                value: time.weekend,
                on_change: on_weekend,
            }

            p { class: "weekly-total",
                {lang.t("weekly.total", "Weekly total")}
                ": {time.weekly_hours()} {hours_unit}"
            }

            fieldset { class: "field",
                legend { {lang.t("preferred.time", "Preferred Time of Day")} }
                div { class: "radio-row",
                    for slot in TimeOfDay::all().iter().copied() {
                        {
                            let questionnaire = questionnaire.clone();
                            rsx! {
                                label { key: "{slot.as_str()}", class: "radio-option",
                                    input {
                                        r#type: "radio",
                                        name: "preferred-time",
                                        value: slot.as_str(),
                                        checked: time.preferred_time == slot,
                                        onchange: move |_| {
                                            let _ = questionnaire.dispatch(WizardCommand::SetPreferredTime(slot));
                                        },
                                    }
                                    span { {slot.label(language)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HourSlider(
    id: &'static str,
    label: String,
    unit: String,
    kind: DayKind,
    value: HourBudget,
    on_change: EventHandler<f32>,
) -> Element {
    let (min, max, step) = kind.slider_bounds();

    rsx! {
        div { class: "field",
            div { class: "slider-header",
                label { r#for: id, "{label}" }
                span { class: "slider-value", "{value} {unit}" }
            }
            input {
                id,
                class: "slider",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value.hours()}",
                oninput: move |evt| {
                    if let Ok(hours) = evt.value().parse::<f32>() {
                        on_change.call(hours);
                    }
                },
            }
        }
    }
}
