use dioxus::prelude::*;
use growthwise_domain::{EnneagramType, MbtiType, WizardCommand};

use crate::presentation::state::{use_language_state, use_questionnaire_state};

/// MBTI type, or Enneagram core plus wing. The wing list follows the core.
#[component]
pub fn PersonalityStep() -> Element {
    let questionnaire = use_questionnaire_state();
    let lang = use_language_state();
    let language = lang.language();
    let profile = questionnaire.snapshot().profile;

    let mbti_value = profile.mbti.map(|m| m.code().to_string()).unwrap_or_default();
    let core_value = profile
        .enneagram_core
        .map(|c| c.number().to_string())
        .unwrap_or_default();
    let wing_value = profile
        .enneagram_wing
        .map(|w| w.number().to_string())
        .unwrap_or_default();
    let wing_options: Vec<EnneagramType> = profile
        .enneagram_core
        .map(|core| core.wings().to_vec())
        .unwrap_or_default();

    let on_mbti = {
        let questionnaire = questionnaire.clone();
        move |evt: Event<FormData>| {
            let mbti = evt.value().parse::<MbtiType>().ok();
            let _ = questionnaire.dispatch(WizardCommand::SetMbti(mbti));
        }
    };
    let on_core = {
        let questionnaire = questionnaire.clone();
        move |evt: Event<FormData>| {
            let core = evt.value().parse::<EnneagramType>().ok();
            let _ = questionnaire.dispatch(WizardCommand::SetEnneagramCore(core));
        }
    };
    let on_wing = move |evt: Event<FormData>| {
        let wing = evt.value().parse::<EnneagramType>().ok();
        let _ = questionnaire.dispatch(WizardCommand::SetEnneagramWing(wing));
    };

    rsx! {
        div { class: "step-panel",
            h2 { {lang.t("personality.type", "Your Personality Type")} }
            p { class: "step-description",
                {lang.t("personality.description", "Share your personality test results for tailored recommendations")}
            }
            p { class: "hint",
                {lang.t("personality.either", "Choose an MBTI type, an Enneagram type with its wing, or both.")}
            }

            div { class: "field",
                label { r#for: "mbti", {lang.t("mbti.type", "MBTI Type")} }
                select { id: "mbti", value: "{mbti_value}", onchange: on_mbti,
                    option { value: "", {lang.t("select.mbti", "Select your MBTI type")} }
                    for mbti in MbtiType::all() {
                        option {
                            key: "{mbti.code()}",
                            value: mbti.code(),
                            selected: profile.mbti == Some(*mbti),
                            "{mbti.code()}"
                        }
                    }
                }
            }

            div { class: "field-row",
                div { class: "field",
                    label { r#for: "enneagram-core", {lang.t("enneagram.type", "Enneagram Type")} }
                    select { id: "enneagram-core", value: "{core_value}", onchange: on_core,
                        option { value: "", {lang.t("select.enneagram", "Select your Enneagram type")} }
                        for core in EnneagramType::all() {
                            option {
                                key: "{core.number()}",
                                value: "{core.number()}",
                                selected: profile.enneagram_core == Some(*core),
                                {core.label(language)}
                            }
                        }
                    }
                }
                div { class: "field",
                    label { r#for: "enneagram-wing", {lang.t("enneagram.wing", "Wing")} }
                    select {
                        id: "enneagram-wing",
                        value: "{wing_value}",
                        disabled: profile.enneagram_core.is_none(),
                        onchange: on_wing,
                        option { value: "", {lang.t("select.wing", "Select your wing")} }
                        for wing in wing_options {
                            option {
                                key: "{wing.number()}",
                                value: "{wing.number()}",
                                selected: profile.enneagram_wing == Some(wing),
                                {wing.label(language)}
                            }
                        }
                    }
                }
            }

            if let Some(code) = profile.enneagram_code() {
                p { class: "profile-code", "{code}" }
            }
        }
    }
}
