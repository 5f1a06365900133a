//! Per-step completeness rules and the navigation guard
//!
//! These are pure predicates. The store never consults them; the UI calls
//! them before moving forward.

use crate::wizard::{WizardState, WizardStep};

/// What is missing on an incomplete step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// MBTI, or Enneagram core plus wing
    PersonalityType,
    /// Core type chosen but no wing yet
    EnneagramWing,
    Situation,
    Goal,
    Objectives,
}

impl Requirement {
    /// Translation key for the inline validation message
    pub fn message_key(&self) -> &'static str {
        match self {
            Requirement::PersonalityType => "validation.personality",
            Requirement::EnneagramWing => "validation.wing",
            Requirement::Situation => "validation.situation",
            Requirement::Goal => "validation.goals",
            Requirement::Objectives => "validation.objectives",
        }
    }

    /// English message, used as the translation fallback
    pub fn default_message(&self) -> &'static str {
        match self {
            Requirement::PersonalityType => {
                "Please select your MBTI type, or an Enneagram type together with its wing"
            }
            Requirement::EnneagramWing => "Please select a wing for your Enneagram type",
            Requirement::Situation => "Please describe your current situation",
            Requirement::Goal => "Please choose at least one improvement goal",
            Requirement::Objectives => "Please share your life objectives",
        }
    }
}

/// Whether the required fields of `step` are filled in.
pub fn is_step_complete(state: &WizardState, step: WizardStep) -> bool {
    missing_requirement(state, step).is_none()
}

/// The first unmet requirement of `step`, if any.
pub fn missing_requirement(state: &WizardState, step: WizardStep) -> Option<Requirement> {
    match step {
        WizardStep::Personality => {
            let profile = &state.profile;
            let has_enneagram =
                profile.enneagram_core.is_some() && profile.enneagram_wing.is_some();
            if profile.mbti.is_some() || has_enneagram {
                None
            } else if profile.enneagram_core.is_some() {
                Some(Requirement::EnneagramWing)
            } else {
                Some(Requirement::PersonalityType)
            }
        }
        WizardStep::Situation => {
            state.situation.trim().is_empty().then_some(Requirement::Situation)
        }
        // Hour budgets always carry defaults
        WizardStep::Time => None,
        WizardStep::Goals => (!state.goals.has_any()).then_some(Requirement::Goal),
        WizardStep::Objectives => {
            state.objectives.trim().is_empty().then_some(Requirement::Objectives)
        }
    }
}

/// The earliest step that is not complete.
pub fn first_incomplete_step(state: &WizardState) -> Option<WizardStep> {
    WizardStep::all()
        .iter()
        .copied()
        .find(|step| !is_step_complete(state, *step))
}

/// Whether the UI may jump straight to step `target`.
///
/// Going back (or staying) is always allowed. Going forward requires every
/// step strictly before `target` to be complete.
pub fn can_jump_to(state: &WizardState, target: usize) -> bool {
    if target > WizardStep::COUNT {
        return false;
    }
    if target <= state.current_step {
        return true;
    }
    WizardStep::all()
        .iter()
        .take(target)
        .all(|step| is_step_complete(state, *step))
}

/// Whether every step is complete (safe to build a prompt)
pub fn all_steps_complete(state: &WizardState) -> bool {
    first_incomplete_step(state).is_none()
}
