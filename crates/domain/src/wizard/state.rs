//! WizardState - the questionnaire aggregate

use serde::{Deserialize, Serialize};

use crate::types::{EnneagramType, GoalSet, MbtiType, TimeAvailability};
use crate::wizard::WizardStep;

/// Personality typology answers.
///
/// `enneagram_wing` is only ever set while `enneagram_core` is set, and is
/// always one of the core's ring neighbours; the reducer enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub mbti: Option<MbtiType>,
    pub enneagram_core: Option<EnneagramType>,
    pub enneagram_wing: Option<EnneagramType>,
}

impl PersonalityProfile {
    pub fn new(mbti: Option<MbtiType>) -> Self {
        Self {
            mbti,
            ..Self::default()
        }
    }

    /// Compact Enneagram code such as `3w4`, only when core and wing are both set
    pub fn enneagram_code(&self) -> Option<String> {
        match (self.enneagram_core, self.enneagram_wing) {
            (Some(core), Some(wing)) => Some(format!("{}w{}", core.number(), wing.number())),
            _ => None,
        }
    }
}

/// All answers plus the current step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WizardState {
    pub profile: PersonalityProfile,
    pub situation: String,
    pub time: TimeAvailability,
    pub goals: GoalSet,
    pub objectives: String,
    pub current_step: usize,
}

impl WizardState {
    /// The step currently shown, or `None` once past the last step
    pub fn step(&self) -> Option<WizardStep> {
        WizardStep::from_index(self.current_step)
    }

    /// Whether the user has advanced past the last step
    pub fn is_submission_ready(&self) -> bool {
        self.current_step >= WizardStep::COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = WizardState::default();
        assert_eq!(state.current_step, 0);
        assert_eq!(state.step(), Some(WizardStep::Personality));
        assert!(state.situation.is_empty());
        assert!(state.objectives.is_empty());
        assert_eq!(state.time.weekday.hours(), 2.0);
        assert_eq!(state.time.weekend.hours(), 4.0);
        assert!(!state.is_submission_ready());
    }

    #[test]
    fn test_enneagram_code_requires_both() {
        let mut profile = PersonalityProfile::default();
        profile.enneagram_core = Some(EnneagramType::Type3);
        assert_eq!(profile.enneagram_code(), None);
        profile.enneagram_wing = Some(EnneagramType::Type4);
        assert_eq!(profile.enneagram_code().as_deref(), Some("3w4"));
    }

    #[test]
    fn test_past_last_step_is_submission_ready() {
        let state = WizardState {
            current_step: WizardStep::COUNT,
            ..WizardState::default()
        };
        assert!(state.is_submission_ready());
        assert_eq!(state.step(), None);
    }
}
