//! The five questionnaire steps

use serde::{Deserialize, Serialize};

/// A step of the questionnaire, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Personality,
    Situation,
    Time,
    Goals,
    Objectives,
}

impl WizardStep {
    /// Number of steps; `current_step == COUNT` means submission ready
    pub const COUNT: usize = 5;

    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Personality,
            WizardStep::Situation,
            WizardStep::Time,
            WizardStep::Goals,
            WizardStep::Objectives,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Personality => 0,
            WizardStep::Situation => 1,
            WizardStep::Time => 2,
            WizardStep::Goals => 3,
            WizardStep::Objectives => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<WizardStep> {
        Self::all().get(index).copied()
    }

    pub fn is_last(&self) -> bool {
        self.index() + 1 == Self::COUNT
    }

    /// Translation key for the step label
    pub fn label_key(&self) -> &'static str {
        match self {
            WizardStep::Personality => "step.personality",
            WizardStep::Situation => "step.situation",
            WizardStep::Time => "step.time",
            WizardStep::Goals => "step.goals",
            WizardStep::Objectives => "step.objectives",
        }
    }

    /// English label, used as the translation fallback
    pub fn default_label(&self) -> &'static str {
        match self {
            WizardStep::Personality => "Personality",
            WizardStep::Situation => "Situation",
            WizardStep::Time => "Time",
            WizardStep::Goals => "Goals",
            WizardStep::Objectives => "Objectives",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips() {
        for step in WizardStep::all() {
            assert_eq!(WizardStep::from_index(step.index()), Some(*step));
        }
        assert_eq!(WizardStep::from_index(WizardStep::COUNT), None);
    }

    #[test]
    fn test_only_objectives_is_last() {
        let last: Vec<_> = WizardStep::all().iter().filter(|s| s.is_last()).collect();
        assert_eq!(last, vec![&WizardStep::Objectives]);
    }
}
