//! Field-update commands and the reducer that applies them
//!
//! Every change to the questionnaire answers is expressed as a
//! `WizardCommand`. `reduce` never mutates its input: it returns a new
//! state, or an error if the command would break an invariant.

use crate::error::DomainError;
use crate::types::{DayKind, EnneagramType, HourBudget, MbtiType, TimeOfDay};
use crate::wizard::WizardState;

/// A single answer update.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardCommand {
    SetMbti(Option<MbtiType>),
    /// Always clears the wing, since a wing chosen for another core is never valid
    SetEnneagramCore(Option<EnneagramType>),
    SetEnneagramWing(Option<EnneagramType>),
    SetSituation(String),
    SetWeekdayHours(f32),
    SetWeekendHours(f32),
    SetPreferredTime(TimeOfDay),
    SetGoal { slot: usize, value: String },
    SetObjectives(String),
}

impl WizardCommand {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            WizardCommand::SetMbti(_) => "set_mbti",
            WizardCommand::SetEnneagramCore(_) => "set_enneagram_core",
            WizardCommand::SetEnneagramWing(_) => "set_enneagram_wing",
            WizardCommand::SetSituation(_) => "set_situation",
            WizardCommand::SetWeekdayHours(_) => "set_weekday_hours",
            WizardCommand::SetWeekendHours(_) => "set_weekend_hours",
            WizardCommand::SetPreferredTime(_) => "set_preferred_time",
            WizardCommand::SetGoal { .. } => "set_goal",
            WizardCommand::SetObjectives(_) => "set_objectives",
        }
    }
}

/// Apply `command` to `state`, producing the next state.
///
/// # Errors
///
/// - `Validation` if a wing is set without a core, or is not adjacent to it
/// - `Validation` if a goal slot does not exist
/// - `OutOfRange` / `Validation` for hour budgets off the allowed grid
pub fn reduce(state: &WizardState, command: WizardCommand) -> Result<WizardState, DomainError> {
    let mut next = state.clone();
    match command {
        WizardCommand::SetMbti(mbti) => next.profile.mbti = mbti,
        WizardCommand::SetEnneagramCore(core) => {
            next.profile.enneagram_core = core;
            next.profile.enneagram_wing = None;
        }
        WizardCommand::SetEnneagramWing(None) => next.profile.enneagram_wing = None,
        WizardCommand::SetEnneagramWing(Some(wing)) => {
            let core = next.profile.enneagram_core.ok_or_else(|| {
                DomainError::validation("an Enneagram wing requires a core type")
            })?;
            if !core.accepts_wing(wing) {
                let [left, right] = core.wings();
                return Err(DomainError::validation(format!(
                    "{} is not a wing of {} (expected {} or {})",
                    wing, core, left, right
                )));
            }
            next.profile.enneagram_wing = Some(wing);
        }
        WizardCommand::SetSituation(text) => next.situation = text,
        WizardCommand::SetWeekdayHours(hours) => {
            next.time.weekday = HourBudget::from_hours(DayKind::Weekday, hours)?;
        }
        WizardCommand::SetWeekendHours(hours) => {
            next.time.weekend = HourBudget::from_hours(DayKind::Weekend, hours)?;
        }
        WizardCommand::SetPreferredTime(time) => next.time.preferred_time = time,
        WizardCommand::SetGoal { slot, value } => {
            next.goals = next.goals.with_slot(slot, value)?;
        }
        WizardCommand::SetObjectives(text) => next.objectives = text,
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_core(core: EnneagramType) -> WizardState {
        reduce(
            &WizardState::default(),
            WizardCommand::SetEnneagramCore(Some(core)),
        )
        .unwrap()
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let state = WizardState::default();
        let next = reduce(&state, WizardCommand::SetSituation("busy".into())).unwrap();
        assert!(state.situation.is_empty());
        assert_eq!(next.situation, "busy");
    }

    #[test]
    fn test_changing_core_clears_wing() {
        let state = with_core(EnneagramType::Type3);
        let state = reduce(
            &state,
            WizardCommand::SetEnneagramWing(Some(EnneagramType::Type4)),
        )
        .unwrap();
        assert_eq!(state.profile.enneagram_wing, Some(EnneagramType::Type4));

        let state = reduce(
            &state,
            WizardCommand::SetEnneagramCore(Some(EnneagramType::Type5)),
        )
        .unwrap();
        assert_eq!(state.profile.enneagram_core, Some(EnneagramType::Type5));
        assert_eq!(state.profile.enneagram_wing, None);
    }

    #[test]
    fn test_reselecting_same_core_still_clears_wing() {
        let state = with_core(EnneagramType::Type9);
        let state = reduce(
            &state,
            WizardCommand::SetEnneagramWing(Some(EnneagramType::Type1)),
        )
        .unwrap();
        let state = reduce(
            &state,
            WizardCommand::SetEnneagramCore(Some(EnneagramType::Type9)),
        )
        .unwrap();
        assert_eq!(state.profile.enneagram_wing, None);
    }

    #[test]
    fn test_wing_without_core_rejected() {
        let err = reduce(
            &WizardState::default(),
            WizardCommand::SetEnneagramWing(Some(EnneagramType::Type2)),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_non_adjacent_wing_rejected() {
        let state = with_core(EnneagramType::Type3);
        let err = reduce(
            &state,
            WizardCommand::SetEnneagramWing(Some(EnneagramType::Type7)),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Type 7"));
    }

    #[test]
    fn test_hours_validated() {
        let state = WizardState::default();
        let next = reduce(&state, WizardCommand::SetWeekdayHours(3.5)).unwrap();
        assert_eq!(next.time.weekday.hours(), 3.5);
        assert!(reduce(&state, WizardCommand::SetWeekdayHours(6.0)).is_err());
        assert!(reduce(&state, WizardCommand::SetWeekendHours(7.5)).is_ok());
    }

    #[test]
    fn test_goal_slot_bounds() {
        let state = WizardState::default();
        let next = reduce(
            &state,
            WizardCommand::SetGoal {
                slot: 4,
                value: "Boost creativity".into(),
            },
        )
        .unwrap();
        assert_eq!(next.goals.slot(4), Some("Boost creativity"));
        assert!(reduce(
            &state,
            WizardCommand::SetGoal {
                slot: 5,
                value: "x".into()
            }
        )
        .is_err());
    }
}
