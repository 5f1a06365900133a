//! Questionnaire vocabulary types
//!
//! Closed sets (MBTI codes, Enneagram types, languages, time of day) and
//! the bounded value objects the wizard stores.

mod enneagram;
mod goals;
mod language;
mod mbti;
mod time;

pub use enneagram::{wings_for, EnneagramType};
pub use goals::{GoalSet, GoalSuggestion, GOAL_SLOTS};
pub use language::Language;
pub use mbti::MbtiType;
pub use time::{DayKind, HourBudget, TimeAvailability, TimeOfDay};
