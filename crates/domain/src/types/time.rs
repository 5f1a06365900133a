//! Time budget value objects
//!
//! Hours are stored as half-hour units so that slider steps compare
//! exactly and the weekly total never accumulates float error.

use crate::error::DomainError;
use crate::types::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest allowed budget, in half-hours (0.5 h)
const MIN_HALF_HOURS: u8 = 1;
/// Weekday ceiling, in half-hours (5 h)
const WEEKDAY_MAX_HALF_HOURS: u8 = 10;
/// Weekend ceiling, in half-hours (8 h)
const WEEKEND_MAX_HALF_HOURS: u8 = 16;

/// Which kind of day a budget applies to; determines its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    Weekday,
    Weekend,
}

impl DayKind {
    fn max_half_hours(&self) -> u8 {
        match self {
            DayKind::Weekday => WEEKDAY_MAX_HALF_HOURS,
            DayKind::Weekend => WEEKEND_MAX_HALF_HOURS,
        }
    }

    fn field_name(&self) -> &'static str {
        match self {
            DayKind::Weekday => "weekday hours",
            DayKind::Weekend => "weekend hours",
        }
    }

    /// Slider bounds in hours: (min, max, step)
    pub fn slider_bounds(&self) -> (f32, f32, f32) {
        (
            MIN_HALF_HOURS as f32 / 2.0,
            self.max_half_hours() as f32 / 2.0,
            0.5,
        )
    }
}

/// A per-day hour budget in half-hour steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HourBudget {
    half_hours: u8,
}

impl HourBudget {
    /// Build a budget from hours, rejecting values off the 0.5 step or
    /// outside the range for `kind`.
    pub fn from_hours(kind: DayKind, hours: f32) -> Result<Self, DomainError> {
        let (min, max, _) = kind.slider_bounds();
        if !hours.is_finite() || hours < min || hours > max {
            return Err(DomainError::out_of_range(kind.field_name(), min, max, hours));
        }
        let doubled = hours * 2.0;
        if (doubled - doubled.round()).abs() > f32::EPSILON {
            return Err(DomainError::validation(format!(
                "{} must be a multiple of 0.5, got {}",
                kind.field_name(),
                hours
            )));
        }
        Ok(Self {
            half_hours: doubled.round() as u8,
        })
    }

    pub fn hours(&self) -> f32 {
        self.half_hours as f32 / 2.0
    }

    pub fn half_hours(&self) -> u8 {
        self.half_hours
    }

    /// Whole minutes in this budget
    pub fn minutes(&self) -> u32 {
        self.half_hours as u32 * 30
    }

    const fn from_half_hours(half_hours: u8) -> Self {
        Self { half_hours }
    }
}

impl fmt::Display for HourBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 2.0 -> "2", 2.5 -> "2.5"
        if self.half_hours % 2 == 0 {
            write!(f, "{}", self.half_hours / 2)
        } else {
            write!(f, "{}.5", self.half_hours / 2)
        }
    }
}

/// Preferred time of day for growth activities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn all() -> &'static [TimeOfDay] {
        &[
            TimeOfDay::Morning,
            TimeOfDay::Afternoon,
            TimeOfDay::Evening,
            TimeOfDay::Night,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }

    /// Label with the clock window, e.g. "Morning (5am - 11am)"
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (TimeOfDay::Morning, Language::En) => "Morning (5am - 11am)",
            (TimeOfDay::Afternoon, Language::En) => "Afternoon (11am - 5pm)",
            (TimeOfDay::Evening, Language::En) => "Evening (5pm - 10pm)",
            (TimeOfDay::Night, Language::En) => "Night (10pm - 5am)",
            (TimeOfDay::Morning, Language::Zh) => "早晨 (5点 - 11点)",
            (TimeOfDay::Afternoon, Language::Zh) => "下午 (11点 - 17点)",
            (TimeOfDay::Evening, Language::Zh) => "傍晚 (17点 - 22点)",
            (TimeOfDay::Night, Language::Zh) => "深夜 (22点 - 5点)",
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "evening" => Ok(TimeOfDay::Evening),
            "night" => Ok(TimeOfDay::Night),
            _ => Err(DomainError::parse(format!(
                "Unknown time of day: '{}'. Valid values: morning, afternoon, evening, night",
                s
            ))),
        }
    }
}

/// How much time the user can spend on growth each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeAvailability {
    pub weekday: HourBudget,
    pub weekend: HourBudget,
    pub preferred_time: TimeOfDay,
}

impl TimeAvailability {
    /// Hours per week: five weekdays plus two weekend days
    pub fn weekly_hours(&self) -> f32 {
        let half_hours = self.weekday.half_hours() as u32 * 5 + self.weekend.half_hours() as u32 * 2;
        half_hours as f32 / 2.0
    }
}

impl Default for TimeAvailability {
    fn default() -> Self {
        Self {
            weekday: HourBudget::from_half_hours(4),
            weekend: HourBudget::from_half_hours(8),
            preferred_time: TimeOfDay::default(),
        }
    }
}
