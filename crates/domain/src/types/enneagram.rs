//! Enneagram core types and the wing resolver
//!
//! The nine types sit on a ring: type 1 neighbours 9 and 2, type 9
//! neighbours 8 and 1. A wing is always one of the two ring neighbours
//! of the core type, never the core itself.

use crate::error::DomainError;
use crate::types::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An Enneagram type on the 1-9 ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EnneagramType {
    Type1 = 1,
    Type2 = 2,
    Type3 = 3,
    Type4 = 4,
    Type5 = 5,
    Type6 = 6,
    Type7 = 7,
    Type8 = 8,
    Type9 = 9,
}

impl EnneagramType {
    pub fn all() -> &'static [EnneagramType] {
        &[
            EnneagramType::Type1,
            EnneagramType::Type2,
            EnneagramType::Type3,
            EnneagramType::Type4,
            EnneagramType::Type5,
            EnneagramType::Type6,
            EnneagramType::Type7,
            EnneagramType::Type8,
            EnneagramType::Type9,
        ]
    }

    /// Type number, 1-9
    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn from_number(n: u8) -> Result<Self, DomainError> {
        match n {
            1 => Ok(EnneagramType::Type1),
            2 => Ok(EnneagramType::Type2),
            3 => Ok(EnneagramType::Type3),
            4 => Ok(EnneagramType::Type4),
            5 => Ok(EnneagramType::Type5),
            6 => Ok(EnneagramType::Type6),
            7 => Ok(EnneagramType::Type7),
            8 => Ok(EnneagramType::Type8),
            9 => Ok(EnneagramType::Type9),
            other => Err(DomainError::parse(format!(
                "Enneagram type must be 1-9, got {}",
                other
            ))),
        }
    }

    /// The two wing candidates as `[left, right]`.
    pub fn wings(&self) -> [EnneagramType; 2] {
        let n = self.number();
        let left = if n == 1 { 9 } else { n - 1 };
        let right = if n == 9 { 1 } else { n + 1 };
        // Both values are in 1..=9 by construction
        [Self::ring(left), Self::ring(right)]
    }

    /// Whether `wing` is a valid wing for this core type
    pub fn accepts_wing(&self, wing: EnneagramType) -> bool {
        self.wings().contains(&wing)
    }

    /// Archetype name, e.g. "The Achiever"
    pub fn archetype(&self, language: Language) -> &'static str {
        match (self, language) {
            (EnneagramType::Type1, Language::En) => "The Perfectionist",
            (EnneagramType::Type2, Language::En) => "The Helper",
            (EnneagramType::Type3, Language::En) => "The Achiever",
            (EnneagramType::Type4, Language::En) => "The Individualist",
            (EnneagramType::Type5, Language::En) => "The Investigator",
            (EnneagramType::Type6, Language::En) => "The Loyalist",
            (EnneagramType::Type7, Language::En) => "The Enthusiast",
            (EnneagramType::Type8, Language::En) => "The Challenger",
            (EnneagramType::Type9, Language::En) => "The Peacemaker",
            (EnneagramType::Type1, Language::Zh) => "完美主义者",
            (EnneagramType::Type2, Language::Zh) => "助人者",
            (EnneagramType::Type3, Language::Zh) => "成就者",
            (EnneagramType::Type4, Language::Zh) => "个人主义者",
            (EnneagramType::Type5, Language::Zh) => "探索者",
            (EnneagramType::Type6, Language::Zh) => "忠诚者",
            (EnneagramType::Type7, Language::Zh) => "热情者",
            (EnneagramType::Type8, Language::Zh) => "挑战者",
            (EnneagramType::Type9, Language::Zh) => "和平者",
        }
    }

    /// Dropdown label, e.g. "Type 3 - The Achiever"
    pub fn label(&self, language: Language) -> String {
        match language {
            Language::En => format!("Type {} - {}", self.number(), self.archetype(language)),
            Language::Zh => format!("{}号 - {}", self.number(), self.archetype(language)),
        }
    }

    fn ring(n: u8) -> EnneagramType {
        match n {
            1 => EnneagramType::Type1,
            2 => EnneagramType::Type2,
            3 => EnneagramType::Type3,
            4 => EnneagramType::Type4,
            5 => EnneagramType::Type5,
            6 => EnneagramType::Type6,
            7 => EnneagramType::Type7,
            8 => EnneagramType::Type8,
            _ => EnneagramType::Type9,
        }
    }
}

/// Wing candidates for a core type: `[core - 1, core + 1]` wrapping on the ring.
pub fn wings_for(core: EnneagramType) -> [EnneagramType; 2] {
    core.wings()
}

impl fmt::Display for EnneagramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type {}", self.number())
    }
}

impl TryFrom<u8> for EnneagramType {
    type Error = DomainError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::from_number(n)
    }
}

impl From<EnneagramType> for u8 {
    fn from(t: EnneagramType) -> u8 {
        t.number()
    }
}

impl FromStr for EnneagramType {
    type Err = DomainError;

    /// Accepts `"3"`, `"Type 3"` and the full dropdown label `"Type 3 - The Achiever"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let rest = trimmed
            .strip_prefix("Type")
            .or_else(|| trimmed.strip_prefix("type"))
            .unwrap_or(trimmed)
            .trim_start();
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        let n: u8 = digits
            .parse()
            .map_err(|_| DomainError::parse(format!("Unknown Enneagram type: '{}'", s)))?;
        Self::from_number(n)
    }
}
