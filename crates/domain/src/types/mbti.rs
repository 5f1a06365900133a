//! MBTI personality type codes

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the sixteen four-letter MBTI codes.
///
/// Ordering of `all()` follows the temperament grouping the questionnaire
/// dropdown shows (analysts, diplomats, sentinels, explorers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MbtiType {
    Intj,
    Intp,
    Entj,
    Entp,
    Infj,
    Infp,
    Enfj,
    Enfp,
    Istj,
    Isfj,
    Estj,
    Esfj,
    Istp,
    Isfp,
    Estp,
    Esfp,
}

impl MbtiType {
    /// All codes in dropdown order
    pub fn all() -> &'static [MbtiType] {
        &[
            MbtiType::Intj,
            MbtiType::Intp,
            MbtiType::Entj,
            MbtiType::Entp,
            MbtiType::Infj,
            MbtiType::Infp,
            MbtiType::Enfj,
            MbtiType::Enfp,
            MbtiType::Istj,
            MbtiType::Isfj,
            MbtiType::Estj,
            MbtiType::Esfj,
            MbtiType::Istp,
            MbtiType::Isfp,
            MbtiType::Estp,
            MbtiType::Esfp,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            MbtiType::Intj => "INTJ",
            MbtiType::Intp => "INTP",
            MbtiType::Entj => "ENTJ",
            MbtiType::Entp => "ENTP",
            MbtiType::Infj => "INFJ",
            MbtiType::Infp => "INFP",
            MbtiType::Enfj => "ENFJ",
            MbtiType::Enfp => "ENFP",
            MbtiType::Istj => "ISTJ",
            MbtiType::Isfj => "ISFJ",
            MbtiType::Estj => "ESTJ",
            MbtiType::Esfj => "ESFJ",
            MbtiType::Istp => "ISTP",
            MbtiType::Isfp => "ISFP",
            MbtiType::Estp => "ESTP",
            MbtiType::Esfp => "ESFP",
        }
    }

    /// First letter is `I`
    pub fn is_introvert(&self) -> bool {
        self.code().starts_with('I')
    }

    /// Third letter is `T`
    pub fn is_thinking(&self) -> bool {
        self.code().as_bytes()[2] == b'T'
    }

    /// Second letter is `N`
    pub fn is_intuitive(&self) -> bool {
        self.code().as_bytes()[1] == b'N'
    }

    /// Fourth letter is `J`
    pub fn is_judging(&self) -> bool {
        self.code().ends_with('J')
    }
}

impl fmt::Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MbtiType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        MbtiType::all()
            .iter()
            .copied()
            .find(|t| t.code() == wanted)
            .ok_or_else(|| DomainError::parse(format!("Unknown MBTI type: '{}'", s)))
    }
}
