//! Improvement goals: five ordered slots plus a suggestion catalog

use crate::error::DomainError;
use crate::types::Language;
use serde::{Deserialize, Serialize};

/// Number of goal slots on the Goals step
pub const GOAL_SLOTS: usize = 5;

/// Up to five improvement goals, in the order the user entered them.
///
/// Slots are free strings; an empty (or whitespace-only) slot counts as
/// unset. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoalSet {
    slots: [String; GOAL_SLOTS],
}

impl GoalSet {
    /// Build from an iterator of goals, filling slots in order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if more than five goals are given.
    pub fn from_goals<I, S>(goals: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for (slot, goal) in goals.into_iter().enumerate() {
            set.set(slot, goal)?;
        }
        Ok(set)
    }

    /// Returns a copy with `slot` replaced.
    pub fn with_slot(&self, slot: usize, value: impl Into<String>) -> Result<Self, DomainError> {
        let mut next = self.clone();
        next.set(slot, value)?;
        Ok(next)
    }

    fn set(&mut self, slot: usize, value: impl Into<String>) -> Result<(), DomainError> {
        let target = self.slots.get_mut(slot).ok_or_else(|| {
            DomainError::validation(format!(
                "goal slot {} does not exist (there are {} slots)",
                slot, GOAL_SLOTS
            ))
        })?;
        *target = value.into();
        Ok(())
    }

    /// Raw slot contents, including empty ones
    pub fn slots(&self) -> &[String; GOAL_SLOTS] {
        &self.slots
    }

    pub fn slot(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    /// Trimmed, non-empty goals in slot order
    pub fn non_empty(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.trim()).filter(|s| !s.is_empty())
    }

    pub fn has_any(&self) -> bool {
        self.non_empty().next().is_some()
    }
}

/// Suggested goals offered in each slot's dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalSuggestion {
    ImproveProductivity,
    EnhanceCommunication,
    DevelopLeadership,
    LearnNewSkill,
    WorkLifeBalance,
    BoostCreativity,
    ManageStress,
    BetterRelationships,
    AdvanceCareer,
    PhysicalHealth,
    EmotionalIntelligence,
    ProblemSolving,
}

impl GoalSuggestion {
    pub fn all() -> &'static [GoalSuggestion] {
        &[
            GoalSuggestion::ImproveProductivity,
            GoalSuggestion::EnhanceCommunication,
            GoalSuggestion::DevelopLeadership,
            GoalSuggestion::LearnNewSkill,
            GoalSuggestion::WorkLifeBalance,
            GoalSuggestion::BoostCreativity,
            GoalSuggestion::ManageStress,
            GoalSuggestion::BetterRelationships,
            GoalSuggestion::AdvanceCareer,
            GoalSuggestion::PhysicalHealth,
            GoalSuggestion::EmotionalIntelligence,
            GoalSuggestion::ProblemSolving,
        ]
    }

    pub fn label(&self, language: Language) -> &'static str {
        use GoalSuggestion::*;
        match language {
            Language::En => match self {
                ImproveProductivity => "Improve productivity",
                EnhanceCommunication => "Enhance communication skills",
                DevelopLeadership => "Develop leadership abilities",
                LearnNewSkill => "Learn a new skill",
                WorkLifeBalance => "Achieve better work-life balance",
                BoostCreativity => "Boost creativity",
                ManageStress => "Manage stress more effectively",
                BetterRelationships => "Foster better relationships",
                AdvanceCareer => "Advance career prospects",
                PhysicalHealth => "Improve physical health",
                EmotionalIntelligence => "Develop emotional intelligence",
                ProblemSolving => "Enhance problem-solving abilities",
            },
            Language::Zh => match self {
                ImproveProductivity => "提高工作效率",
                EnhanceCommunication => "提升沟通能力",
                DevelopLeadership => "培养领导力",
                LearnNewSkill => "学习一项新技能",
                WorkLifeBalance => "实现更好的工作与生活平衡",
                BoostCreativity => "激发创造力",
                ManageStress => "更有效地管理压力",
                BetterRelationships => "建立更好的人际关系",
                AdvanceCareer => "拓展职业发展",
                PhysicalHealth => "改善身体健康",
                EmotionalIntelligence => "发展情绪智力",
                ProblemSolving => "增强解决问题的能力",
            },
        }
    }
}
