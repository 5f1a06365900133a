//! Section headings shared by the prompt template and the fallback plan

use growthwise_domain::Language;

/// The four sections every plan must contain, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSection {
    PersonalityAnalysis,
    DevelopmentStrategy,
    ActionChecklist,
    ImplementationPlan,
}

impl PlanSection {
    pub fn all() -> &'static [PlanSection] {
        &[
            PlanSection::PersonalityAnalysis,
            PlanSection::DevelopmentStrategy,
            PlanSection::ActionChecklist,
            PlanSection::ImplementationPlan,
        ]
    }

    /// 1-based position in the plan
    pub fn number(&self) -> usize {
        match self {
            PlanSection::PersonalityAnalysis => 1,
            PlanSection::DevelopmentStrategy => 2,
            PlanSection::ActionChecklist => 3,
            PlanSection::ImplementationPlan => 4,
        }
    }

    pub fn heading(&self, language: Language) -> &'static str {
        match (self, language) {
            (PlanSection::PersonalityAnalysis, Language::En) => {
                "Personality Strengths & Weaknesses Analysis"
            }
            (PlanSection::DevelopmentStrategy, Language::En) => "Personal Development Strategy",
            (PlanSection::ActionChecklist, Language::En) => "Action Checklist",
            (PlanSection::ImplementationPlan, Language::En) => "Implementation Plan",
            (PlanSection::PersonalityAnalysis, Language::Zh) => "性格优势与劣势分析",
            (PlanSection::DevelopmentStrategy, Language::Zh) => "个人发展策略",
            (PlanSection::ActionChecklist, Language::Zh) => "行动清单",
            (PlanSection::ImplementationPlan, Language::Zh) => "实施计划",
        }
    }

    /// Markdown `##` heading line, e.g. `## 3. Action Checklist`
    pub fn markdown_heading(&self, language: Language) -> String {
        format!("## {}. {}", self.number(), self.heading(language))
    }
}

/// Checklist horizons in months
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizon {
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

impl Horizon {
    pub fn all() -> &'static [Horizon] {
        &[Horizon::ThreeMonths, Horizon::SixMonths, Horizon::TwelveMonths]
    }

    pub fn months(&self) -> u8 {
        match self {
            Horizon::ThreeMonths => 3,
            Horizon::SixMonths => 6,
            Horizon::TwelveMonths => 12,
        }
    }

    pub fn label(&self, language: Language) -> String {
        match language {
            Language::En => format!("{}-Month Goals", self.months()),
            Language::Zh => format!("{}个月目标", self.months()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_numbered_in_order() {
        let numbers: Vec<_> = PlanSection::all().iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_markdown_heading() {
        assert_eq!(
            PlanSection::ActionChecklist.markdown_heading(Language::En),
            "## 3. Action Checklist"
        );
        assert_eq!(
            PlanSection::ImplementationPlan.markdown_heading(Language::Zh),
            "## 4. 实施计划"
        );
    }

    #[test]
    fn test_horizon_labels() {
        assert_eq!(Horizon::SixMonths.label(Language::En), "6-Month Goals");
        assert_eq!(Horizon::TwelveMonths.label(Language::Zh), "12个月目标");
    }
}
