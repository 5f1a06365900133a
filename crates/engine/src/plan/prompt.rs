//! Plan request builder: system instruction plus user prompt

use growthwise_domain::{
    is_step_complete, DomainError, Language, WizardState, WizardStep,
};

use super::fields::{goal_bullets, profile_lines, time_budget_lines};
use super::sections::{Horizon, PlanSection};

/// Instruction text around the generated section list.
mod templates {
    pub const SYSTEM_INTRO_EN: &str = "You are an experienced personal growth coach. \
Using the user's personality profile, current situation, available time and goals, \
write a personalized growth plan in Markdown. Be concrete and practical, \
refer back to the user's own words, and keep every recommendation achievable \
within the stated time budget.";

    pub const SYSTEM_INTRO_ZH: &str = "你是一位经验丰富的个人成长教练。\
请根据用户的性格画像、当前状况、可用时间和目标，用 Markdown 撰写一份个性化成长计划。\
内容要具体、可执行，引用用户自己的描述，并确保所有建议都能在其时间预算内完成。";

    pub const STRUCTURE_EN: &str = "The plan MUST contain exactly these four sections, \
as level-2 headings in this order:";

    pub const STRUCTURE_ZH: &str = "计划必须按以下顺序包含这四个部分，并使用二级标题：";

    pub const CLOSING_EN: &str = "Start with a level-1 title. Respond in English only.";

    pub const CLOSING_ZH: &str = "以一级标题开头。请全部使用简体中文回答。";
}

/// The two messages sent to the completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBundle {
    pub system_instruction: String,
    pub user_prompt: String,
}

/// Build the prompt for a completed questionnaire.
///
/// # Errors
///
/// `DomainError::InvalidState` if the Personality or Objectives step is
/// incomplete; callers must validate before submitting.
pub fn build_prompt(state: &WizardState, language: Language) -> Result<PromptBundle, DomainError> {
    for step in [WizardStep::Personality, WizardStep::Objectives] {
        if !is_step_complete(state, step) {
            return Err(DomainError::invalid_state(format!(
                "cannot build a plan prompt: the {} step is incomplete",
                step.default_label()
            )));
        }
    }

    Ok(PromptBundle {
        system_instruction: system_instruction(language),
        user_prompt: user_prompt(state, language),
    })
}

/// Language-specific system instruction naming the mandatory sections.
pub fn system_instruction(language: Language) -> String {
    let (intro, structure, closing) = match language {
        Language::En => (
            templates::SYSTEM_INTRO_EN,
            templates::STRUCTURE_EN,
            templates::CLOSING_EN,
        ),
        Language::Zh => (
            templates::SYSTEM_INTRO_ZH,
            templates::STRUCTURE_ZH,
            templates::CLOSING_ZH,
        ),
    };

    let horizons = Horizon::all()
        .iter()
        .map(|h| h.label(language))
        .collect::<Vec<_>>()
        .join(" / ");

    let sections = PlanSection::all()
        .iter()
        .map(|section| {
            let detail = section_detail(*section, language, &horizons);
            format!("{} - {}", section.markdown_heading(language), detail)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n\n{}\n{}\n\n{}", intro, structure, sections, closing)
}

fn section_detail(section: PlanSection, language: Language, horizons: &str) -> String {
    match (section, language) {
        (PlanSection::PersonalityAnalysis, Language::En) => {
            "strengths to leverage and weaknesses to manage, grounded in the personality types".into()
        }
        (PlanSection::DevelopmentStrategy, Language::En) => {
            "how to pursue each goal given the current situation".into()
        }
        (PlanSection::ActionChecklist, Language::En) => {
            format!("checkable items grouped by horizon: {}", horizons)
        }
        (PlanSection::ImplementationPlan, Language::En) => {
            "a Markdown table allocating the weekday and weekend time budget to activities".into()
        }
        (PlanSection::PersonalityAnalysis, Language::Zh) => {
            "结合性格类型，说明可发挥的优势和需要管理的劣势".into()
        }
        (PlanSection::DevelopmentStrategy, Language::Zh) => "结合当前状况，说明如何实现每个目标".into(),
        (PlanSection::ActionChecklist, Language::Zh) => {
            format!("按时间范围分组的可勾选事项：{}", horizons)
        }
        (PlanSection::ImplementationPlan, Language::Zh) => {
            "用 Markdown 表格把工作日和周末的时间预算分配到具体活动".into()
        }
    }
}

fn user_prompt(state: &WizardState, language: Language) -> String {
    let profile = profile_lines(&state.profile, language).join("\n");
    let time = time_budget_lines(&state.time, language).join("\n");
    let goals = goal_bullets(&state.goals, language);
    let situation = &state.situation;
    let objectives = &state.objectives;

    match language {
        Language::En => format!(
            "Please create my personal growth plan.\n\n\
### Personality\n{profile}\n\n\
### Current situation\n{situation}\n\n\
### Available time\n{time}\n\n\
### Improvement goals\n{goals}\n\n\
### Life objectives\n{objectives}"
        ),
        Language::Zh => format!(
            "请为我制定个人成长计划。\n\n\
### 性格\n{profile}\n\n\
### 当前状况\n{situation}\n\n\
### 可用时间\n{time}\n\n\
### 提升目标\n{goals}\n\n\
### 人生目标\n{objectives}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use growthwise_domain::{reduce, EnneagramType, MbtiType, WizardCommand};

    fn apply(commands: Vec<WizardCommand>) -> WizardState {
        commands
            .into_iter()
            .fold(WizardState::default(), |state, cmd| reduce(&state, cmd).unwrap())
    }

    fn completed() -> WizardState {
        apply(vec![
            WizardCommand::SetEnneagramCore(Some(EnneagramType::Type3)),
            WizardCommand::SetEnneagramWing(Some(EnneagramType::Type4)),
            WizardCommand::SetSituation("Product manager, two kids".into()),
            WizardCommand::SetGoal {
                slot: 0,
                value: "Manage stress more effectively".into(),
            },
            WizardCommand::SetGoal {
                slot: 2,
                value: "Learn a new skill".into(),
            },
            WizardCommand::SetObjectives("Start a small design studio".into()),
        ])
    }

    #[test]
    fn test_enneagram_rendered_as_core_w_wing() {
        let bundle = build_prompt(&completed(), Language::En).unwrap();
        assert!(bundle.user_prompt.contains("3w4 (The Achiever)"));
        assert!(!bundle.user_prompt.contains("MBTI"));
    }

    #[test]
    fn test_user_prompt_embeds_answers_verbatim() {
        let bundle = build_prompt(&completed(), Language::En).unwrap();
        assert!(bundle.user_prompt.contains("Product manager, two kids"));
        assert!(bundle.user_prompt.contains("Start a small design studio"));
        assert!(bundle
            .user_prompt
            .contains("- Manage stress more effectively\n- Learn a new skill"));
        assert!(bundle.user_prompt.contains("18 hours"));
    }

    #[test]
    fn test_free_text_keeps_surrounding_whitespace() {
        let mut state = completed();
        state = reduce(
            &state,
            WizardCommand::SetSituation("  Nurse on night shifts\n\n  - two cats\n".into()),
        )
        .unwrap();
        state = reduce(&state, WizardCommand::SetObjectives("\tRun a marathon  ".into())).unwrap();

        let bundle = build_prompt(&state, Language::En).unwrap();
        assert!(bundle
            .user_prompt
            .contains("### Current situation\n  Nurse on night shifts\n\n  - two cats\n\n"));
        assert!(bundle.user_prompt.ends_with("### Life objectives\n\tRun a marathon  "));
    }

    #[test]
    fn test_system_instruction_lists_sections_and_horizons() {
        for language in Language::all() {
            let instruction = system_instruction(*language);
            for section in PlanSection::all() {
                assert!(instruction.contains(&section.markdown_heading(*language)));
            }
            for horizon in Horizon::all() {
                assert!(instruction.contains(&horizon.label(*language)));
            }
        }
    }

    #[test]
    fn test_chinese_prompt() {
        let bundle = build_prompt(&completed(), Language::Zh).unwrap();
        assert!(bundle.system_instruction.contains("简体中文"));
        assert!(bundle.user_prompt.contains("3w4 (成就者)"));
    }

    #[test]
    fn test_core_without_wing_is_invalid_state() {
        let state = apply(vec![
            WizardCommand::SetEnneagramCore(Some(EnneagramType::Type3)),
            WizardCommand::SetObjectives("x".into()),
        ]);
        let err = build_prompt(&state, Language::En).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn test_missing_objectives_is_invalid_state() {
        let state = apply(vec![WizardCommand::SetMbti(Some(MbtiType::Istj))]);
        assert!(matches!(
            build_prompt(&state, Language::En),
            Err(DomainError::InvalidState(_))
        ));
    }
}
