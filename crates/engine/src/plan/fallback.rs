//! Local plan synthesizer used when the completion endpoint is unavailable
//!
//! Output depends only on the questionnaire answers and the language, so the
//! same answers always produce byte-identical Markdown.

use growthwise_domain::{
    EnneagramType, HourBudget, Language, MbtiType, PersonalityProfile, TimeAvailability,
    WizardState,
};

use super::fields::{goal_bullets, objectives_excerpt, profile_lines, time_budget_lines};
use super::sections::{Horizon, PlanSection};

/// Share of each day's budget per activity, in percent. The last activity
/// absorbs rounding so each row sums to the full budget.
const ACTIVITY_WEIGHTS: [u32; 4] = [15, 35, 35, 15];

/// Render a complete Markdown plan without calling the network.
///
/// Never fails: missing answers are rendered with neutral wording.
pub fn synthesize_local_plan(state: &WizardState, language: Language) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push(match language {
        Language::En => "# Your Personalized Growth Plan".to_string(),
        Language::Zh => "# 你的个性化成长计划".to_string(),
    });
    out.push(String::new());

    // Profile summary
    out.push(match language {
        Language::En => "## Personal Profile Summary".to_string(),
        Language::Zh => "## 个人画像摘要".to_string(),
    });
    out.push(String::new());
    out.extend(profile_lines(&state.profile, language));
    out.extend(time_budget_lines(&state.time, language));
    out.push(String::new());

    // 1. Strengths and weaknesses
    out.push(PlanSection::PersonalityAnalysis.markdown_heading(language));
    out.push(String::new());
    out.extend(personality_insights(&state.profile, language));
    out.push(String::new());

    // 2. Strategy
    out.push(PlanSection::DevelopmentStrategy.markdown_heading(language));
    out.push(String::new());
    out.push(match language {
        Language::En => "Based on your profile, this plan focuses on:".to_string(),
        Language::Zh => "根据你的画像，本计划重点关注：".to_string(),
    });
    out.push(goal_bullets(&state.goals, language));
    out.push(String::new());
    out.push(time_framing(&state.time, language).to_string());
    out.push(String::new());

    // 3. Checklist
    out.push(PlanSection::ActionChecklist.markdown_heading(language));
    out.push(String::new());
    let primary = primary_goal(state, language);
    for horizon in Horizon::all() {
        out.push(format!("### {}", horizon.label(language)));
        out.extend(
            checklist_items(*horizon, &primary, language)
                .into_iter()
                .map(|item| format!("- [ ] {}", item)),
        );
        out.push(String::new());
    }

    // 4. Implementation
    out.push(PlanSection::ImplementationPlan.markdown_heading(language));
    out.push(String::new());
    out.extend(schedule_table(&state.time, language));
    out.push(String::new());
    out.push(match language {
        Language::En => format!(
            "Schedule your sessions in the {} when possible.",
            state.time.preferred_time.as_str()
        ),
        Language::Zh => format!(
            "尽量把练习安排在{}。",
            state.time.preferred_time.label(language)
        ),
    });
    out.push(String::new());

    // Alignment with objectives
    out.push(match language {
        Language::En => "## Alignment with Your Life Objectives".to_string(),
        Language::Zh => "## 与人生目标的契合".to_string(),
    });
    out.push(String::new());
    out.push(match language {
        Language::En => "Your shared life objectives focus on:".to_string(),
        Language::Zh => "你分享的人生目标是：".to_string(),
    });
    out.push(format!("> {}", objectives_excerpt(&state.objectives)));
    out.push(String::new());
    out.push(match language {
        Language::En => "Growth is not linear. Focus on consistency rather than perfection, \
and adjust this plan as you discover what works best for you."
            .to_string(),
        Language::Zh => "成长不是线性的。重在坚持而非完美，在实践中不断调整这份计划。".to_string(),
    });

    let mut plan = out.join("\n");
    plan.push('\n');
    plan
}

fn personality_insights(profile: &PersonalityProfile, language: Language) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(mbti) = profile.mbti {
        lines.push(format!("- {}", energy_insight(mbti, language)));
        lines.push(format!("- {}", decision_insight(mbti, language)));
    }
    if let (Some(core), Some(_)) = (profile.enneagram_core, profile.enneagram_wing) {
        lines.push(format!("- {}", enneagram_insight(core, language)));
    }
    if lines.is_empty() {
        lines.push(match language {
            Language::En => "- Reflect on when you feel most energized and build on it.".to_string(),
            Language::Zh => "- 留意自己何时最有活力，并以此为基础。".to_string(),
        });
    }
    lines
}

fn energy_insight(mbti: MbtiType, language: Language) -> &'static str {
    match (mbti.is_introvert(), language) {
        (true, Language::En) => {
            "As an introvert, you'll benefit from focused solo learning and reflection time."
        }
        (false, Language::En) => {
            "As an extrovert, you'll benefit from collaborative learning and social activities."
        }
        (true, Language::Zh) => "作为内向者，专注的独立学习和反思时间会让你受益。",
        (false, Language::Zh) => "作为外向者，协作学习和社交活动会让你受益。",
    }
}

fn decision_insight(mbti: MbtiType, language: Language) -> &'static str {
    match (mbti.is_thinking(), language) {
        (true, Language::En) => {
            "Your thinking preference suggests a structured approach to problem-solving; \
watch that it does not crowd out how others feel."
        }
        (false, Language::En) => {
            "Your feeling preference suggests a values-based approach to decision making; \
back it with measurable checkpoints."
        }
        (true, Language::Zh) => "你的思考偏好意味着结构化地解决问题，同时要留意他人的感受。",
        (false, Language::Zh) => "你的情感偏好意味着以价值观为导向做决定，可配合可衡量的检查点。",
    }
}

fn enneagram_insight(core: EnneagramType, language: Language) -> &'static str {
    match language {
        Language::En => match core {
            EnneagramType::Type1 => "As a Type 1, channel your perfectionist tendencies into meaningful improvement by focusing on progress rather than perfection.",
            EnneagramType::Type2 => "As a Type 2, balance your helpfulness to others with self-care and personal development.",
            EnneagramType::Type3 => "As a Type 3, define success on your own terms so that achievement serves your growth rather than your image.",
            EnneagramType::Type4 => "As a Type 4, turn your depth of feeling into creative routines that keep you moving on low-inspiration days.",
            EnneagramType::Type5 => "As a Type 5, pair your research with small practical experiments so knowledge becomes skill.",
            EnneagramType::Type6 => "As a Type 6, build confidence through reliable routines and trusted accountability partners.",
            EnneagramType::Type7 => "As a Type 7, commit to a few goals at a time and finish them before starting new ones.",
            EnneagramType::Type8 => "As a Type 8, use your drive to protect time for rest and for listening to others.",
            EnneagramType::Type9 => "As a Type 9, name your own priorities first and schedule them before others fill your time.",
        },
        Language::Zh => match core {
            EnneagramType::Type1 => "作为1号，把追求完美的倾向转化为有意义的改进，关注进步而非完美。",
            EnneagramType::Type2 => "作为2号，在帮助他人的同时，也要照顾自己、投入个人成长。",
            EnneagramType::Type3 => "作为3号，用自己的标准定义成功，让成就服务于成长而非形象。",
            EnneagramType::Type4 => "作为4号，把丰富的情感转化为创造性的习惯，在缺乏灵感时也能前进。",
            EnneagramType::Type5 => "作为5号，把研究与小规模的实践结合起来，让知识变成技能。",
            EnneagramType::Type6 => "作为6号，通过稳定的习惯和可信赖的伙伴来建立信心。",
            EnneagramType::Type7 => "作为7号，一次专注少数几个目标，完成后再开始新的。",
            EnneagramType::Type8 => "作为8号，用你的行动力为休息和倾听他人留出时间。",
            EnneagramType::Type9 => "作为9号，先明确自己的优先事项，在时间被他人占满之前安排好它们。",
        },
    }
}

fn time_framing(time: &TimeAvailability, language: Language) -> &'static str {
    let generous = time.weekday.hours() >= 3.0;
    match (generous, language) {
        (true, Language::En) => "You have a good amount of daily time for development.",
        (false, Language::En) => {
            "With limited weekday time, focus on high-impact, short activities."
        }
        (true, Language::Zh) => "你每天有充足的时间用于成长。",
        (false, Language::Zh) => "工作日时间有限，请专注于短小而高效的活动。",
    }
}

fn primary_goal(state: &WizardState, language: Language) -> String {
    state
        .goals
        .non_empty()
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| match language {
            Language::En => "personal development".to_string(),
            Language::Zh => "个人成长".to_string(),
        })
}

fn checklist_items(horizon: Horizon, primary: &str, language: Language) -> Vec<String> {
    match (horizon, language) {
        (Horizon::ThreeMonths, Language::En) => vec![
            "Establish core daily habits".to_string(),
            format!("Set baseline measurements for: {}", primary),
            "Hold a weekly review every Sunday".to_string(),
        ],
        (Horizon::SixMonths, Language::En) => vec![
            format!("Show measurable progress on: {}", primary),
            "Begin a project that combines several goals".to_string(),
            "Adjust the weekly schedule based on what worked".to_string(),
        ],
        (Horizon::TwelveMonths, Language::En) => vec![
            "Review the whole year against your life objectives".to_string(),
            "Choose the next growth edge".to_string(),
            "Celebrate wins and share what you learned".to_string(),
        ],
        (Horizon::ThreeMonths, Language::Zh) => vec![
            "建立核心的日常习惯".to_string(),
            format!("为以下目标设定基线：{}", primary),
            "每周日进行一次周回顾".to_string(),
        ],
        (Horizon::SixMonths, Language::Zh) => vec![
            format!("在以下目标上取得可衡量的进展：{}", primary),
            "开始一个结合多个目标的项目".to_string(),
            "根据效果调整每周安排".to_string(),
        ],
        (Horizon::TwelveMonths, Language::Zh) => vec![
            "对照人生目标回顾全年".to_string(),
            "选择下一个成长方向".to_string(),
            "庆祝成果并分享收获".to_string(),
        ],
    }
}

/// Minutes per activity for one day, rounded to 5 minutes.
fn split_minutes(budget: HourBudget) -> [u32; 4] {
    let total = budget.minutes();
    let mut split = [0u32; 4];
    let mut assigned = 0;
    for (i, weight) in ACTIVITY_WEIGHTS.iter().enumerate().take(3) {
        let minutes = (total * weight / 100 + 2) / 5 * 5;
        split[i] = minutes;
        assigned += minutes;
    }
    split[3] = total.saturating_sub(assigned);
    split
}

fn schedule_table(time: &TimeAvailability, language: Language) -> Vec<String> {
    let (header, rule, weekday, weekend, total) = match language {
        Language::En => (
            "| Day | Reflection | Skill practice | Primary goal | Reading & review |",
            "|-----|-----------|----------------|--------------|------------------|",
            "Weekday",
            "Weekend",
            "Weekly total",
        ),
        Language::Zh => (
            "| 日期 | 反思 | 技能练习 | 主要目标 | 阅读与回顾 |",
            "|------|------|----------|----------|------------|",
            "工作日",
            "周末",
            "每周总计",
        ),
    };

    let row = |label: &str, budget: HourBudget| {
        let cells = split_minutes(budget)
            .iter()
            .map(|m| format!("{} min", m))
            .collect::<Vec<_>>()
            .join(" | ");
        format!("| {} ({}h) | {} |", label, budget, cells)
    };

    vec![
        header.to_string(),
        rule.to_string(),
        row(weekday, time.weekday),
        row(weekend, time.weekend),
        format!("| {} | {}h | | | |", total, time.weekly_hours()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use growthwise_domain::{reduce, DayKind, WizardCommand};

    fn apply(commands: Vec<WizardCommand>) -> WizardState {
        commands
            .into_iter()
            .fold(WizardState::default(), |state, cmd| reduce(&state, cmd).unwrap())
    }

    #[test]
    fn test_deterministic() {
        let state = apply(vec![
            WizardCommand::SetMbti(Some(MbtiType::Intj)),
            WizardCommand::SetObjectives("Write a novel".into()),
        ]);
        assert_eq!(
            synthesize_local_plan(&state, Language::En),
            synthesize_local_plan(&state, Language::En)
        );
    }

    #[test]
    fn test_intj_plan_quotes_profile_and_excerpt() {
        let objectives = "Build a research lab that studies how small daily habits compound \
into long-term expertise, publish the findings openly, and mentor junior scientists along the way."
            .to_string();
        assert!(objectives.chars().count() > 150);
        let state = apply(vec![
            WizardCommand::SetMbti(Some(MbtiType::Intj)),
            WizardCommand::SetWeekdayHours(2.0),
            WizardCommand::SetWeekendHours(4.0),
            WizardCommand::SetGoal {
                slot: 0,
                value: "Improve productivity".into(),
            },
            WizardCommand::SetObjectives(objectives.clone()),
        ]);

        let plan = synthesize_local_plan(&state, Language::En);
        assert!(plan.contains("INTJ"));
        assert!(plan.contains("- Improve productivity"));
        assert!(plan.contains("| Weekday (2h) |"));
        assert!(plan.contains("| Weekend (4h) |"));

        let excerpt: String = objectives.chars().take(150).collect();
        assert!(plan.contains(&format!("> {}...", excerpt)));
        assert!(!plan.contains(&objectives));
    }

    #[test]
    fn test_contains_all_sections_in_order() {
        let state = apply(vec![WizardCommand::SetMbti(Some(MbtiType::Esfp))]);
        for language in Language::all() {
            let plan = synthesize_local_plan(&state, *language);
            let positions: Vec<usize> = PlanSection::all()
                .iter()
                .map(|s| plan.find(&s.markdown_heading(*language)).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_introvert_thinking_rules() {
        let state = apply(vec![WizardCommand::SetMbti(Some(MbtiType::Intj))]);
        let plan = synthesize_local_plan(&state, Language::En);
        assert!(plan.contains("As an introvert"));
        assert!(plan.contains("thinking preference"));

        let state = apply(vec![WizardCommand::SetMbti(Some(MbtiType::Enfp))]);
        let plan = synthesize_local_plan(&state, Language::En);
        assert!(plan.contains("As an extrovert"));
        assert!(plan.contains("feeling preference"));
    }

    #[test]
    fn test_enneagram_blurb_needs_wing() {
        let state = apply(vec![
            WizardCommand::SetEnneagramCore(Some(EnneagramType::Type2)),
            WizardCommand::SetEnneagramWing(Some(EnneagramType::Type1)),
        ]);
        let plan = synthesize_local_plan(&state, Language::En);
        assert!(plan.contains("2w1 (The Helper)"));
        assert!(plan.contains("As a Type 2"));
    }

    #[test]
    fn test_objectives_truncated_to_150_chars() {
        let objectives = "a".repeat(400);
        let state = apply(vec![WizardCommand::SetObjectives(objectives)]);
        let plan = synthesize_local_plan(&state, Language::En);
        let expected = format!("> {}...", "a".repeat(150));
        assert!(plan.contains(&expected));
        assert!(!plan.contains(&"a".repeat(151)));
    }

    #[test]
    fn test_split_minutes_sums_to_budget() {
        for hours in [0.5, 1.0, 2.5, 5.0] {
            let budget = HourBudget::from_hours(DayKind::Weekday, hours).unwrap();
            let split = split_minutes(budget);
            assert_eq!(split.iter().sum::<u32>(), budget.minutes());
            assert!(split.iter().all(|m| m % 5 == 0 || *m == split[3]));
        }
    }

    #[test]
    fn test_schedule_table_reflects_budget() {
        let state = apply(vec![
            WizardCommand::SetWeekdayHours(1.0),
            WizardCommand::SetWeekendHours(8.0),
        ]);
        let plan = synthesize_local_plan(&state, Language::En);
        assert!(plan.contains("| Weekday (1h) | 10 min | 20 min | 20 min | 10 min |"));
        assert!(plan.contains("| Weekly total | 21h | | | |"));
        assert!(plan.contains("With limited weekday time"));
    }
}
