//! Rendering of questionnaire answers, shared by the prompt and the fallback plan

use growthwise_domain::{GoalSet, Language, PersonalityProfile, TimeAvailability};

/// Characters of the objectives quoted in the fallback plan
pub const OBJECTIVES_EXCERPT_CHARS: usize = 150;

/// `3w4 (The Achiever)` when both core and wing are set.
pub fn enneagram_summary(profile: &PersonalityProfile, language: Language) -> Option<String> {
    let code = profile.enneagram_code()?;
    let core = profile.enneagram_core?;
    Some(format!("{} ({})", code, core.archetype(language)))
}

/// Bulleted personality lines; types the user did not give are omitted.
pub fn profile_lines(profile: &PersonalityProfile, language: Language) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(mbti) = profile.mbti {
        lines.push(match language {
            Language::En => format!("- **MBTI Type:** {}", mbti),
            Language::Zh => format!("- **MBTI 类型:** {}", mbti),
        });
    }
    if let Some(enneagram) = enneagram_summary(profile, language) {
        lines.push(match language {
            Language::En => format!("- **Enneagram Type:** {}", enneagram),
            Language::Zh => format!("- **九型人格:** {}", enneagram),
        });
    }
    lines
}

pub fn time_budget_lines(time: &TimeAvailability, language: Language) -> Vec<String> {
    let preferred = time.preferred_time.label(language);
    match language {
        Language::En => vec![
            format!("- **Weekdays:** {} hours per day", time.weekday),
            format!("- **Weekends:** {} hours per day", time.weekend),
            format!("- **Weekly total:** {} hours", time.weekly_hours()),
            format!("- **Preferred time of day:** {}", preferred),
        ],
        Language::Zh => vec![
            format!("- **工作日:** 每天 {} 小时", time.weekday),
            format!("- **周末:** 每天 {} 小时", time.weekend),
            format!("- **每周总计:** {} 小时", time.weekly_hours()),
            format!("- **偏好时段:** {}", preferred),
        ],
    }
}

/// Non-empty goals as a Markdown list, in slot order.
pub fn goal_bullets(goals: &GoalSet, language: Language) -> String {
    let bullets: Vec<String> = goals
        .non_empty()
        .map(|goal| format!("- {}", goal))
        .collect();
    if bullets.is_empty() {
        return match language {
            Language::En => "- (none specified)".to_string(),
            Language::Zh => "- (未指定)".to_string(),
        };
    }
    bullets.join("\n")
}

/// First 150 characters of the objectives followed by `...`.
///
/// Counts characters, not bytes, so CJK text is never split mid-codepoint.
pub fn objectives_excerpt(objectives: &str) -> String {
    let excerpt: String = objectives
        .trim()
        .chars()
        .take(OBJECTIVES_EXCERPT_CHARS)
        .collect();
    format!("{}...", excerpt)
}
