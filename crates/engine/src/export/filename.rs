//! Export file naming

use growthwise_domain::PersonalityProfile;

const FILE_STEM: &str = "personal-growth-plan";

/// Formats the plan can be exported as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Markdown,
    MindMapSvg,
    MindMapHtml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::MindMapSvg => "svg",
            ExportFormat::MindMapHtml => "html",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::MindMapSvg => "image/svg+xml",
            ExportFormat::MindMapHtml => "text/html",
        }
    }
}

/// `personal-growth-plan-{mbti}.{ext}` with the MBTI code lowercased, or
/// `personal-growth-plan.{ext}` when no MBTI type was given.
pub fn export_filename(profile: &PersonalityProfile, format: ExportFormat) -> String {
    match profile.mbti {
        Some(mbti) => format!(
            "{}-{}.{}",
            FILE_STEM,
            mbti.code().to_ascii_lowercase(),
            format.extension()
        ),
        None => format!("{}.{}", FILE_STEM, format.extension()),
    }
}

/// Markdown document filename
pub fn plan_filename(profile: &PersonalityProfile) -> String {
    export_filename(profile, ExportFormat::Markdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use growthwise_domain::{EnneagramType, MbtiType};

    #[test]
    fn test_filename_with_mbti() {
        let profile = PersonalityProfile::new(Some(MbtiType::Enfp));
        assert_eq!(plan_filename(&profile), "personal-growth-plan-enfp.md");
        assert_eq!(
            export_filename(&profile, ExportFormat::MindMapSvg),
            "personal-growth-plan-enfp.svg"
        );
    }

    #[test]
    fn test_filename_without_mbti_ignores_enneagram() {
        let profile = PersonalityProfile {
            mbti: None,
            enneagram_core: Some(EnneagramType::Type5),
            enneagram_wing: Some(EnneagramType::Type6),
        };
        assert_eq!(plan_filename(&profile), "personal-growth-plan.md");
        assert_eq!(
            export_filename(&profile, ExportFormat::MindMapHtml),
            "personal-growth-plan.html"
        );
    }
}
