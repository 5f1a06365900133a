//! Turns a generated plan into a downloadable file

use growthwise_domain::PersonalityProfile;
use growthwise_engine::export::{export_filename, render_html, render_svg, ExportFormat, PlanOutline};

use crate::ports::outbound::ExportFile;

/// Build the file for `format` from the plan's Markdown.
pub fn build_export(
    content: &str,
    profile: &PersonalityProfile,
    format: ExportFormat,
) -> ExportFile {
    let contents = match format {
        ExportFormat::Markdown => content.to_string(),
        ExportFormat::MindMapSvg => render_svg(&PlanOutline::parse(content)),
        ExportFormat::MindMapHtml => render_html(&PlanOutline::parse(content), content),
    };

    ExportFile {
        filename: export_filename(profile, format),
        mime_type: format.mime_type(),
        contents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use growthwise_domain::MbtiType;

    const PLAN: &str = "# Your Personalized Growth Plan\n## 1. Analysis\n- Calm under pressure\n";

    #[test]
    fn test_markdown_export_is_verbatim() {
        let profile = PersonalityProfile::new(Some(MbtiType::Intj));
        let file = build_export(PLAN, &profile, ExportFormat::Markdown);
        assert_eq!(file.filename, "personal-growth-plan-intj.md");
        assert_eq!(file.mime_type, "text/markdown");
        assert_eq!(file.contents, PLAN);
    }

    #[test]
    fn test_mind_map_exports_share_the_stem() {
        let profile = PersonalityProfile::default();
        let svg = build_export(PLAN, &profile, ExportFormat::MindMapSvg);
        let html = build_export(PLAN, &profile, ExportFormat::MindMapHtml);

        assert_eq!(svg.filename, "personal-growth-plan.svg");
        assert!(svg.contents.contains("Calm under pressure"));
        assert_eq!(html.filename, "personal-growth-plan.html");
        assert_eq!(html.mime_type, "text/html");
        assert!(html.contents.contains("<!DOCTYPE html>"));
        assert!(html.contents.contains("- Calm under pressure"));
    }
}
