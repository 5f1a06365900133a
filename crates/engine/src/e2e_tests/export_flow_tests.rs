//! Generated plan to export artifacts.

use growthwise_domain::Language;

use crate::export::{export_filename, plan_filename, render_html, render_svg, ExportFormat, PlanOutline};
use crate::plan::{synthesize_local_plan, PlanSection};
use crate::test_fixtures::enfp_questionnaire;

#[test]
fn test_fallback_plan_outline_has_all_sections() {
    let state = enfp_questionnaire();
    let markdown = synthesize_local_plan(&state, Language::En);
    let outline = PlanOutline::parse(&markdown);

    assert_eq!(outline.root.label, "Your Personalized Growth Plan");
    let labels: Vec<&str> = outline.root.children.iter().map(|c| c.label.as_str()).collect();
    for section in PlanSection::all() {
        let heading = format!("{}. {}", section.number(), section.heading(Language::En));
        assert!(labels.contains(&heading.as_str()), "missing {heading}");
    }
}

#[test]
fn test_export_artifacts_for_enfp() {
    let state = enfp_questionnaire();
    let markdown = synthesize_local_plan(&state, Language::En);
    let outline = PlanOutline::parse(&markdown);

    assert_eq!(plan_filename(&state.profile), "personal-growth-plan-enfp.md");
    assert_eq!(
        export_filename(&state.profile, ExportFormat::MindMapSvg),
        "personal-growth-plan-enfp.svg"
    );

    let svg = render_svg(&outline);
    assert!(svg.contains("Action Checklist"));

    let html = render_html(&outline, &markdown);
    assert!(html.contains("3-Month Goals"));
    assert!(html.contains("<noscript>"));
}
