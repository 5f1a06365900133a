//! Markdown to HTML for the plan document view
//!
//! Raw HTML in model output is turned into text before rendering, so it
//! shows escaped instead of becoming tags. Links keep their target only
//! for http(s) and mailto; images collapse to their alt text.

use growthwise_engine::export::markdown_options;
use growthwise_engine::GeneratedPlan;
use pulldown_cmark::{html, CowStr, Event, Parser, Tag, TagEnd};

const SAFE_SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];

/// Render plan Markdown as an HTML fragment.
pub fn render_markdown(markdown: &str) -> String {
    // Whether each open link kept its tag, so the matching end is dropped too.
    let mut links: Vec<bool> = Vec::new();

    let events = Parser::new_ext(markdown, markdown_options()).filter_map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
        Event::TaskListMarker(done) => Some(Event::InlineHtml(CowStr::Borrowed(if done {
            "<span class=\"checkbox\">☑</span> "
        } else {
            "<span class=\"checkbox\">☐</span> "
        }))),
        Event::Start(Tag::Link { ref dest_url, .. }) => {
            let safe = is_safe_url(dest_url);
            links.push(safe);
            safe.then_some(event)
        }
        Event::End(TagEnd::Link) => links.pop().unwrap_or(false).then_some(event),
        Event::Start(Tag::Image { .. }) | Event::End(TagEnd::Image) => None,
        other => Some(other),
    });

    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, events);
    out
}

/// Document body for a plan. Remote and fallback plans render the same way.
pub fn render_plan(plan: &GeneratedPlan) -> String {
    render_markdown(&plan.content)
}

fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    SAFE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}
