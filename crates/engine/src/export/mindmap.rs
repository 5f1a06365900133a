//! Mind-map rendering: static SVG and a self-contained interactive HTML page

use super::outline::{OutlineNode, PlanOutline};

const MARGIN: f32 = 24.0;
const ROW_HEIGHT: f32 = 28.0;
const COLUMN_WIDTH: f32 = 220.0;
const FONT_SIZE: f32 = 13.0;
/// Labels longer than this are cut and end with an ellipsis
const MAX_LABEL_CHARS: usize = 36;
/// Rough glyph width used to size the canvas for the last column
const CHAR_WIDTH: f32 = 7.5;

const BRANCH_COLORS: [&str; 6] = [
    "#6366f1", "#0ea5e9", "#10b981", "#f59e0b", "#ef4444", "#a855f7",
];

const ROOT_COLOR: &str = "#334155";

/// Markmap autoloader, which renders `.markmap` templates on page load
const MARKMAP_AUTOLOADER_URL: &str = "https://cdn.jsdelivr.net/npm/markmap-autoloader@0.18";

struct Placed<'a> {
    node: &'a OutlineNode,
    x: f32,
    y: f32,
    branch: Option<usize>,
}

struct Edge {
    from: (f32, f32),
    to: (f32, f32),
    branch: usize,
}

/// Lay out leaves top to bottom, one per row; a parent sits at the
/// vertical midpoint of its first and last child.
fn layout<'a>(
    node: &'a OutlineNode,
    depth: usize,
    branch: Option<usize>,
    next_row: &mut usize,
    placed: &mut Vec<Placed<'a>>,
    edges: &mut Vec<Edge>,
) -> (f32, f32) {
    let x = MARGIN + depth as f32 * COLUMN_WIDTH;

    let y = if node.children.is_empty() {
        let y = MARGIN + *next_row as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0;
        *next_row += 1;
        y
    } else {
        let mut child_points = Vec::with_capacity(node.children.len());
        for (i, child) in node.children.iter().enumerate() {
            let child_branch = branch.or(Some(i));
            child_points.push(layout(
                child,
                depth + 1,
                child_branch,
                next_row,
                placed,
                edges,
            ));
        }
        let first = child_points.first().map(|p| p.1).unwrap_or(MARGIN);
        let last = child_points.last().map(|p| p.1).unwrap_or(MARGIN);
        let y = (first + last) / 2.0;
        for (i, point) in child_points.into_iter().enumerate() {
            edges.push(Edge {
                from: (x, y),
                to: point,
                branch: branch.unwrap_or(i),
            });
        }
        y
    };

    placed.push(Placed { node, x, y, branch });
    (x, y)
}

/// Render the outline as a standalone SVG document.
///
/// Output is deterministic: the same outline always yields the same bytes.
pub fn render_svg(outline: &PlanOutline) -> String {
    let mut placed = Vec::new();
    let mut edges = Vec::new();
    let mut next_row = 0;
    layout(&outline.root, 0, None, &mut next_row, &mut placed, &mut edges);

    let rows = next_row.max(1);
    let deepest = outline.root.depth();
    let width = MARGIN * 2.0
        + (deepest.saturating_sub(1)) as f32 * COLUMN_WIDTH
        + MAX_LABEL_CHARS as f32 * CHAR_WIDTH;
    let height = MARGIN * 2.0 + rows as f32 * ROW_HEIGHT;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.0} {h:.0}\" font-family=\"system-ui, sans-serif\" font-size=\"{fs}\">\n",
        w = width,
        h = height,
        fs = FONT_SIZE
    ));
    svg.push_str(&format!(
        "  <title>{}</title>\n  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n",
        xml_escape(&outline.root.label)
    ));

    svg.push_str("  <g fill=\"none\" stroke-width=\"1.5\">\n");
    for edge in &edges {
        let (x1, y1) = edge.from;
        let (x2, y2) = edge.to;
        let mid = (x1 + x2) / 2.0;
        svg.push_str(&format!(
            "    <path d=\"M{x1:.1},{y1:.1} C{mid:.1},{y1:.1} {mid:.1},{y2:.1} {x2:.1},{y2:.1}\" stroke=\"{color}\"/>\n",
            color = branch_color(Some(edge.branch)),
        ));
    }
    svg.push_str("  </g>\n");

    // Parents are pushed after their children; draw in document order
    placed.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    });

    svg.push_str("  <g>\n");
    for p in &placed {
        let color = branch_color(p.branch);
        let is_root = p.branch.is_none();
        svg.push_str(&format!(
            "    <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{}\" fill=\"{}\"/>\n",
            p.x,
            p.y,
            if is_root { 5 } else { 3 },
            color
        ));
        svg.push_str(&format!(
            "    <text x=\"{:.1}\" y=\"{:.1}\" dy=\"-6\" fill=\"{}\"{}>{}</text>\n",
            p.x + 6.0,
            p.y,
            if is_root { ROOT_COLOR } else { "#1f2937" },
            if is_root { " font-weight=\"bold\"" } else { "" },
            xml_escape(&truncate_label(&p.node.label))
        ));
    }
    svg.push_str("  </g>\n</svg>\n");
    svg
}

/// Render a self-contained HTML page: Markmap draws the interactive map
/// from the embedded Markdown, and a nested list is shown when scripts
/// are disabled.
pub fn render_html(outline: &PlanOutline, markdown: &str) -> String {
    let title = xml_escape(&outline.root.label);
    let mut fallback = String::new();
    render_list(&outline.root, &mut fallback, 2);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
    html, body {{ margin: 0; height: 100%; font-family: system-ui, sans-serif; }}
    .markmap {{ width: 100%; height: 100vh; }}
    .markmap > svg {{ width: 100%; height: 100%; }}
    noscript ul {{ line-height: 1.6; }}
  </style>
</head>
<body>
  <div class="markmap">
    <script type="text/template">
{template}
    </script>
  </div>
  <noscript>
{fallback}  </noscript>
  <script src="{autoloader}"></script>
</body>
</html>
"#,
        title = title,
        template = escape_script_body(markdown),
        fallback = fallback,
        autoloader = MARKMAP_AUTOLOADER_URL,
    )
}

fn render_list(node: &OutlineNode, out: &mut String, indent: usize) {
    let pad = " ".repeat(indent);
    out.push_str(&format!("{pad}<ul>\n{pad}  <li>{}", xml_escape(&node.label)));
    if node.children.is_empty() {
        out.push_str("</li>\n");
    } else {
        out.push('\n');
        for child in &node.children {
            render_list(child, out, indent + 4);
        }
        out.push_str(&format!("{pad}  </li>\n"));
    }
    out.push_str(&format!("{pad}</ul>\n"));
}

fn branch_color(branch: Option<usize>) -> &'static str {
    match branch {
        Some(i) => BRANCH_COLORS[i % BRANCH_COLORS.len()],
        None => ROOT_COLOR,
    }
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        return label.to_string();
    }
    let cut: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
    format!("{}…", cut.trim_end())
}

/// Escape text for XML/HTML content and attribute values.
pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A literal `</script` would end the template early.
fn escape_script_body(markdown: &str) -> String {
    markdown
        .replace("</script", "<\\/script")
        .replace("</SCRIPT", "<\\/SCRIPT")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = "# Plan <A&B>\n## Strategy\n- Walk\n- Read\n## Checklist\n### 3-Month Goals\n- [ ] Habit\n";

    #[test]
    fn test_svg_is_deterministic_and_escaped() {
        let outline = PlanOutline::parse(PLAN);
        let svg = render_svg(&outline);
        assert_eq!(svg, render_svg(&outline));
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("Plan &lt;A&amp;B&gt;"));
        assert!(!svg.contains("<A&B>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_svg_has_one_text_per_node_and_one_edge_per_child() {
        let outline = PlanOutline::parse(PLAN);
        let svg = render_svg(&outline);
        let nodes = outline.root.size();
        assert_eq!(svg.matches("<text ").count(), nodes);
        assert_eq!(svg.matches("<path ").count(), nodes - 1);
    }

    #[test]
    fn test_long_labels_truncated() {
        let label = "x".repeat(80);
        let outline = PlanOutline::parse(&format!("## {}\n", label));
        let svg = render_svg(&outline);
        assert!(svg.contains(&format!("{}…", "x".repeat(MAX_LABEL_CHARS - 1))));
        assert!(!svg.contains(&label));
    }

    #[test]
    fn test_html_embeds_markdown_and_noscript_list() {
        let outline = PlanOutline::parse(PLAN);
        let html = render_html(&outline, PLAN);
        assert!(html.contains("<script type=\"text/template\">"));
        assert!(html.contains("- [ ] Habit"));
        assert!(html.contains(MARKMAP_AUTOLOADER_URL));
        assert!(html.contains("<noscript>"));
        assert!(html.contains("<li>Strategy"));
        assert!(html.contains("<title>Plan &lt;A&amp;B&gt;</title>"));
    }

    #[test]
    fn test_html_neutralizes_script_close() {
        let md = "# T\n- </script><script>alert(1)</script>\n";
        let html = render_html(&PlanOutline::parse(md), md);
        assert!(!html.contains("- </script>"));
        assert!(html.contains("<\\/script>"));
    }
}
