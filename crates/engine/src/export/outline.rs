//! Markdown plan to outline tree, the input of the mind-map renderers

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Root label when the plan has no `#` title
pub const DEFAULT_ROOT_LABEL: &str = "Growth Plan";

/// Deepest heading level that becomes a node
const MAX_HEADING_LEVEL: usize = 4;

/// Extensions shared by the outline and the plan view renderer.
pub fn markdown_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS | Options::ENABLE_STRIKETHROUGH
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    pub label: String,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including itself
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::size).sum::<usize>()
    }

    /// Number of leaves in this subtree (a leaf counts as one)
    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            1
        } else {
            self.children.iter().map(OutlineNode::leaf_count).sum()
        }
    }

    /// Levels below and including this node
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::depth).max().unwrap_or(0)
    }
}

/// Heading and list structure of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOutline {
    pub root: OutlineNode,
}

impl PlanOutline {
    /// Build the tree from Markdown.
    ///
    /// The first `#` heading, if it comes before anything else, names the
    /// root. `##`..`####` headings nest by level; list items nest under the
    /// nearest heading, one level deeper per nested list. Paragraphs, tables
    /// and quotes outside list items are skipped.
    pub fn parse(markdown: &str) -> Self {
        let mut builder = OutlineBuilder::default();
        for event in Parser::new_ext(markdown, markdown_options()) {
            builder.push(event);
        }
        builder.finish()
    }
}

/// Open label being collected from text events.
enum Pending {
    Heading(usize, String),
    Item(usize, String),
}

#[derive(Default)]
struct OutlineBuilder {
    root_label: Option<String>,
    seen_node: bool,
    // (depth, node) chain from the root's children downward
    stack: Vec<(usize, OutlineNode)>,
    top: Vec<OutlineNode>,
    heading_depth: usize,
    list_depth: usize,
    pending: Option<Pending>,
}

impl OutlineBuilder {
    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.flush();
                self.pending = Some(Pending::Heading(heading_level(level), String::new()));
            }
            Event::End(TagEnd::Heading(_)) | Event::End(TagEnd::Item) => self.flush(),
            Event::Start(Tag::List(_)) => {
                // A nested list closes its parent item's label.
                self.flush();
                self.list_depth += 1;
            }
            Event::End(TagEnd::List(_)) => self.list_depth = self.list_depth.saturating_sub(1),
            Event::Start(Tag::Item) => {
                self.flush();
                let depth = self.heading_depth + self.list_depth.max(1);
                self.pending = Some(Pending::Item(depth, String::new()));
            }
            Event::Text(text)
            | Event::Code(text)
            | Event::Html(text)
            | Event::InlineHtml(text) => self.append(&text),
            Event::SoftBreak | Event::HardBreak | Event::End(TagEnd::Paragraph) => {
                self.append(" ")
            }
            _ => {}
        }
    }

    fn append(&mut self, text: &str) {
        if let Some(Pending::Heading(_, label) | Pending::Item(_, label)) = &mut self.pending {
            label.push_str(text);
        }
    }

    fn flush(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let (depth, label) = match pending {
            Pending::Heading(level, text) => {
                let label = clean_label(&text);
                if level > MAX_HEADING_LEVEL || label.is_empty() {
                    return;
                }
                if level == 1 && !self.seen_node && self.root_label.is_none() {
                    self.root_label = Some(label);
                    return;
                }
                self.heading_depth = level.saturating_sub(1).max(1);
                (self.heading_depth, label)
            }
            Pending::Item(depth, text) => {
                let label = clean_label(&text);
                if label.is_empty() {
                    return;
                }
                (depth, label)
            }
        };
        self.seen_node = true;
        collapse(&mut self.stack, &mut self.top, depth);
        self.stack.push((depth, OutlineNode::new(label)));
    }

    fn finish(mut self) -> PlanOutline {
        self.flush();
        collapse(&mut self.stack, &mut self.top, 0);
        let mut root =
            OutlineNode::new(self.root_label.unwrap_or_else(|| DEFAULT_ROOT_LABEL.to_string()));
        root.children = self.top;
        PlanOutline { root }
    }
}

fn heading_level(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Pop every open node at `depth` or deeper, attaching each to its parent.
fn collapse(stack: &mut Vec<(usize, OutlineNode)>, top: &mut Vec<OutlineNode>, depth: usize) {
    while stack.last().is_some_and(|(d, _)| *d >= depth) {
        let Some((_, node)) = stack.pop() else {
            break;
        };
        match stack.last_mut() {
            Some((_, parent)) => parent.children.push(node),
            None => top.push(node),
        }
    }
}

/// Collapse whitespace and drop a trailing colon.
fn clean_label(text: &str) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    text.trim_end_matches(':').trim_end().to_string()
}
