//! Plan export: file names, outline extraction, and mind-map rendering

pub mod filename;
pub mod mindmap;
pub mod outline;

pub use filename::{export_filename, plan_filename, ExportFormat};
pub use mindmap::{render_html, render_svg, xml_escape};
pub use outline::{markdown_options, OutlineNode, PlanOutline};
