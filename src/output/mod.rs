//! Tree formatting and display
//!
//! This module provides renderers for a walked [`TreeNode`](crate::tree::TreeNode):
//! - `text` - connector-drawn lines, the plain-text format
//! - `tree` - console output with colours and search highlighting
//! - `json` - `{"name", "children"}` JSON
//! - `html` - nested `<ul>` lists
//! - `markdown` - text in a fenced code block
//! - `reparse` - JSON/HTML rebuilt from previously rendered text

mod config;
mod highlight;
mod html;
mod json;
mod markdown;
mod reparse;
mod text;
mod tree;

pub use config::OutputConfig;
pub use highlight::{find_matches, write_highlighted};
pub use html::{escape_html, to_html};
pub use json::{JsonNode, to_json, to_json_value, to_pretty_json};
pub use markdown::to_markdown;
pub use reparse::{DepthInference, infer_depth, tree_to_html, tree_to_json};
pub use text::{LineStyle, TreeLine, render_lines, render_text};
pub use tree::TreeFormatter;
