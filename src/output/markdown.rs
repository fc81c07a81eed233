//! Markdown output formatting
//!
//! The plain-text tree wrapped in a fenced code block, ready to paste into
//! documentation.

use crate::symbols::SymbolSet;
use crate::tree::TreeNode;

use super::text::render_text;

pub fn to_markdown(root: &TreeNode, symbols: &SymbolSet) -> String {
    format!("```\n{}\n```", render_text(root, symbols))
}
