//! Plain-text rendering of a walked tree

use termcolor::Color;

use crate::symbols::SymbolSet;
use crate::tree::{NodeKind, TreeNode};

/// How a line is coloured on a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Directory,
    File,
    Symlink,
    Marker,
}

impl LineStyle {
    pub fn of(node: &TreeNode) -> Self {
        match node.kind {
            NodeKind::Root | NodeKind::Directory => LineStyle::Directory,
            NodeKind::Symlink { .. } => LineStyle::Symlink,
            NodeKind::Marker(_) => LineStyle::Marker,
            NodeKind::File { .. } | NodeKind::Other => LineStyle::File,
        }
    }

    /// Colour for the label, `None` for the terminal default.
    pub fn color(&self) -> Option<Color> {
        match self {
            LineStyle::Directory => Some(Color::Blue),
            LineStyle::Symlink => Some(Color::Cyan),
            LineStyle::Marker => Some(Color::Red),
            LineStyle::File => None,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, LineStyle::Directory)
    }
}

/// One output line: connectors followed by the node label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub prefix: String,
    pub label: String,
    /// 0 for the root line.
    pub depth: usize,
    pub style: LineStyle,
}

impl TreeLine {
    pub fn text(&self) -> String {
        format!("{}{}", self.prefix, self.label)
    }
}

/// Flatten a tree into lines, parents before children.
pub fn render_lines(root: &TreeNode, symbols: &SymbolSet) -> Vec<TreeLine> {
    let mut lines = Vec::with_capacity(root.count());
    lines.push(TreeLine {
        prefix: String::new(),
        label: root.label(),
        depth: 0,
        style: LineStyle::of(root),
    });
    push_children(&root.children, "", 1, symbols, &mut lines);
    lines
}

fn push_children(
    children: &[TreeNode],
    prefix: &str,
    depth: usize,
    symbols: &SymbolSet,
    lines: &mut Vec<TreeLine>,
) {
    let total = children.len();
    for (i, child) in children.iter().enumerate() {
        let is_last = i + 1 == total;
        lines.push(TreeLine {
            prefix: format!("{}{}", prefix, symbols.connector(is_last)),
            label: child.label(),
            depth,
            style: LineStyle::of(child),
        });
        if !child.children.is_empty() {
            let child_prefix = symbols.child_prefix(prefix, is_last);
            push_children(&child.children, &child_prefix, depth + 1, symbols, lines);
        }
    }
}

/// Newline-joined lines, without a trailing newline.
pub fn render_text(root: &TreeNode, symbols: &SymbolSet) -> String {
    render_lines(root, symbols)
        .iter()
        .map(TreeLine::text)
        .collect::<Vec<_>>()
        .join("\n")
}
