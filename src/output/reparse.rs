//! Rebuild structure from an already rendered text tree.
//!
//! Exports made from a walk go through the structured renderers. This module
//! exists for text that was saved earlier and has no tree behind it: the
//! nesting depth of every line is inferred from the width of its leading
//! connector prefix.
//!
//! The inference is lossy. A name that itself starts with a glyph character
//! or a space loses those characters, and the line may land at the wrong
//! depth. The indent unit width is explicit so that symbol sets whose
//! continuation is not four characters wide can still be read back.

use crate::symbols::{SymbolSet, SymbolStyle};

use super::html::escape_html;
use super::json::JsonNode;

/// Parameters for recovering a line's depth from its prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthInference {
    glyphs: Vec<char>,
    unit_width: usize,
}

impl DepthInference {
    pub fn new(glyphs: Vec<char>, unit_width: usize) -> Self {
        Self {
            glyphs,
            unit_width: unit_width.max(1),
        }
    }

    /// Glyphs and width of a single symbol set.
    pub fn for_symbols(symbols: &SymbolSet) -> Self {
        Self::new(symbols.glyph_chars(), symbols.indent_width())
    }

    pub fn with_unit_width(mut self, unit_width: usize) -> Self {
        self.unit_width = unit_width.max(1);
        self
    }

    pub fn unit_width(&self) -> usize {
        self.unit_width
    }

    /// Depth and label of one line.
    pub fn infer<'a>(&self, line: &'a str) -> (usize, &'a str) {
        infer_depth(line, self)
    }
}

impl Default for DepthInference {
    /// Accepts prefixes drawn with any of the named styles, four wide.
    fn default() -> Self {
        let mut glyphs: Vec<char> = SymbolStyle::ALL
            .iter()
            .flat_map(|style| style.symbols().glyph_chars())
            .collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        Self::new(glyphs, 4)
    }
}

/// Strip the connector prefix of `line` and turn its width into a depth.
pub fn infer_depth<'a>(line: &'a str, inference: &DepthInference) -> (usize, &'a str) {
    let label = line.trim_start_matches(|c: char| inference.glyphs.contains(&c));
    let stripped = line[..line.len() - label.len()].chars().count();
    (stripped / inference.unit_width, label)
}

/// Non-blank lines with their inferred depth. The first line is the root
/// and always sits at depth 0; every later line sits at depth 1 or deeper.
fn parsed_lines<'a>(
    text: &'a str,
    inference: &'a DepthInference,
) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(move |(i, line)| {
            if i == 0 {
                (0, line)
            } else {
                let (depth, label) = inference.infer(line);
                (depth.max(1), label)
            }
        })
}

/// Rebuild the JSON tree of a rendered text tree. `None` for blank input.
pub fn tree_to_json(text: &str, inference: &DepthInference) -> Option<JsonNode> {
    let mut stack: Vec<(JsonNode, usize)> = Vec::new();

    for (depth, label) in parsed_lines(text, inference) {
        while stack.len() > 1 && stack.last().is_some_and(|(_, d)| *d >= depth) {
            fold_top(&mut stack);
        }
        stack.push((JsonNode::new(label), depth));
    }

    while stack.len() > 1 {
        fold_top(&mut stack);
    }
    stack.pop().map(|(root, _)| root)
}

/// Pop the top node and attach it to its parent.
fn fold_top(stack: &mut Vec<(JsonNode, usize)>) {
    if let Some((node, _)) = stack.pop() {
        if let Some((parent, _)) = stack.last_mut() {
            parent.children.push(node);
        }
    }
}

/// Rebuild nested HTML lists from a rendered text tree.
///
/// Always balanced: every `<ul>` and `<li>` opened is closed again.
pub fn tree_to_html(text: &str, inference: &DepthInference) -> String {
    // (depth, nested list opened) for each open <li>
    let mut open: Vec<(usize, bool)> = Vec::new();
    let mut html = String::from("<ul>\n");

    for (depth, label) in parsed_lines(text, inference) {
        while open.last().is_some_and(|(d, _)| *d >= depth) {
            close_item(&mut open, &mut html);
        }
        if let Some((_, has_list)) = open.last_mut() {
            if !*has_list {
                html.push_str("\n<ul>\n");
                *has_list = true;
            }
        }
        html.push_str("<li>");
        html.push_str(&escape_html(label));
        open.push((depth, false));
    }

    while !open.is_empty() {
        close_item(&mut open, &mut html);
    }
    html.push_str("</ul>");
    html
}

fn close_item(open: &mut Vec<(usize, bool)>, html: &mut String) {
    if let Some((_, has_list)) = open.pop() {
        if has_list {
            html.push_str("</ul>\n");
        }
        html.push_str("</li>\n");
    }
}
