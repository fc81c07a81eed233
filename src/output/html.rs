//! HTML nested-list output

use crate::tree::TreeNode;

/// Escape text for use inside an HTML element.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a tree as a single top-level `<ul>`.
pub fn to_html(root: &TreeNode) -> String {
    let mut html = String::from("<ul>\n");
    write_item(root, &mut html);
    html.push_str("</ul>");
    html
}

fn write_item(node: &TreeNode, html: &mut String) {
    html.push_str("<li>");
    html.push_str(&escape_html(&node.label()));
    if !node.children.is_empty() {
        html.push_str("\n<ul>\n");
        for child in &node.children {
            write_item(child, html);
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</li>\n");
}
