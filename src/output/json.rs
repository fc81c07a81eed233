//! JSON output formatting

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::tree::TreeNode;

/// `{"name": ..., "children": [...]}`, the exported JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonNode {
    pub name: String,
    pub children: Vec<JsonNode>,
}

impl JsonNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        1 + self.children.iter().map(JsonNode::count).sum::<usize>()
    }
}

impl From<&TreeNode> for JsonNode {
    fn from(node: &TreeNode) -> Self {
        Self {
            name: node.label(),
            children: node.children.iter().map(JsonNode::from).collect(),
        }
    }
}

/// Serialize with four-space indentation.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn to_json(node: &TreeNode) -> Result<String, serde_json::Error> {
    to_pretty_json(&JsonNode::from(node))
}

/// The exported JSON shape as a [`Value`], for callers that embed it.
pub fn to_json_value(node: &TreeNode) -> Result<Value, serde_json::Error> {
    serde_json::to_value(JsonNode::from(node))
}
