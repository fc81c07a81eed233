//! Structured result of a walk

use chrono::{DateTime, Local};

/// Timestamp layout used in metadata suffixes.
pub const MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Inline markers standing in for content that could not be listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    PermissionDenied,
    /// Any other listing failure, carrying the OS message.
    Error(String),
    CircularLink,
    /// Depth limit reached.
    Truncated,
}

impl Marker {
    pub fn label(&self) -> String {
        match self {
            Marker::PermissionDenied => "[Permission Denied]".to_string(),
            Marker::Error(message) => format!("[Error: {}]", message),
            Marker::CircularLink => "[Circular Link]".to_string(),
            Marker::Truncated => "...".to_string(),
        }
    }
}

/// Size and modification time of a plain file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub size_bytes: u64,
    pub modified: DateTime<Local>,
}

impl FileMetadata {
    /// Suffix appended to the file name, including the leading space.
    pub fn suffix(&self) -> String {
        format!(
            " [Size: {} bytes, Modified: {}]",
            self.size_bytes,
            self.modified.format(MODIFIED_FORMAT)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Directory,
    File { metadata: Option<FileMetadata> },
    /// `None` when the link target could not be read.
    Symlink { target: Option<String> },
    /// Sockets, fifos, devices and anything else that is neither file nor directory.
    Other,
    Marker(Marker),
}

/// One entry of the walked tree, children in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn root(path: impl Into<String>) -> Self {
        Self::new(path, NodeKind::Root)
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Directory)
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::File { metadata: None })
    }

    pub fn marker(marker: Marker) -> Self {
        Self::new(marker.label(), NodeKind::Marker(marker))
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Text shown for this node, without any prefix.
    pub fn label(&self) -> String {
        match &self.kind {
            NodeKind::Symlink { target: Some(target) } => format!("{} -> {}", self.name, target),
            NodeKind::Symlink { target: None } => format!("{} -> [Invalid Symlink]", self.name),
            NodeKind::File {
                metadata: Some(metadata),
            } => format!("{}{}", self.name, metadata.suffix()),
            NodeKind::Marker(marker) => marker.label(),
            _ => self.name.clone(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Root | NodeKind::Directory)
    }

    pub fn is_marker(&self) -> bool {
        matches!(self.kind, NodeKind::Marker(_))
    }

    /// Number of nodes in this subtree, this one included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }

    /// Directory and file counts below this node, markers excluded.
    pub fn summary(&self) -> (usize, usize) {
        self.children.iter().fold((0, 0), |(dirs, files), child| {
            let (d, f) = child.summary();
            if child.is_marker() {
                (dirs + d, files + f)
            } else if child.is_dir() {
                (dirs + d + 1, files + f)
            } else {
                (dirs + d, files + f + 1)
            }
        })
    }
}
