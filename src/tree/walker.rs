//! TreeWalker - depth-first walk producing a structured tree

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::config::TraversalConfig;
use super::node::{FileMetadata, Marker, NodeKind, TreeNode};
use super::session::CancelToken;
use super::traversal::{ListedEntry, filter_entries, read_sorted_entries};

/// Walks the directory named by a [`TraversalConfig`].
///
/// Problems with individual entries never abort a walk; they are recorded
/// as [`Marker`] nodes in the tree.
pub struct TreeWalker {
    config: TraversalConfig,
}

/// The walk was superseded before it finished.
struct Cancelled;

impl TreeWalker {
    pub fn new(config: TraversalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    pub fn walk(&self) -> TreeNode {
        let mut root = self.root_node();
        let mut state = WalkState::new(&self.config, None);
        // Without a token the visit cannot be cancelled.
        if let Ok(children) = state.visit_dir(&self.config.root, 1) {
            root.children = children;
        }
        root
    }

    /// Like [`walk`](Self::walk), but gives up once `token` is cancelled.
    ///
    /// The token is checked before each directory is listed.
    pub fn walk_until(&self, token: &CancelToken) -> Option<TreeNode> {
        let mut root = self.root_node();
        let mut state = WalkState::new(&self.config, Some(token));
        match state.visit_dir(&self.config.root, 1) {
            Ok(children) => {
                root.children = children;
                Some(root)
            }
            Err(Cancelled) => {
                log::debug!("walk of {} cancelled", self.config.root.display());
                None
            }
        }
    }

    fn root_node(&self) -> TreeNode {
        TreeNode::root(self.config.root.display().to_string())
    }
}

/// Per-walk state. The visited set never outlives one walk.
struct WalkState<'a> {
    config: &'a TraversalConfig,
    visited: HashSet<PathBuf>,
    cancel: Option<&'a CancelToken>,
}

impl<'a> WalkState<'a> {
    fn new(config: &'a TraversalConfig, cancel: Option<&'a CancelToken>) -> Self {
        let mut visited = HashSet::new();
        if let Ok(root) = fs::canonicalize(&config.root) {
            visited.insert(root);
        }
        Self {
            config,
            visited,
            cancel,
        }
    }

    /// Children of the directory at `path`, whose entries sit at `depth`.
    fn visit_dir(&mut self, path: &Path, depth: usize) -> Result<Vec<TreeNode>, Cancelled> {
        if self.cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(Cancelled);
        }

        if self.config.max_depth.is_some_and(|max| depth > max) {
            return Ok(vec![TreeNode::marker(Marker::Truncated)]);
        }

        let entries = match read_sorted_entries(path) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("cannot list {}: {}", path.display(), e);
                return Ok(vec![TreeNode::marker(listing_marker(&e))]);
            }
        };

        let entries = filter_entries(entries, self.config);
        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            children.push(self.visit_entry(entry, depth)?);
        }
        Ok(children)
    }

    fn visit_entry(&mut self, entry: ListedEntry, depth: usize) -> Result<TreeNode, Cancelled> {
        let Some(file_type) = entry.file_type else {
            return Ok(TreeNode::new(entry.name, NodeKind::Other));
        };

        if file_type.is_symlink() {
            let target = fs::read_link(&entry.path)
                .map(|target| target.display().to_string())
                .ok();
            return Ok(TreeNode::new(entry.name, NodeKind::Symlink { target }));
        }

        if file_type.is_dir() {
            let mut node = TreeNode::directory(entry.name);
            match fs::canonicalize(&entry.path) {
                Ok(canonical) => {
                    if !self.visited.insert(canonical) {
                        log::debug!("circular link at {}", entry.path.display());
                        node.children = vec![TreeNode::marker(Marker::CircularLink)];
                        return Ok(node);
                    }
                }
                Err(e) => {
                    log::debug!("cannot canonicalize {}: {}", entry.path.display(), e);
                }
            }
            log::trace!("descending into {}", entry.path.display());
            node.children = self.visit_dir(&entry.path, depth + 1)?;
            return Ok(node);
        }

        if file_type.is_file() {
            let metadata = if self.config.show_metadata {
                read_file_metadata(&entry.path)
            } else {
                None
            };
            return Ok(TreeNode::new(entry.name, NodeKind::File { metadata }));
        }

        Ok(TreeNode::new(entry.name, NodeKind::Other))
    }
}

fn listing_marker(error: &io::Error) -> Marker {
    if error.kind() == io::ErrorKind::PermissionDenied {
        Marker::PermissionDenied
    } else {
        Marker::Error(error.to_string())
    }
}

/// Size and mtime of a file; any failure yields `None`.
fn read_file_metadata(path: &Path) -> Option<FileMetadata> {
    let meta = path.metadata().ok()?;
    let modified = meta.modified().ok()?;
    Some(FileMetadata {
        size_bytes: meta.len(),
        modified: DateTime::<Local>::from(modified),
    })
}

#[cfg(test)]
mod tests {
    use crate::output::render_text;
    use crate::symbols::SymbolStyle;
    use crate::test_utils::TestDir;

    use super::*;

    fn names(node: &TreeNode) -> Vec<String> {
        node.children.iter().map(|c| c.label()).collect()
    }

    #[test]
    fn test_sorted_case_insensitively_with_exclusions() {
        let dir = TestDir::new();
        dir.add_dir("a");
        dir.add_dir("node_modules");
        dir.add_dir("B");

        let config = TraversalConfig::new(dir.path()).exclude("node_modules");
        let tree = TreeWalker::new(config).walk();
        assert_eq!(names(&tree), vec!["a", "B"]);
    }

    #[test]
    fn test_hidden_entries() {
        let dir = TestDir::new();
        dir.add_file(".env", "SECRET=1");
        dir.add_file("main.rs", "");

        let config = TraversalConfig::new(dir.path());
        assert_eq!(names(&TreeWalker::new(config.clone()).walk()), vec!["main.rs"]);

        let config = TraversalConfig {
            include_hidden: true,
            ..config
        };
        assert_eq!(
            names(&TreeWalker::new(config).walk()),
            vec![".env", "main.rs"]
        );
    }

    #[test]
    fn test_max_depth_truncates() {
        let dir = TestDir::new();
        dir.add_file("one/two/three/deep.txt", "");
        dir.add_file("top.txt", "");

        let config = TraversalConfig::new(dir.path()).with_max_depth(Some(1));
        let tree = TreeWalker::new(config).walk();

        let one = &tree.children[0];
        assert_eq!(one.name, "one");
        assert_eq!(one.children, vec![TreeNode::marker(Marker::Truncated)]);
        assert_eq!(tree.children[1].name, "top.txt");
        assert_eq!(tree.count(), 4);
    }

    #[test]
    fn test_missing_root_is_error_marker() {
        let dir = TestDir::new();
        let config = TraversalConfig::new(dir.path().join("missing"));
        let tree = TreeWalker::new(config).walk();
        assert_eq!(tree.children.len(), 1);
        assert!(matches!(
            tree.children[0].kind,
            NodeKind::Marker(Marker::Error(_))
        ));
    }

    #[test]
    fn test_metadata_only_on_files() {
        let dir = TestDir::new();
        dir.add_file("data.bin", "12345");
        dir.add_dir("sub");

        let config = TraversalConfig {
            show_metadata: true,
            ..TraversalConfig::new(dir.path())
        };
        let tree = TreeWalker::new(config).walk();
        let labels = names(&tree);
        assert!(
            labels[0].starts_with("data.bin [Size: 5 bytes, Modified: "),
            "got {}",
            labels[0]
        );
        assert_eq!(labels[1], "sub");
    }

    #[test]
    fn test_render_matches_walk_order() {
        let dir = TestDir::new();
        dir.add_file("src/main.rs", "");
        dir.add_file("src/lib.rs", "");
        dir.add_file("Cargo.toml", "");

        let root = dir.path().display().to_string();
        let tree = TreeWalker::new(TraversalConfig::new(dir.path())).walk();
        let text = render_text(&tree, &SymbolStyle::Classic.symbols());
        let expected = format!(
            "{}\n├── Cargo.toml\n└── src\n    ├── lib.rs\n    └── main.rs",
            root
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_cancelled_token_yields_nothing() {
        let dir = TestDir::new();
        dir.add_file("a.txt", "");
        let token = CancelToken::new();
        token.cancel();
        let walker = TreeWalker::new(TraversalConfig::new(dir.path()));
        assert!(walker.walk_until(&token).is_none());
        assert!(walker.walk_until(&CancelToken::new()).is_some());
    }

    // A real cycle needs a bind mount, so the visited set is seeded by hand.
    #[test]
    fn test_revisited_directory_is_circular() {
        let dir = TestDir::new();
        dir.add_file("a/x.txt", "");
        let seen = dir.add_file("b/y.txt", "");

        let config = TraversalConfig::new(dir.path());
        let mut state = WalkState::new(&config, None);
        // As if `b` had already been reached through another path.
        let canonical = fs::canonicalize(seen.parent().unwrap()).unwrap();
        state.visited.insert(canonical);

        let mut root = TreeNode::root(dir.path().display().to_string());
        root.children = state.visit_dir(dir.path(), 1).ok().unwrap();
        assert_eq!(names(&root.children[0]), vec!["x.txt"]);
        assert_eq!(
            root.children[1].children,
            vec![TreeNode::marker(Marker::CircularLink)]
        );

        let text = render_text(&root, &SymbolStyle::Classic.symbols());
        assert!(text.ends_with("└── b\n    └── [Circular Link]"), "{}", text);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_not_descended() {
        let dir = TestDir::new();
        dir.add_file("real/inner.txt", "");
        dir.add_symlink("real", "alias");

        let tree = TreeWalker::new(TraversalConfig::new(dir.path())).walk();
        assert_eq!(names(&tree), vec!["alias -> real", "real"]);
        assert!(tree.children[0].children.is_empty());
        assert_eq!(names(&tree.children[1]), vec!["inner.txt"]);
    }
}
