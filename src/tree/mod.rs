//! Directory tree walking logic
//!
//! - `TreeWalker`: single depth-first walk producing a [`TreeNode`]
//! - `WalkSession`: runs walks in the background, newest request wins

mod config;
mod node;
mod session;
mod traversal;
mod walker;

pub use config::{
    DEFAULT_EXCLUSIONS, HIDDEN_MARKER, TraversalConfig, parse_max_depth, split_exclusions,
};
pub use node::{FileMetadata, MODIFIED_FORMAT, Marker, NodeKind, TreeNode};
pub use session::{CancelToken, Completed, Ticket, WalkSession};
pub use traversal::{compare_names, is_hidden};
pub use walker::TreeWalker;
