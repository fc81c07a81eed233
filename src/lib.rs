//! Foldtree - render a directory tree as text, JSON, HTML or Markdown

pub mod error;
pub mod export;
pub mod output;
pub mod settings;
pub mod symbols;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ConfigError, Error, ExportError, Result, SettingsError};
pub use export::{ExportFormat, export_to_file};
pub use output::{
    DepthInference, JsonNode, OutputConfig, TreeFormatter, render_text, to_html, to_json,
    to_json_value, to_markdown, tree_to_html, tree_to_json,
};
pub use settings::{SETTINGS_FILE, Settings};
pub use symbols::{SymbolSet, SymbolStyle};
pub use tree::{CancelToken, Ticket, TraversalConfig, TreeNode, TreeWalker, WalkSession};
