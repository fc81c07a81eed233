//! Exporting a walked tree to a file

use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::error::ExportError;
use crate::output::{render_text, to_html, to_json, to_markdown};
use crate::symbols::SymbolSet;
use crate::tree::TreeNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Connector-drawn plain text
    #[default]
    Text,
    /// Nested {"name", "children"} objects
    Json,
    /// Nested unordered lists
    Html,
    /// Plain text in a fenced code block
    Markdown,
}

impl ExportFormat {
    /// Pick a format from a file extension; anything unknown is text.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => ExportFormat::Json,
            "html" | "htm" => ExportFormat::Html,
            "md" | "markdown" => ExportFormat::Markdown,
            _ => ExportFormat::Text,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
            ExportFormat::Markdown => "md",
        }
    }

    pub fn render(self, root: &TreeNode, symbols: &SymbolSet) -> Result<String, ExportError> {
        Ok(match self {
            ExportFormat::Text => render_text(root, symbols),
            ExportFormat::Json => to_json(root)?,
            ExportFormat::Html => to_html(root),
            ExportFormat::Markdown => to_markdown(root, symbols),
        })
    }
}

/// Render `root` and write it to `path`.
///
/// A failed write may leave a partial file behind.
pub fn export_to_file(
    path: &Path,
    format: ExportFormat,
    root: &TreeNode,
    symbols: &SymbolSet,
) -> Result<(), ExportError> {
    let content = format.render(root, symbols)?;
    fs::write(path, content).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("exported {} to {}", format.extension(), path.display());
    Ok(())
}
