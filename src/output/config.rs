//! Output configuration types

use crate::symbols::SymbolSet;

/// Configuration for console output.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    pub symbols: SymbolSet,
    /// Search term whose matches are highlighted.
    pub highlight: Option<String>,
}

impl OutputConfig {
    /// The highlight term, if it is non-empty.
    pub fn highlight_term(&self) -> Option<&str> {
        self.highlight.as_deref().filter(|term| !term.is_empty())
    }
}
