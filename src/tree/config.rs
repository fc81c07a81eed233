//! Configuration for a single walk

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::symbols::SymbolSet;

/// Names excluded unless the user opts out.
pub const DEFAULT_EXCLUSIONS: [&str; 6] =
    ["node_modules", ".git", ".next", "dist", "__pycache__", ".venv"];

/// Leading character of hidden entries.
pub const HIDDEN_MARKER: char = '.';

/// Configuration for tree walking behavior.
///
/// Built fresh for every walk and never mutated while a walk is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalConfig {
    pub root: PathBuf,
    /// Entry names to drop, matched exactly.
    pub exclusions: BTreeSet<String>,
    pub include_hidden: bool,
    /// Deepest level whose contents are listed; `None` is unbounded.
    pub max_depth: Option<usize>,
    /// Append size and modification time to plain files.
    pub show_metadata: bool,
    pub symbols: SymbolSet,
}

impl TraversalConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Replace the exclusion set with the default exclusions.
    pub fn with_default_exclusions(mut self) -> Self {
        self.exclusions = DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.exclusions.insert(name.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_symbols(mut self, symbols: SymbolSet) -> Self {
        self.symbols = symbols;
        self
    }

    /// Check the configuration before a walk is attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::MissingRoot);
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::InvalidDepth("0".to_string()));
        }
        Ok(())
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclusions.contains(name)
    }
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclusions: BTreeSet::new(),
            include_hidden: false,
            max_depth: None,
            show_metadata: false,
            symbols: SymbolSet::default(),
        }
    }
}

/// Parse a maximum depth as typed by a user.
///
/// Blank input means "no limit". Anything else must be a positive integer.
pub fn parse_max_depth(input: &str) -> Result<Option<usize>, ConfigError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<usize>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidDepth(trimmed.to_string())),
        Ok(depth) => Ok(Some(depth)),
    }
}

/// Split a comma-separated exclusion list, dropping blank items.
pub fn split_exclusions(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
