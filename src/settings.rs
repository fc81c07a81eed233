//! Persisted settings
//!
//! A flat JSON object holding everything needed to rebuild a
//! [`TraversalConfig`] apart from the root folder. Unknown keys are ignored
//! and missing keys fall back to their defaults, so files written by older
//! or newer versions still load.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, SettingsError};
use crate::symbols::SymbolStyle;
use crate::tree::{DEFAULT_EXCLUSIONS, TraversalConfig, parse_max_depth, split_exclusions};

/// Settings file read from the working directory when none is named.
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Enabled entries of the default exclusion list.
    pub exclusions: Vec<String>,
    /// Extra names, comma-separated.
    pub additional_exclusions: String,
    /// Blank for no limit.
    #[serde(deserialize_with = "string_or_number")]
    pub max_depth: String,
    pub show_metadata: bool,
    /// Symbol style name, e.g. "Classic".
    pub symbols: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
            additional_exclusions: String::new(),
            max_depth: String::new(),
            show_metadata: false,
            symbols: SymbolStyle::Classic.name().to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&content).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = crate::output::to_pretty_json(self).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("saved settings to {}", path.display());
        Ok(())
    }

    pub fn style(&self) -> SymbolStyle {
        SymbolStyle::from_name(&self.symbols)
    }

    /// Build the walk configuration for `root`.
    ///
    /// Fails when the stored depth is not blank or a positive integer.
    pub fn to_config(&self, root: impl Into<PathBuf>) -> Result<TraversalConfig, ConfigError> {
        let config = self
            .exclusions
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .chain(split_exclusions(&self.additional_exclusions))
            .fold(TraversalConfig::new(root), |config, name| config.exclude(name))
            .with_max_depth(parse_max_depth(&self.max_depth)?)
            .with_symbols(self.style().symbols());
        let config = TraversalConfig {
            show_metadata: self.show_metadata,
            ..config
        };
        config.validate()?;
        Ok(config)
    }

    /// Capture a configuration. Names from the default list go to
    /// `exclusions`, all others to `additional_exclusions`.
    pub fn from_config(config: &TraversalConfig, style: SymbolStyle) -> Self {
        let (defaults, extra): (Vec<String>, Vec<String>) = config
            .exclusions
            .iter()
            .cloned()
            .partition(|name| DEFAULT_EXCLUSIONS.contains(&name.as_str()));
        Self {
            exclusions: defaults,
            additional_exclusions: extra.join(", "),
            max_depth: config.max_depth.map(|d| d.to_string()).unwrap_or_default(),
            show_metadata: config.show_metadata,
            symbols: style.name().to_string(),
        }
    }
}

/// Accept `"3"`, `3` or `null` for the depth field.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number for max_depth, got {}",
            other
        ))),
    }
}
