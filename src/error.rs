//! Error types
//!
//! Filesystem problems met during a walk never show up here: they are
//! rendered inline as marker nodes. These errors cover the boundaries around
//! a walk (configuration, settings files and exports).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A configuration that cannot be walked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no root folder selected")]
    MissingRoot,
    #[error("invalid maximum depth '{0}': expected a positive integer")]
    InvalidDepth(String),
}

/// Errors emitted while reading or writing a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {path} could not be accessed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("settings file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors emitted while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Any error the command line shell reports to the user.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
    #[error("walk was cancelled before it finished")]
    Cancelled,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = Error::from(ConfigError::InvalidDepth("x".into()));
        assert_eq!(
            err.to_string(),
            "invalid maximum depth 'x': expected a positive integer"
        );
        assert_eq!(
            Error::Cancelled.to_string(),
            "walk was cancelled before it finished"
        );
    }
}
