//! Error types for rmchars.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while sanitizing a tree, generating fixtures, or setting up the run.
#[derive(Debug, Error)]
pub enum RmcharsError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Failed to rename {from:?} to {to:?}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to rename {from:?}: target {to:?} already exists")]
    TargetExists { from: PathBuf, to: PathBuf },

    #[error("Refusing to rename {path:?}: sanitized name is empty")]
    EmptyName { path: PathBuf },

    #[error("Failed to walk directory: {0}")]
    Walk(String),

    #[error("Failed to get user input: {0}")]
    Prompt(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for RmcharsError {
    fn from(err: config::ConfigError) -> Self {
        RmcharsError::Config(err.to_string())
    }
}

impl From<walkdir::Error> for RmcharsError {
    fn from(err: walkdir::Error) -> Self {
        RmcharsError::Walk(err.to_string())
    }
}
