use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for bump-version operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("No version source found: checked configured files, composer.json and package.ini")]
    NoVersionSource,

    #[error("Failed to write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in bump-version
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumpError::Version(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        BumpError::Manifest(msg.into())
    }

    /// Create a write error for a specific path
    pub fn write(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        BumpError::Write {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
