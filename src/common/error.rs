//! Error types for the detox CLI
//!
//! Messages are meant to be read straight off the terminal, so each one names
//! the offending value and, where it helps, what to do instead.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the detox CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Runner Errors ===
    #[error("{0} is not supported in detox cli tools. You can still run your tests with the runner's own cli tool")]
    UnsupportedRunner(String),

    #[error("Test runner '{name}' not found. Searched: {searched}")]
    RunnerNotFound { name: String, searched: String },

    #[error("Failed to spawn test runner: {0}")]
    SpawnFailed(String),

    // === Settings Errors ===
    #[error("Failed to read project manifest '{path}': {error}")]
    ManifestRead { path: String, error: String },

    #[error("Invalid project manifest: {0}")]
    ManifestParse(String),

    #[error("Invalid value for detox setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a runner not found error with search paths
    pub fn runner_not_found<S: AsRef<str>>(name: &str, paths: &[S]) -> Self {
        Self::RunnerNotFound {
            name: name.to_string(),
            searched: paths.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(", "),
        }
    }

    /// Create an invalid setting error
    pub fn invalid_setting(key: &str, reason: &str) -> Self {
        Self::InvalidSetting {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}
