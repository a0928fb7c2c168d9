//! Error types for suppression matching and settings loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the suppression core.
///
/// Data absence (no settings key, no candidates, no match) is never an error;
/// these variants only describe caller bugs and unreadable settings files.
#[derive(Debug, Error)]
pub enum SuppressionError {
    /// A diagnostic points at a line its source text does not have.
    #[error("line {line} is out of range: source has {line_count} line(s)")]
    LineOutOfRange { line: usize, line_count: usize },

    /// A suppression descriptor was registered without a rule id.
    #[error("cannot register a suppression for an empty rule id")]
    EmptyRuleId,

    /// IO error while reading or writing a settings file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A settings file exists but does not hold a valid issue list.
    #[error("Invalid settings file {}: {message}", .path.display())]
    InvalidSettings { path: PathBuf, message: String },
}

impl SuppressionError {
    /// Create an invalid settings error.
    pub fn invalid_settings(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::InvalidSettings {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result alias for suppression operations.
pub type Result<T, E = SuppressionError> = std::result::Result<T, E>;
