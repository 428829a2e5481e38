//! Error types for the optimizer

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building an optimizer or processing dictionaries
#[derive(Debug, Error)]
pub enum OptimizerError {
    /// Rules file could not be read or parsed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A rule pattern is not a valid regular expression
    #[error("Invalid pattern in {field}: '{pattern}': {reason}")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        reason: String,
    },

    /// Reading or writing a dictionary failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dictionary document does not have the expected shape
    #[error("Invalid dictionary '{}': {reason}", path.display())]
    InvalidDictionary { path: PathBuf, reason: String },

    /// Two inputs of one batch map to the same output file
    #[error("Output '{}' is already written from '{}'", output.display(), first.display())]
    OutputConflict { output: PathBuf, first: PathBuf },
}

impl OptimizerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OptimizerError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for optimizer operations
pub type Result<T> = std::result::Result<T, OptimizerError>;
