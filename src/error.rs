//! Error types for configuration and benchmark runs.

use std::path::PathBuf;
use thiserror::Error;

use crate::algorithms::Algorithm;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid field value.
    #[error("invalid value for field '{field}': {message}")]
    InvalidValue {
        /// Name of the field.
        field: &'static str,
        /// Error message.
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

/// Errors raised while running the benchmark or writing its report.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A finder did not return the injected majority value.
    #[error("{algorithm} returned {found:?} at size {size}, expected Some({expected})")]
    Disagreement {
        size: usize,
        algorithm: Algorithm,
        expected: i32,
        found: Option<i32>,
    },

    /// Failed to write the report file.
    #[error("failed to write report '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize chart series: {0}")]
    Serialize(#[from] serde_json::Error),
}
