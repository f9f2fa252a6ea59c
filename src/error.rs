//! Error types for configuration, projection and report rendering

use std::fmt;
use thiserror::Error;

/// Numeric bound a configuration field must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Strictly greater than zero
    Positive,
    /// Zero or greater (and finite)
    NonNegative,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Positive => write!(f, "greater than 0"),
            Bound::NonNegative => write!(f, "a finite value >= 0"),
        }
    }
}

/// Failure of the projection core.
///
/// Raised before any month is computed, so a caller either gets a complete
/// result or nothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("invalid configuration: {field} must be {bound}")]
    InvalidConfiguration { field: String, bound: Bound },
}

impl ProjectionError {
    pub(crate) fn invalid(field: impl Into<String>, bound: Bound) -> Self {
        ProjectionError::InvalidConfiguration { field: field.into(), bound }
    }
}

/// Failure while reading a projection request from disk or text
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed projection request: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure while rendering a projection result
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to flush export buffer: {0}")]
    Io(#[from] std::io::Error),
}
