//! Error handling for SignKit
//!
//! Provides the workspace-wide error type used at crate boundaries:
//! - Validation errors (rejected panel parameters)
//! - Configuration and job-file errors
//! - Export errors raised by artifact sinks
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for SignKit
///
/// Crate-specific errors (panel validation, settings) convert into this
/// type so that binaries can handle every failure through one `Result`.
#[derive(Error, Debug)]
pub enum Error {
    /// Panel parameters were rejected before any geometry was computed
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// A job or configuration file could not be parsed
    #[error("Failed to parse {format}: {message}")]
    Parse {
        /// The file format being parsed (json, toml).
        format: String,
        /// The parser message.
        message: String,
    },

    /// An artifact sink failed to write its output
    #[error("Export failed: {0}")]
    Export(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a parse error for the given format
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Parse {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a configuration or parse error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_) | Error::Parse { .. })
    }
}

/// Result type for SignKit operations
pub type Result<T> = std::result::Result<T, Error>;
