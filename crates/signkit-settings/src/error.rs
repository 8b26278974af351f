//! Error types for the settings crate.
//!
//! This module provides structured error types for configuration files and
//! panel job files.

use signkit_panels::ValidationError;
use std::io;
use thiserror::Error;

/// Errors that can occur while loading or saving settings and jobs.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The file could not be loaded.
    #[error("Failed to load {path}: {reason}")]
    LoadError { path: String, reason: String },

    /// The file could not be saved.
    #[error("Failed to save {path}: {reason}")]
    SaveError { path: String, reason: String },

    /// The configuration directory could not be resolved.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// A panel in a job file was rejected by the normalizer.
    #[error("Panel #{index} rejected: {source}")]
    InvalidPanel {
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// A job mixes parts that cannot be produced together.
    #[error("Invalid job: {0}")]
    InvalidJob(String),

    /// The generated parts were rejected as a set.
    #[error("Panel set rejected: {0}")]
    InvalidSet(#[from] ValidationError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// A configuration validation error occurred.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to configuration validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A configuration value is out of valid range.
    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<SettingsError> for signkit_core::Error {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::IoError(e) => signkit_core::Error::Io(e),
            SettingsError::JsonError(e) => signkit_core::Error::Json(e),
            SettingsError::TomlError(e) => signkit_core::Error::parse("toml", e.to_string()),
            SettingsError::InvalidPanel { .. } | SettingsError::InvalidSet(_) => {
                signkit_core::Error::Validation(err.to_string())
            }
            other => signkit_core::Error::Config(other.to_string()),
        }
    }
}
