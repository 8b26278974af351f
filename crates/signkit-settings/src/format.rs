//! File format selection by extension.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    /// Pick the format from the file extension (`.json` or `.toml`).
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        if path.extension().is_some_and(|ext| ext == "json") {
            Ok(Self::Json)
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            Ok(Self::Toml)
        } else {
            Err(ConfigError::UnsupportedFormat(path.display().to_string()).into())
        }
    }

    pub fn parse<T: DeserializeOwned>(self, content: &str) -> SettingsResult<T> {
        match self {
            Self::Json => Ok(serde_json::from_str(content)?),
            Self::Toml => Ok(toml::from_str(content)?),
        }
    }

    pub fn render<T: Serialize>(self, value: &T) -> SettingsResult<String> {
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(value)?),
            Self::Toml => Ok(toml::to_string_pretty(value)?),
        }
    }
}

/// Read and parse `path`, choosing the format from its extension.
pub(crate) fn read_file<T: DeserializeOwned>(path: &Path) -> SettingsResult<T> {
    let format = FileFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| SettingsError::LoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    format.parse(&content)
}

/// Serialize `value` and write it to `path`.
pub(crate) fn write_file<T: Serialize>(path: &Path, value: &T) -> SettingsResult<()> {
    let format = FileFormat::from_path(path)?;
    let content = format.render(value)?;
    std::fs::write(path, content).map_err(|e| SettingsError::SaveError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
