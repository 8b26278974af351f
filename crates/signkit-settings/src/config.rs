//! Engine configuration
//!
//! Loaded from JSON or TOML (by extension) and stored by default under the
//! platform configuration directory. Sections:
//! - Drilling profiles (single/segmented panels and double-faced panels)
//! - Cleat notch geometry
//! - Sheet layout
//! - Export units

use crate::error::{ConfigError, SettingsError, SettingsResult};
use crate::format::{read_file, write_file};
use serde::{Deserialize, Serialize};
pub use signkit_core::units::OutputUnits;
use signkit_panels::{CleatGeometry, DrillingProfile, EngineSettings, ValidationError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Drilling profiles per product family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillingSettings {
    /// Single and segmented panels
    pub panel: DrillingProfile,
    /// Double-faced panels
    pub double_faced: DrillingProfile,
}

impl Default for DrillingSettings {
    fn default() -> Self {
        Self {
            panel: DrillingProfile::PANEL,
            double_faced: DrillingProfile::DOUBLE_FACED,
        }
    }
}

/// Sheet layout settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Gap between parts on the preview sheet (mm)
    pub part_spacing: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self { part_spacing: 10.0 }
    }
}

/// Export settings
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Units written to export files
    pub units: OutputUnits,
}

/// Complete engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub drilling: DrillingSettings,
    pub cleats: CleatGeometry,
    pub layout: LayoutSettings,
    pub export: ExportSettings,
}

impl EngineConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let config: Self = read_file(path)?;
        config.validate()?;
        debug!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, else the default config file when it exists,
    /// else built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match default_config_path() {
            Ok(path) if path.exists() => Self::load_from_file(&path),
            _ => {
                info!("No engine config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        write_file(path, self)
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.to_engine_settings().validate().map_err(|err| match err {
            ValidationError::InvalidSetting { name, value }
            | ValidationError::SettingTooSmall { name, value, .. } => {
                SettingsError::Config(ConfigError::ValueOutOfRange {
                    key: name.to_string(),
                    value: value.to_string(),
                })
            }
            other => SettingsError::InvalidSet(other),
        })
    }

    /// The values the geometry engine runs with.
    pub fn to_engine_settings(&self) -> EngineSettings {
        EngineSettings {
            panel_drilling: self.drilling.panel,
            double_faced_drilling: self.drilling.double_faced,
            cleats: self.cleats,
            part_spacing: self.layout.part_spacing,
        }
    }
}

/// `<config dir>/signkit/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("signkit").join("config.toml"))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("platform config directory not found".to_string())
        })
}
