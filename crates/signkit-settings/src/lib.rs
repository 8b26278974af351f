//! SignKit Settings Crate
//!
//! Handles engine configuration and panel job files. Both are read from
//! JSON or TOML, chosen by file extension.

pub mod config;
pub mod error;
pub mod format;
pub mod job;

pub use config::{
    default_config_path, DrillingSettings, EngineConfig, ExportSettings, LayoutSettings,
    OutputUnits,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use format::FileFormat;
pub use job::{PanelInput, PanelJob};
