//! # SignKit
//!
//! Generates manufacturing geometry for flanged sign-box panels: cutting
//! contours with corner reliefs, fold lines, flange drilling and hanging-cleat
//! notches.
//!
//! ## Architecture
//!
//! SignKit is organized as a workspace with multiple crates:
//!
//! 1. **signkit-core** - Shared point type, units and error type
//! 2. **signkit-panels** - The geometry engine (normalize, generate, validate)
//! 3. **signkit-settings** - Engine configuration and job files (JSON/TOML)
//! 4. **signkit-preview** - Screen-space viewport and SVG rendering
//! 5. **signkit** - Logging setup, JSON export and the command-line tool

pub mod export;

pub use export::{write_preview_svg, ExportDocument, ExportNotch, JsonExportSink};

pub use signkit_core::{Error, OutputUnits, Point, Result};

pub use signkit_panels::{
    generate, generate_set, normalize, validate_contour, ArtifactSink, Assembly, Contour,
    EngineSettings, FoldKind, FoldLine, Lighting, PanelArtifact, PanelGenerator, PanelParams,
    PanelSpec, PanelTopology, PartRole, Side, ThicknessInput, ValidationError,
};

pub use signkit_preview::{PreviewViewport, SvgRenderer};

pub use signkit_settings::{EngineConfig, PanelJob, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_initial_release() {
        assert_eq!(VERSION, "0.1.0");
        assert!(!BUILD_DATE.is_empty());
    }
}
