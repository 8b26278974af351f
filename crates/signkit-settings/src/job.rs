//! Panel job files
//!
//! A job describes one product: either a single panel (simple or
//! double-faced) or a segmented set of left / center / right parts.

use crate::error::{SettingsError, SettingsResult};
use crate::format::{read_file, write_file};
use serde::{Deserialize, Serialize};
use signkit_panels::{
    Assembly, Lighting, PanelGenerator, PanelParams, PanelSpec, PanelTopology, ThicknessInput,
};
use std::path::Path;
use tracing::debug;

fn default_drilling() -> bool {
    true
}

/// One panel entry of a job file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelInput {
    pub topology: PanelTopology,
    /// Visible width (mm)
    pub width: f64,
    /// Visible height (mm)
    pub height: f64,
    /// Flange thickness; when absent the depth follows `lighting`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<ThicknessInput>,
    #[serde(default)]
    pub lighting: Lighting,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleat_pitch: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelJob {
    #[serde(default = "default_drilling")]
    pub drilling: bool,
    pub panels: Vec<PanelInput>,
}

impl PanelJob {
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let job: Self = read_file(path)?;
        debug!(
            "Loaded job with {} panel(s) from {}",
            job.panels.len(),
            path.display()
        );
        Ok(job)
    }

    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        write_file(path, self)
    }

    /// Raw parameters for every panel, carrying the job-wide drilling flag.
    pub fn to_params(&self) -> Vec<PanelParams> {
        self.panels
            .iter()
            .map(|p| PanelParams {
                width: p.width,
                height: p.height,
                thickness: p.thickness,
                lighting: p.lighting,
                topology: p.topology,
                drilling: self.drilling,
                cleat_pitch: p.cleat_pitch,
            })
            .collect()
    }

    /// Normalize every panel; the first rejection is reported with its
    /// 1-based index.
    pub fn to_specs(&self, generator: &PanelGenerator) -> SettingsResult<Vec<PanelSpec>> {
        self.to_params()
            .iter()
            .enumerate()
            .map(|(i, params)| {
                generator
                    .normalize(params)
                    .map_err(|source| SettingsError::InvalidPanel {
                        index: i + 1,
                        source,
                    })
            })
            .collect()
    }

    /// Generate every part of the job.
    pub fn generate(&self, generator: &PanelGenerator) -> SettingsResult<Assembly> {
        let specs = self.to_specs(generator)?;
        match specs.as_slice() {
            [] => Err(SettingsError::InvalidJob("job has no panels".to_string())),
            [single] if !single.topology().is_segment() => Ok(generator.generate(single)),
            _ if specs.iter().all(|s| s.topology().is_segment()) => {
                Ok(Assembly::from(generator.generate_set(&specs)?))
            }
            _ => Err(SettingsError::InvalidJob(
                "a job is either one panel or a set of segments".to_string(),
            )),
        }
    }
}
