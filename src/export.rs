//! Manufacturing-file export
//!
//! [`JsonExportSink`] writes one `<file_stem>.json` per part with three
//! layers: `cut` (contour), `fold` (fold lines) and `drill` (holes).
//! Double-faced parts also list their cleat notches. Coordinates are
//! millimetres or PostScript points, per [`OutputUnits`].

use serde::Serialize;
use signkit_core::{Error, OutputUnits, Point, Result};
use signkit_panels::{ArtifactSink, FoldKind, PanelArtifact, PartRole, Side};
use signkit_preview::SvgRenderer;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Serialized form of one part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDocument {
    pub name: String,
    pub role: PartRole,
    pub units: OutputUnits,
    pub width: f64,
    pub height: f64,
    pub layers: ExportLayers,
    /// Empty except on double-faced parts.
    pub notches: Vec<ExportNotch>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportLayers {
    pub cut: Vec<[f64; 2]>,
    pub fold: Vec<ExportFold>,
    pub drill: Vec<ExportHole>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExportFold {
    pub kind: FoldKind,
    pub side: Side,
    pub start: [f64; 2],
    pub end: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExportHole {
    pub side: Side,
    pub center: [f64; 2],
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExportNotch {
    pub side: Side,
    pub top: f64,
    pub bottom: f64,
    pub depth: f64,
}

impl ExportDocument {
    pub fn from_artifact(name: &str, artifact: &PanelArtifact, units: OutputUnits) -> Self {
        let scale = units.scale_from_mm();
        let xy = |p: &Point| [p.x * scale, p.y * scale];

        Self {
            name: name.to_string(),
            role: artifact.role,
            units,
            width: artifact.final_width * scale,
            height: artifact.final_height * scale,
            layers: ExportLayers {
                cut: artifact.contour.points().iter().map(xy).collect(),
                fold: artifact
                    .fold_lines
                    .iter()
                    .map(|fold| ExportFold {
                        kind: fold.kind,
                        side: fold.side,
                        start: xy(&fold.start),
                        end: xy(&fold.end),
                    })
                    .collect(),
                drill: artifact
                    .holes
                    .iter()
                    .map(|hole| ExportHole {
                        side: hole.side,
                        center: xy(&hole.center),
                        radius: hole.radius * scale,
                    })
                    .collect(),
            },
            notches: artifact
                .notches
                .iter()
                .map(|notch| ExportNotch {
                    side: notch.side,
                    top: notch.top * scale,
                    bottom: notch.bottom * scale,
                    depth: notch.depth * scale,
                })
                .collect(),
        }
    }
}

/// Writes accepted parts as JSON files into a directory.
#[derive(Debug, Clone)]
pub struct JsonExportSink {
    output_dir: PathBuf,
    units: OutputUnits,
    written: Vec<PathBuf>,
}

impl JsonExportSink {
    /// Creates `output_dir` when missing.
    pub fn new(output_dir: impl Into<PathBuf>, units: OutputUnits) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir,
            units,
            written: Vec::new(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ArtifactSink for JsonExportSink {
    type Error = Error;

    fn accept(&mut self, name: &str, artifact: &PanelArtifact) -> Result<()> {
        let path = self.output_dir.join(format!("{name}.json"));
        let document = ExportDocument::from_artifact(name, artifact, self.units);
        let content = serde_json::to_string_pretty(&document)?;
        std::fs::write(&path, content)
            .map_err(|e| Error::Export(format!("{}: {}", path.display(), e)))?;

        debug!(
            "Exported {} ({} contour points, {} folds, {} holes, {} notches)",
            path.display(),
            document.layers.cut.len(),
            document.layers.fold.len(),
            document.layers.drill.len(),
            document.notches.len()
        );
        self.written.push(path);
        Ok(())
    }
}

/// Render a laid-out sheet to an SVG file.
pub fn write_preview_svg(path: &Path, sheet: &[PanelArtifact]) -> Result<()> {
    let svg = SvgRenderer::default().render(sheet);
    std::fs::write(path, svg).map_err(|e| Error::Export(format!("{}: {}", path.display(), e)))?;
    info!("Preview written to {}", path.display());
    Ok(())
}
