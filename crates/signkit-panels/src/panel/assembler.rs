//! Geometry assembler
//!
//! Runs the builders for one spec and groups the resulting parts into an
//! [`Assembly`] that consumers lay out or drain through an [`ArtifactSink`].

use super::cleats::plan_cleat_notches;
use super::contour::contour_for;
use super::drilling::holes_for;
use super::fold_lines::build_fold_lines;
use super::normalize::normalize;
use super::outline::Outline;
use super::settings::EngineSettings;
use super::sink::ArtifactSink;
use super::types::{PanelArtifact, PanelParams, PanelSpec, PanelTopology, PartRole};
use super::validate::validate_contour;
use crate::error::{PanelResult, ValidationError};
use tracing::debug;

/// Runs the panel pipeline with one set of engine settings.
#[derive(Debug, Clone, Default)]
pub struct PanelGenerator {
    settings: EngineSettings,
}

impl PanelGenerator {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Normalize raw parameters against this generator's cleat geometry.
    pub fn normalize(&self, params: &PanelParams) -> PanelResult<PanelSpec> {
        normalize(params, &self.settings)
    }

    /// Generate every physical part of `spec`: one for single and segment
    /// panels, recto and verso for double-faced panels.
    pub fn generate(&self, spec: &PanelSpec) -> Assembly {
        let parts = match spec.topology() {
            PanelTopology::Simple => vec![self.build_part(spec, PartRole::Single)],
            PanelTopology::LeftSegment => vec![self.build_part(spec, PartRole::Left)],
            PanelTopology::CenterSegment => vec![self.build_part(spec, PartRole::Center(1))],
            PanelTopology::RightSegment => vec![self.build_part(spec, PartRole::Right)],
            PanelTopology::DoubleFaced => {
                let recto = self.build_part(spec, PartRole::Recto);
                let verso = recto.mirrored(PartRole::Verso);
                vec![recto, verso]
            }
        };
        debug!("Generated {} part(s) for {}", parts.len(), spec.topology());
        Assembly::new(parts)
    }

    /// Generate a segmented set. Parts keep their input order; center
    /// segments are numbered from 1 in that order.
    pub fn generate_set(&self, specs: &[PanelSpec]) -> PanelResult<Vec<PanelArtifact>> {
        let mut lefts = 0;
        let mut rights = 0;
        for spec in specs {
            match spec.topology() {
                PanelTopology::LeftSegment => lefts += 1,
                PanelTopology::RightSegment => rights += 1,
                PanelTopology::CenterSegment => {}
                other @ (PanelTopology::Simple | PanelTopology::DoubleFaced) => {
                    return Err(ValidationError::NotASegment(other));
                }
            }
        }
        if lefts > 1 {
            return Err(ValidationError::DuplicateSegment(PanelTopology::LeftSegment));
        }
        if rights > 1 {
            return Err(ValidationError::DuplicateSegment(PanelTopology::RightSegment));
        }

        let mut center_index = 0;
        let parts = specs
            .iter()
            .map(|spec| {
                let role = match spec.topology() {
                    PanelTopology::LeftSegment => PartRole::Left,
                    PanelTopology::RightSegment => PartRole::Right,
                    _ => {
                        center_index += 1;
                        PartRole::Center(center_index)
                    }
                };
                self.build_part(spec, role)
            })
            .collect::<Vec<_>>();
        debug!("Generated segmented set of {} part(s)", parts.len());
        Ok(parts)
    }

    fn build_part(&self, spec: &PanelSpec, role: PartRole) -> PanelArtifact {
        let outline = Outline::new(spec);
        let notches = plan_cleat_notches(spec, &self.settings);

        let contour = contour_for(&outline, &notches);
        debug_assert!(
            validate_contour(&contour).is_ok(),
            "invalid contour for {:?}",
            role
        );

        let fold_lines = build_fold_lines(spec, &self.settings);

        let holes = if spec.drilling() {
            holes_for(&outline, self.settings.drilling_for(spec.topology()), &notches)
        } else {
            Vec::new()
        };

        PanelArtifact {
            role,
            final_width: spec.final_width(),
            final_height: spec.final_height(),
            contour,
            fold_lines,
            holes,
            notches,
        }
    }
}

/// Generate with the built-in settings.
pub fn generate(spec: &PanelSpec) -> Assembly {
    PanelGenerator::default().generate(spec)
}

/// Generate a segmented set with the built-in settings.
pub fn generate_set(specs: &[PanelSpec]) -> PanelResult<Vec<PanelArtifact>> {
    PanelGenerator::default().generate_set(specs)
}

/// The physical parts produced for one request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Assembly {
    parts: Vec<PanelArtifact>,
}

impl Assembly {
    pub fn new(parts: Vec<PanelArtifact>) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> &[PanelArtifact] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<PanelArtifact> {
        self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Copies of the parts placed left to right on one sheet with `spacing`
    /// between outlines. The first outline starts at x = 0; all parts are
    /// centred on y = 0.
    pub fn layout(&self, spacing: f64) -> Vec<PanelArtifact> {
        let mut cursor = LayoutCursor::new(spacing);
        self.parts
            .iter()
            .map(|part| {
                let x = cursor.place(part.final_width);
                part.translated(x + part.final_width / 2.0, 0.0)
            })
            .collect()
    }

    /// Hand every part to `sink` under its canonical file stem.
    pub fn emit<S: ArtifactSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        for part in &self.parts {
            sink.accept(&part.role.file_stem(), part)?;
        }
        Ok(())
    }
}

impl From<Vec<PanelArtifact>> for Assembly {
    fn from(parts: Vec<PanelArtifact>) -> Self {
        Self::new(parts)
    }
}

struct LayoutCursor {
    x: f64,
    spacing: f64,
}

impl LayoutCursor {
    fn new(spacing: f64) -> Self {
        Self { x: 0.0, spacing }
    }

    fn place(&mut self, width: f64) -> f64 {
        let position = self.x;
        self.x += width + self.spacing;
        position
    }
}
