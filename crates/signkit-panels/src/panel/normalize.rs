//! Parameter normalizer: raw user input to a validated [`PanelSpec`].

use super::outline::Outline;
use super::settings::{CleatGeometry, EngineSettings};
use super::types::{
    EdgeThickness, Lighting, PanelParams, PanelSpec, PanelTopology, Side, ThicknessInput,
    MAX_DIMENSION,
};
use crate::error::{PanelResult, ValidationError};
use tracing::{debug, warn};

/// Validate raw parameters and derive the canonical edge thickness.
pub fn normalize(params: &PanelParams, settings: &EngineSettings) -> PanelResult<PanelSpec> {
    check_dimension("width", params.width)?;
    check_dimension("height", params.height)?;

    let thickness = canonical_thickness(params.thickness_input(), params.topology)?;
    if thickness.is_empty() {
        return Err(ValidationError::NoFlange);
    }
    match params.topology {
        PanelTopology::LeftSegment if thickness.left <= 0.0 => {
            return Err(ValidationError::MissingFlange {
                topology: params.topology,
                side: Side::Left,
            });
        }
        PanelTopology::RightSegment if thickness.right <= 0.0 => {
            return Err(ValidationError::MissingFlange {
                topology: params.topology,
                side: Side::Right,
            });
        }
        _ => {}
    }

    let spec = PanelSpec {
        width: params.width,
        height: params.height,
        thickness,
        topology: params.topology,
        drilling: params.drilling,
        cleat_pitch: params.cleat_pitch,
    };
    check_cleats(&spec, &settings.cleats)?;

    if !spec.fits_sheet() {
        warn!(
            "{} unfolds to {:.1} x {:.1} mm, larger than the largest sheet",
            spec.topology,
            spec.final_width(),
            spec.final_height()
        );
    }
    debug!(
        "Normalized {} {}x{} mm with thickness {:?}",
        spec.topology, spec.width, spec.height, spec.thickness
    );
    Ok(spec)
}

fn check_dimension(name: &'static str, value: f64) -> PanelResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidDimension { name, value });
    }
    if value > MAX_DIMENSION {
        return Err(ValidationError::DimensionTooLarge {
            name,
            value,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

fn check_thickness(side: Side, value: f64) -> PanelResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidThickness { side, value });
    }
    if value > MAX_DIMENSION {
        return Err(ValidationError::ThicknessTooLarge {
            side,
            value,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

fn canonical_thickness(
    input: ThicknessInput,
    topology: PanelTopology,
) -> PanelResult<EdgeThickness> {
    let mut thickness = match input {
        ThicknessInput::Uniform(depth) => {
            check_thickness(Side::Top, depth)?;
            let mut t = EdgeThickness::uniform(depth);
            for side in [Side::Left, Side::Right] {
                if !topology.has_flange(side) {
                    t.set(side, 0.0);
                }
            }
            return Ok(t);
        }
        ThicknessInput::PerEdge {
            top,
            bottom,
            left,
            right,
        } => EdgeThickness::new(top, bottom, left, right),
    };

    for side in Side::ALL {
        let value = thickness.get(side);
        check_thickness(side, value)?;
        if value != 0.0 && !topology.has_flange(side) {
            warn!(
                "Ignoring {} mm thickness on the {} side of a {}",
                value, side, topology
            );
            thickness.set(side, 0.0);
        }
    }
    Ok(thickness)
}

fn check_cleats(spec: &PanelSpec, cleats: &CleatGeometry) -> PanelResult<()> {
    match (spec.topology, spec.cleat_pitch) {
        (PanelTopology::DoubleFaced, Some(pitch)) => {
            let min = cleats.min_pitch();
            let max = cleats.max_pitch(spec.height);
            if !pitch.is_finite() || pitch < min || pitch > max {
                return Err(ValidationError::PitchOutOfRange {
                    value: pitch,
                    min,
                    max,
                });
            }
            Ok(())
        }
        (PanelTopology::DoubleFaced, None) => {
            let outline = Outline::new(spec);
            let span = (outline.top - outline.relief(Side::Top))
                - (outline.bottom + outline.relief(Side::Bottom));
            let available = span - 2.0 * cleats.extremity_margin;
            let required = 2.0 * cleats.height;
            if available <= required {
                return Err(ValidationError::PanelTooShort {
                    available,
                    required,
                });
            }
            Ok(())
        }
        (topology, Some(_)) => Err(ValidationError::PitchNotAllowed(topology)),
        (_, None) => Ok(()),
    }
}

impl PanelSpec {
    /// Normalize with the built-in engine settings.
    pub fn new(params: PanelParams) -> PanelResult<Self> {
        normalize(&params, &EngineSettings::default())
    }

    /// Double-faced spec from the total box depth, split equally between the
    /// two faces.
    pub fn double_faced_from_total_depth(
        width: f64,
        height: f64,
        total_depth: f64,
        cleat_pitch: Option<f64>,
    ) -> PanelResult<Self> {
        Self::new(PanelParams {
            width,
            height,
            thickness: Some(ThicknessInput::Uniform(total_depth / 2.0)),
            lighting: Lighting::default(),
            topology: PanelTopology::DoubleFaced,
            drilling: true,
            cleat_pitch,
        })
    }
}

impl TryFrom<PanelParams> for PanelSpec {
    type Error = ValidationError;

    fn try_from(params: PanelParams) -> PanelResult<Self> {
        Self::new(params)
    }
}
