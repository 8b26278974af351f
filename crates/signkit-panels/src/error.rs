//! Error types for the panel geometry engine.
//!
//! Every rejection happens in the normalizer, before any geometry is
//! computed. Geometric degeneracies inside a valid panel are clamped instead
//! of reported.

use crate::panel::types::{PanelTopology, Side};
use thiserror::Error;

/// Reasons a panel request is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A visible dimension is zero, negative, NaN or infinite.
    #[error("Panel {name} must be a positive finite number, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    /// A visible dimension exceeds what any sheet could hold.
    #[error("Panel {name} {value} mm exceeds the {max} mm limit")]
    DimensionTooLarge {
        name: &'static str,
        value: f64,
        max: f64,
    },

    /// A flange thickness exceeds the dimension limit.
    #[error("Thickness of the {side} side {value} mm exceeds the {max} mm limit")]
    ThicknessTooLarge { side: Side, value: f64, max: f64 },

    /// A flange thickness is negative, NaN or infinite.
    #[error("Thickness of the {side} side must be a non-negative finite number, got {value}")]
    InvalidThickness { side: Side, value: f64 },

    /// All four thicknesses are zero.
    #[error("At least one side must carry a flange")]
    NoFlange,

    /// A segment is missing the flange that defines it.
    #[error("A {topology} needs a {side} flange thicker than zero")]
    MissingFlange { topology: PanelTopology, side: Side },

    /// A cleat pitch was supplied for a panel without cleat notches.
    #[error("Cleat pitch is only meaningful for double-faced panels, not {0}")]
    PitchNotAllowed(PanelTopology),

    /// The cleat pitch falls outside the seatable range.
    #[error("Cleat pitch {value} out of range (valid: {min}..={max})")]
    PitchOutOfRange { value: f64, min: f64, max: f64 },

    /// Both extremity notches do not fit between the corner reliefs.
    #[error("Panel too short for cleat notches: {available:.1} mm available, {required:.1} mm required")]
    PanelTooShort { available: f64, required: f64 },

    /// A segmented set holds more than one part of a unique kind.
    #[error("A segmented set may contain only one {0}")]
    DuplicateSegment(PanelTopology),

    /// A segmented set holds a part that is not a segment.
    #[error("{0} cannot be part of a segmented set")]
    NotASegment(PanelTopology),

    /// An engine setting is zero, negative or not finite.
    #[error("Setting '{name}' must be a positive finite number, got {value}")]
    InvalidSetting { name: &'static str, value: f64 },

    /// An engine setting is below its smallest usable value.
    #[error("Setting '{name}' must be at least {min}, got {value}")]
    SettingTooSmall {
        name: &'static str,
        value: f64,
        min: f64,
    },
}

/// Defects found by [`crate::validate_contour`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContourError {
    #[error("Contour needs at least 3 vertices, found {0}")]
    TooFewPoints(usize),

    #[error("Contour repeats its first vertex at the end")]
    RepeatedClosingPoint,

    #[error("Edge {index} has zero length")]
    ZeroLengthEdge { index: usize },

    #[error("Edges {first} and {second} intersect")]
    SelfIntersection { first: usize, second: usize },
}

/// Result alias for panel operations.
pub type PanelResult<T> = std::result::Result<T, ValidationError>;

impl From<ValidationError> for signkit_core::Error {
    fn from(err: ValidationError) -> Self {
        signkit_core::Error::Validation(err.to_string())
    }
}

impl From<ContourError> for signkit_core::Error {
    fn from(err: ContourError) -> Self {
        signkit_core::Error::other(format!("Invalid contour: {}", err))
    }
}
