//! # SignKit Panels
//!
//! Parametric geometry engine for flanged sign-box panels.
//!
//! Given visible dimensions, per-edge flange thickness and a part topology,
//! the engine deterministically produces:
//!
//! - **Contour**: closed clockwise cutting outline with corner relief notches
//! - **Fold lines**: primary folds on the visible face, inset folds on the relief boundary
//! - **Drill holes**: evenly spaced along each flange, bounded by a maximum spacing
//! - **Cleat notches**: hanging-cleat cut-outs for double-faced panels
//!
//! Topologies: single panel, left / center / right segments of a segmented
//! set, and mirrored recto / verso faces of a double-faced panel.
//!
//! The engine is pure and performs no I/O. Consumers receive artifacts
//! through [`ArtifactSink`].

pub mod error;
pub mod panel;

pub use error::{ContourError, PanelResult, ValidationError};
pub use panel::{
    build_contour, build_fold_lines, generate, generate_set, hole_positions, normalize,
    part_file_stem, plan_cleat_notches, plan_drill_holes, validate_contour, ArtifactSink,
    Assembly, CleatGeometry, CleatNotch, Contour, Corner, DrillHole, DrillingProfile,
    EdgeThickness, EngineSettings, FoldKind, FoldLine, Lighting, MemorySink, PanelArtifact,
    PanelGenerator, PanelParams, PanelSpec, PanelTopology, PartRole, Side, ThicknessInput,
};
