//! Flanged panel generation
//!
//! Pipeline: [`normalize`] raw parameters into a [`PanelSpec`], then
//! [`generate`] builds contour, fold lines, cleat notches and drill holes for
//! every physical part. All coordinates are millimetres, centred on the final
//! outline, y up.

pub mod assembler;
pub mod cleats;
pub mod contour;
pub mod drilling;
pub mod fold_lines;
pub mod naming;
pub mod normalize;
mod outline;
pub mod settings;
pub mod sink;
pub mod types;
pub mod validate;

pub use assembler::{generate, generate_set, Assembly, PanelGenerator};
pub use cleats::plan_cleat_notches;
pub use contour::build_contour;
pub use drilling::{hole_positions, plan_drill_holes};
pub use fold_lines::build_fold_lines;
pub use naming::part_file_stem;
pub use normalize::normalize;
pub use settings::{CleatGeometry, DrillingProfile, EngineSettings};
pub use sink::{ArtifactSink, MemorySink};
pub use types::{
    CleatNotch, Contour, Corner, DrillHole, EdgeThickness, FoldKind, FoldLine, Lighting,
    PanelArtifact, PanelParams, PanelSpec, PanelTopology, PartRole, Side, ThicknessInput,
};
pub use validate::validate_contour;
