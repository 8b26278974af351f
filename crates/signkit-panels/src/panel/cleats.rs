//! Cleat-notch planner for double-faced panels.
//!
//! Notches are planned on the right edge of the recto face. The verso face
//! gets them by mirroring.

use super::outline::Outline;
use super::settings::{CleatGeometry, EngineSettings};
use super::types::{CleatNotch, PanelSpec, PanelTopology, Side};
use signkit_core::point::GEOMETRY_EPSILON;

/// Plan the two hanging-cleat notches of the recto face, upper notch first.
/// Returns an empty list for every other topology.
pub fn plan_cleat_notches(spec: &PanelSpec, settings: &EngineSettings) -> Vec<CleatNotch> {
    match spec.topology() {
        PanelTopology::DoubleFaced => notches_for(&Outline::new(spec), spec, &settings.cleats),
        PanelTopology::Simple
        | PanelTopology::LeftSegment
        | PanelTopology::CenterSegment
        | PanelTopology::RightSegment => Vec::new(),
    }
}

fn notches_for(outline: &Outline, spec: &PanelSpec, cleats: &CleatGeometry) -> Vec<CleatNotch> {
    let upper_limit = outline.top - outline.relief(Side::Top);
    let lower_limit = outline.bottom + outline.relief(Side::Bottom);
    let depth = cleats.depth.min(outline.width() / 2.0);

    let spans = match spec.cleat_pitch() {
        None => {
            let upper_top = upper_limit - cleats.extremity_margin;
            let lower_bottom = lower_limit + cleats.extremity_margin;
            [
                (upper_top, upper_top - cleats.height),
                (lower_bottom + cleats.height, lower_bottom),
            ]
        }
        Some(pitch) => {
            let t = outline.thickness;
            let mid = (outline.top - t.top + outline.bottom + t.bottom) / 2.0;
            let half = cleats.height / 2.0;
            [
                (mid + pitch / 2.0 + half, mid + pitch / 2.0 - half),
                (mid - pitch / 2.0 + half, mid - pitch / 2.0 - half),
            ]
        }
    };

    spans
        .into_iter()
        .filter_map(|(top, bottom)| {
            let top = top.min(upper_limit);
            let bottom = bottom.max(lower_limit);
            (top - bottom > GEOMETRY_EPSILON).then_some(CleatNotch {
                side: Side::Right,
                top,
                bottom,
                depth,
            })
        })
        .collect()
}
