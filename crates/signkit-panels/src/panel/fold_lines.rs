//! Fold-line builder
//!
//! Every flanged side gets a primary fold on the visible-face boundary.
//! Sides with a relief also get an inset fold on the relief boundary, clipped
//! so it ends where the adjacent corner notch begins.

use super::outline::Outline;
use super::settings::EngineSettings;
use super::types::{Corner, FoldKind, FoldLine, PanelSpec, PanelTopology, Side};
use signkit_core::point::GEOMETRY_EPSILON;
use signkit_core::Point;

pub fn build_fold_lines(spec: &PanelSpec, settings: &EngineSettings) -> Vec<FoldLine> {
    let outline = Outline::new(spec);
    // Horizontal primaries stop short of the cleat-notched edge.
    let notch_stop = match spec.topology() {
        PanelTopology::DoubleFaced => settings.cleats.depth.min(outline.width() / 2.0),
        PanelTopology::Simple
        | PanelTopology::LeftSegment
        | PanelTopology::CenterSegment
        | PanelTopology::RightSegment => 0.0,
    };
    fold_lines_for(&outline, notch_stop)
}

pub(crate) fn fold_lines_for(outline: &Outline, notch_stop: f64) -> Vec<FoldLine> {
    let mut lines = Vec::with_capacity(8);

    for side in Side::ALL {
        let thickness = outline.thickness.get(side);
        if thickness <= 0.0 {
            continue;
        }

        let primary = outline.inward(side, thickness);
        let line = if side.is_horizontal() {
            horizontal(primary, outline.left, outline.right - notch_stop, side, FoldKind::Primary)
        } else {
            vertical(primary, outline.bottom, outline.top, side, FoldKind::Primary)
        };
        lines.extend(line);

        let relief = outline.relief(side);
        if relief <= 0.0 {
            continue;
        }
        let inset = outline.inward(side, relief);
        let line = match side {
            Side::Top | Side::Bottom => {
                let (left_corner, right_corner) = if side == Side::Top {
                    (Corner::TopLeft, Corner::TopRight)
                } else {
                    (Corner::BottomLeft, Corner::BottomRight)
                };
                horizontal(
                    inset,
                    outline.left + outline.corner_notch(left_corner).0,
                    outline.right - outline.corner_notch(right_corner).0,
                    side,
                    FoldKind::Inset,
                )
            }
            Side::Left | Side::Right => {
                let (top_corner, bottom_corner) = if side == Side::Left {
                    (Corner::TopLeft, Corner::BottomLeft)
                } else {
                    (Corner::TopRight, Corner::BottomRight)
                };
                vertical(
                    inset,
                    outline.bottom + outline.corner_notch(bottom_corner).1,
                    outline.top - outline.corner_notch(top_corner).1,
                    side,
                    FoldKind::Inset,
                )
            }
        };
        lines.extend(line);
    }

    lines
}

fn horizontal(y: f64, x0: f64, x1: f64, side: Side, kind: FoldKind) -> Option<FoldLine> {
    (x1 - x0 > GEOMETRY_EPSILON)
        .then(|| FoldLine::new(Point::new(x0, y), Point::new(x1, y), kind, side))
}

fn vertical(x: f64, y0: f64, y1: f64, side: Side, kind: FoldKind) -> Option<FoldLine> {
    (y1 - y0 > GEOMETRY_EPSILON)
        .then(|| FoldLine::new(Point::new(x, y0), Point::new(x, y1), kind, side))
}
