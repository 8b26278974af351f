//! Contour builder
//!
//! Traces the final outline clockwise from the top-left, cutting a
//! rectangular relief notch into every eligible corner and the cleat notches
//! into the right edge of a double-faced recto.

use super::cleats::plan_cleat_notches;
use super::outline::Outline;
use super::settings::EngineSettings;
use super::types::{rotate_to_top_left, CleatNotch, Contour, Corner, PanelSpec, Side};
use signkit_core::point::GEOMETRY_EPSILON;
use signkit_core::Point;

/// Build the cutting contour of a single, segment or recto part.
pub fn build_contour(spec: &PanelSpec, settings: &EngineSettings) -> Contour {
    let notches = plan_cleat_notches(spec, settings);
    contour_for(&Outline::new(spec), &notches)
}

pub(crate) fn contour_for(outline: &Outline, notches: &[CleatNotch]) -> Contour {
    let (l, r, t, b) = (outline.left, outline.right, outline.top, outline.bottom);
    let mut points = Vec::with_capacity(16 + 4 * notches.len());

    let (w, _) = outline.corner_notch(Corner::TopLeft);
    points.push(Point::new(l + w, t));

    let (w, h) = outline.corner_notch(Corner::TopRight);
    points.extend([
        Point::new(r - w, t),
        Point::new(r - w, t - h),
        Point::new(r, t - h),
    ]);

    for notch in notches.iter().filter(|n| n.side == Side::Right) {
        points.extend([
            Point::new(r, notch.top),
            Point::new(r - notch.depth, notch.top),
            Point::new(r - notch.depth, notch.bottom),
            Point::new(r, notch.bottom),
        ]);
    }

    let (w, h) = outline.corner_notch(Corner::BottomRight);
    points.extend([
        Point::new(r, b + h),
        Point::new(r - w, b + h),
        Point::new(r - w, b),
    ]);

    let (w, h) = outline.corner_notch(Corner::BottomLeft);
    points.extend([
        Point::new(l + w, b),
        Point::new(l + w, b + h),
        Point::new(l, b + h),
    ]);

    let (w, h) = outline.corner_notch(Corner::TopLeft);
    points.extend([Point::new(l, t - h), Point::new(l + w, t - h)]);

    simplify(&mut points);
    rotate_to_top_left(&mut points);
    Contour::new(points)
}

/// Drops repeated and collinear vertices until none are left. This also
/// removes zero-area spikes left by clamped notches.
fn simplify(points: &mut Vec<Point>) {
    while points.len() > 3 {
        let n = points.len();
        let redundant = (0..n).find(|&i| {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            cur.approx_eq(&next) || is_collinear(prev, cur, next)
        });
        match redundant {
            Some(i) => {
                points.remove(i);
            }
            None => break,
        }
    }
}

fn is_collinear(a: Point, b: Point, c: Point) -> bool {
    let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
    cross.abs() < GEOMETRY_EPSILON
}
