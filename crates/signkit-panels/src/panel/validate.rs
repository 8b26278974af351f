//! Contour validation: closure, edge lengths and simplicity.

use super::types::Contour;
use crate::error::ContourError;
use signkit_core::point::GEOMETRY_EPSILON;
use signkit_core::Point;

/// Check that `contour` is a closed simple polygon and return its signed
/// area (negative for clockwise).
pub fn validate_contour(contour: &Contour) -> Result<f64, ContourError> {
    let points = contour.points();
    let n = points.len();
    if n < 3 {
        return Err(ContourError::TooFewPoints(n));
    }
    if points[0].approx_eq(&points[n - 1]) {
        return Err(ContourError::RepeatedClosingPoint);
    }

    let edges: Vec<(Point, Point)> = contour.edges().collect();
    if let Some(index) = edges
        .iter()
        .position(|(a, b)| a.distance_to(b) < GEOMETRY_EPSILON)
    {
        return Err(ContourError::ZeroLengthEdge { index });
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = edges[i];
            let (c, d) = edges[j];
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            let hit = if adjacent {
                // Shared vertex is expected; only a fold-back overlap counts.
                let (p, q, r) = if j == i + 1 { (a, b, d) } else { (c, d, b) };
                folds_back(p, q, r)
            } else {
                segments_intersect(a, b, c, d)
            };
            if hit {
                return Err(ContourError::SelfIntersection {
                    first: i,
                    second: j,
                });
            }
        }
    }

    Ok(contour.signed_area())
}

fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn sign(value: f64) -> i8 {
    if value > GEOMETRY_EPSILON {
        1
    } else if value < -GEOMETRY_EPSILON {
        -1
    } else {
        0
    }
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) - GEOMETRY_EPSILON
        && p.x <= a.x.max(b.x) + GEOMETRY_EPSILON
        && p.y >= a.y.min(b.y) - GEOMETRY_EPSILON
        && p.y <= a.y.max(b.y) + GEOMETRY_EPSILON
}

/// Path `p -> q -> r` doubles back on itself.
fn folds_back(p: Point, q: Point, r: Point) -> bool {
    let dot = (q.x - p.x) * (r.x - q.x) + (q.y - p.y) * (r.y - q.y);
    sign(orientation(p, q, r)) == 0 && dot < 0.0
}

/// Proper or touching intersection of segments `p1p2` and `q1q2`.
pub(crate) fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let d1 = sign(orientation(q1, q2, p1));
    let d2 = sign(orientation(q1, q2, p2));
    let d3 = sign(orientation(p1, p2, q1));
    let d4 = sign(orientation(p1, p2, q2));

    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }
    (d1 == 0 && on_segment(q1, q2, p1))
        || (d2 == 0 && on_segment(q1, q2, p2))
        || (d3 == 0 && on_segment(p1, p2, q1))
        || (d4 == 0 && on_segment(p1, p2, q2))
}
