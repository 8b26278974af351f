//! Drill-hole planner
//!
//! Holes run along each flange on a line `edge_margin` inside the outer edge.
//! The usable stretch of a flange starts after the corner relief plus the
//! corner clearance; on a cleat-notched flange it is the gap between the two
//! notches instead.

use super::cleats::plan_cleat_notches;
use super::outline::Outline;
use super::settings::{DrillingProfile, EngineSettings};
use super::types::{CleatNotch, Corner, DrillHole, PanelSpec, Side};
use signkit_core::Point;

/// Evenly spaced positions over `[start, end]` with no gap above
/// `max_spacing`. Both ends carry a hole; an empty interval yields none.
pub fn hole_positions(start: f64, end: f64, max_spacing: f64) -> Vec<f64> {
    let length = end - start;
    if length.is_nan() || length <= 0.0 || max_spacing.is_nan() || max_spacing <= 0.0 {
        return Vec::new();
    }
    let segments = (length / max_spacing).ceil().max(1.0) as usize;
    let spacing = length / segments as f64;
    (0..=segments).map(|i| start + i as f64 * spacing).collect()
}

/// Plan the drill holes of a single, segment or recto part.
pub fn plan_drill_holes(spec: &PanelSpec, settings: &EngineSettings) -> Vec<DrillHole> {
    if !spec.drilling() {
        return Vec::new();
    }
    let notches = plan_cleat_notches(spec, settings);
    holes_for(
        &Outline::new(spec),
        settings.drilling_for(spec.topology()),
        &notches,
    )
}

pub(crate) fn holes_for(
    outline: &Outline,
    profile: &DrillingProfile,
    notches: &[CleatNotch],
) -> Vec<DrillHole> {
    let mut holes = Vec::new();

    for side in Side::ALL {
        if outline.thickness.get(side) <= 0.0 {
            continue;
        }
        let line = outline.inward(side, profile.edge_margin);
        let (start, end) = usable_interval(outline, side, profile.corner_clearance, notches);

        holes.extend(
            hole_positions(start, end, profile.max_spacing)
                .into_iter()
                .map(|along| DrillHole {
                    center: if side.is_horizontal() {
                        Point::new(along, line)
                    } else {
                        Point::new(line, along)
                    },
                    radius: profile.hole_radius,
                    side,
                }),
        );
    }

    holes
}

fn usable_interval(
    outline: &Outline,
    side: Side,
    clearance: f64,
    notches: &[CleatNotch],
) -> (f64, f64) {
    let on_side: Vec<&CleatNotch> = notches.iter().filter(|n| n.side == side).collect();
    if let [first, second] = on_side.as_slice() {
        let (upper, lower) = if first.top >= second.top {
            (first, second)
        } else {
            (second, first)
        };
        return (lower.top + clearance, upper.bottom - clearance);
    }

    match side {
        Side::Top | Side::Bottom => {
            let (left_corner, right_corner) = if side == Side::Top {
                (Corner::TopLeft, Corner::TopRight)
            } else {
                (Corner::BottomLeft, Corner::BottomRight)
            };
            (
                outline.left + outline.corner_notch(left_corner).0 + clearance,
                outline.right - outline.corner_notch(right_corner).0 - clearance,
            )
        }
        Side::Left | Side::Right => {
            let (top_corner, bottom_corner) = if side == Side::Left {
                (Corner::TopLeft, Corner::BottomLeft)
            } else {
                (Corner::TopRight, Corner::BottomRight)
            };
            (
                outline.bottom + outline.corner_notch(bottom_corner).1 + clearance,
                outline.top - outline.corner_notch(top_corner).1 - clearance,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::types::{PanelParams, PanelTopology};

    #[test]
    fn test_hole_positions() {
        assert_eq!(hole_positions(0.0, 800.0, 750.0), vec![0.0, 400.0, 800.0]);
        assert_eq!(hole_positions(10.0, 760.0, 750.0), vec![10.0, 760.0]);
        assert_eq!(hole_positions(0.0, 1.0, 750.0), vec![0.0, 1.0]);
        assert!(hole_positions(5.0, 5.0, 750.0).is_empty());
        assert!(hole_positions(5.0, -5.0, 750.0).is_empty());
    }

    #[test]
    fn test_simple_panel_holes() {
        let spec = PanelSpec::new(PanelParams::default()).unwrap();
        let holes = plan_drill_holes(&spec, &EngineSettings::default());

        let top: Vec<f64> = holes
            .iter()
            .filter(|h| h.side == Side::Top)
            .map(|h| h.center.x)
            .collect();
        assert_eq!(top, vec![-451.0, 0.0, 451.0]);
        assert!(holes
            .iter()
            .filter(|h| h.side == Side::Top)
            .all(|h| h.center.y == 295.0));

        let left: Vec<Point> = holes
            .iter()
            .filter(|h| h.side == Side::Left)
            .map(|h| h.center)
            .collect();
        assert_eq!(left, vec![Point::new(-545.0, -201.0), Point::new(-545.0, 201.0)]);
        assert_eq!(holes.len(), 10);
        assert!(holes.iter().all(|h| h.radius == 1.5));
    }

    #[test]
    fn test_drilling_disabled() {
        let spec = PanelSpec::new(PanelParams {
            drilling: false,
            ..PanelParams::default()
        })
        .unwrap();
        assert!(plan_drill_holes(&spec, &EngineSettings::default()).is_empty());
    }

    #[test]
    fn test_segment_holes_skip_open_side() {
        let spec = PanelSpec::new(PanelParams {
            topology: PanelTopology::RightSegment,
            ..PanelParams::default()
        })
        .unwrap();
        let holes = plan_drill_holes(&spec, &EngineSettings::default());
        assert!(holes.iter().all(|h| h.side != Side::Left));
        // Final width 1070: relief only on the right end
        let top: Vec<f64> = holes
            .iter()
            .filter(|h| h.side == Side::Top)
            .map(|h| h.center.x)
            .collect();
        assert_eq!(top.first(), Some(&-485.0));
        assert_eq!(top.last(), Some(&416.0));
    }

    #[test]
    fn test_notched_flange_uses_gap() {
        let spec = PanelSpec::double_faced_from_total_depth(1000.0, 800.0, 70.0, None).unwrap();
        let holes = plan_drill_holes(&spec, &EngineSettings::default());
        let right: Vec<Point> = holes
            .iter()
            .filter(|h| h.side == Side::Right)
            .map(|h| h.center)
            .collect();
        assert_eq!(right, vec![Point::new(525.0, -307.0), Point::new(525.0, 307.0)]);

        let left: Vec<Point> = holes
            .iter()
            .filter(|h| h.side == Side::Left)
            .map(|h| h.center)
            .collect();
        // Relief 34 and clearance 50 from each end of an 870 mm edge
        assert_eq!(left, vec![Point::new(-525.0, -351.0), Point::new(-525.0, 351.0)]);
    }
}
