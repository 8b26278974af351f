//! Outline frame shared by all builders.
//!
//! Centred coordinates with y up: the final outline spans
//! `[left, right] x [bottom, top]`. Relief lengths are clamped once here so
//! that contour, fold lines and drilling agree on every boundary.

use super::types::{Corner, EdgeThickness, PanelSpec, PanelTopology, Side};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Outline {
    pub topology: PanelTopology,
    pub thickness: EdgeThickness,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    reliefs: EdgeThickness,
}

impl Outline {
    pub fn new(spec: &PanelSpec) -> Self {
        let half_w = spec.final_width() / 2.0;
        let half_h = spec.final_height() / 2.0;
        let thickness = *spec.thickness();

        // Left/right reliefs are cut along the top and bottom edges, and
        // top/bottom reliefs along the vertical edges.
        let reliefs = EdgeThickness::new(
            thickness.relief(Side::Top).min(half_h),
            thickness.relief(Side::Bottom).min(half_h),
            thickness.relief(Side::Left).min(half_w),
            thickness.relief(Side::Right).min(half_w),
        );

        Self {
            topology: spec.topology(),
            thickness,
            left: -half_w,
            right: half_w,
            top: half_h,
            bottom: -half_h,
            reliefs,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn relief(&self, side: Side) -> f64 {
        self.reliefs.get(side)
    }

    pub fn edge(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Moves `distance` from the edge of `side` towards the centre.
    pub fn inward(&self, side: Side, distance: f64) -> f64 {
        match side {
            Side::Top | Side::Right => self.edge(side) - distance,
            Side::Bottom | Side::Left => self.edge(side) + distance,
        }
    }

    pub fn has_corner_notch(&self, corner: Corner) -> bool {
        self.topology.corner_eligible(corner)
            && self.thickness.get(corner.horizontal_side()) > 0.0
            && self.thickness.get(corner.vertical_side()) > 0.0
    }

    /// Relief notch size at `corner` as (width along x, height along y).
    pub fn corner_notch(&self, corner: Corner) -> (f64, f64) {
        if self.has_corner_notch(corner) {
            (
                self.relief(corner.vertical_side()),
                self.relief(corner.horizontal_side()),
            )
        } else {
            (0.0, 0.0)
        }
    }
}
