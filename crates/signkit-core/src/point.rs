//! Planar point used by all panel geometry.
//!
//! Coordinates are millimetres, +X to the right and +Y up, with the origin
//! at the centre of a part's final outline.

use serde::{Deserialize, Serialize};

/// Tolerance used when comparing generated coordinates.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Reflects the point about the vertical axis (x -> -x).
    pub fn mirrored_x(&self) -> Self {
        Self::new(-self.x, self.y)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns true when both coordinates match within [`GEOMETRY_EPSILON`].
    pub fn approx_eq(&self, other: &Point) -> bool {
        (self.x - other.x).abs() < GEOMETRY_EPSILON && (self.y - other.y).abs() < GEOMETRY_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_and_translate() {
        let p = Point::new(12.5, -4.0);
        assert_eq!(p.mirrored_x(), Point::new(-12.5, -4.0));
        assert_eq!(p.translated(10.0, 4.0), Point::new(22.5, 0.0));
        assert_eq!(p.mirrored_x().mirrored_x(), p);
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert!(a.approx_eq(&Point::new(1e-12, -1e-12)));
    }
}
