//! Screen-space drawing primitives
//!
//! A [`Scene`] is the preview's view of one or more artifacts: the cutting
//! contour as a lyon path, fold strokes and drill circles, all already
//! transformed to pixels. Nothing here recomputes panel geometry.

use crate::viewport::PreviewViewport;
use lyon::math::point;
use lyon::path::{Event, Path};
use signkit_core::Point;
use signkit_panels::{Contour, FoldKind, PanelArtifact};

/// Stroke segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLine {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub kind: FoldKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenCircle {
    pub center: (f64, f64),
    pub radius: f64,
}

/// Drawing primitives of a set of parts, grouped by layer.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub outlines: Vec<Path>,
    pub folds: Vec<ScreenLine>,
    pub holes: Vec<ScreenCircle>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map every artifact through `viewport`.
    pub fn from_artifacts(artifacts: &[PanelArtifact], viewport: &PreviewViewport) -> Self {
        let mut scene = Self::new();
        for artifact in artifacts {
            scene.push_artifact(artifact, viewport);
        }
        scene
    }

    pub fn push_artifact(&mut self, artifact: &PanelArtifact, viewport: &PreviewViewport) {
        if let Some(path) = contour_path(&artifact.contour, viewport) {
            self.outlines.push(path);
        }

        self.folds.extend(artifact.fold_lines.iter().map(|fold| ScreenLine {
            from: viewport.world_point_to_pixel(&fold.start),
            to: viewport.world_point_to_pixel(&fold.end),
            kind: fold.kind,
        }));

        self.holes.extend(artifact.holes.iter().map(|hole| ScreenCircle {
            center: viewport.world_point_to_pixel(&hole.center),
            radius: viewport.scale_length(hole.radius),
        }));
    }

    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty() && self.folds.is_empty() && self.holes.is_empty()
    }
}

/// Closed lyon path of a contour in pixel space, `None` for an empty contour.
pub fn contour_path(contour: &Contour, viewport: &PreviewViewport) -> Option<Path> {
    let (first, rest) = contour.points().split_first()?;
    let to_screen = |p: &Point| {
        let (x, y) = viewport.world_point_to_pixel(p);
        point(x as f32, y as f32)
    };

    let mut builder = Path::builder();
    builder.begin(to_screen(first));
    for p in rest {
        builder.line_to(to_screen(p));
    }
    builder.end(true);
    Some(builder.build())
}

/// SVG path data (`M`, `L`, `Z`) for a lyon path.
pub fn path_data(path: &Path) -> String {
    let mut data = String::new();
    for event in path.iter() {
        match event {
            Event::Begin { at } => {
                data.push_str(&format!("M {} {} ", at.x, at.y));
            }
            Event::Line { to, .. } => {
                data.push_str(&format!("L {} {} ", to.x, to.y));
            }
            Event::Quadratic { ctrl, to, .. } => {
                data.push_str(&format!("Q {} {} {} {} ", ctrl.x, ctrl.y, to.x, to.y));
            }
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                data.push_str(&format!(
                    "C {} {} {} {} {} {} ",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                ));
            }
            Event::End { close, .. } => {
                if close {
                    data.push_str("Z ");
                }
            }
        }
    }
    data.trim_end().to_string()
}

/// Bounding box of the contours of all artifacts.
pub fn artifacts_bounds(artifacts: &[PanelArtifact]) -> Option<(Point, Point)> {
    artifacts
        .iter()
        .filter_map(|a| a.contour.bounds())
        .reduce(|(min_a, max_a), (min_b, max_b)| {
            (
                Point::new(min_a.x.min(min_b.x), min_a.y.min(min_b.y)),
                Point::new(max_a.x.max(max_b.x), max_a.y.max(max_b.y)),
            )
        })
}
