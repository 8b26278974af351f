//! SVG preview rendering
//!
//! One `<g>` per layer: `cut` (solid contour), `fold` (dashed, inset folds
//! lighter than primaries) and `drill` (circles).

use crate::scene::{artifacts_bounds, path_data, Scene};
use crate::viewport::PreviewViewport;
use signkit_panels::{FoldKind, PanelArtifact};
use std::fmt::Write;
use tracing::debug;

const CUT_COLOR: &str = "#000000";
const PRIMARY_FOLD_COLOR: &str = "#0066cc";
const INSET_FOLD_COLOR: &str = "#66aaff";
const DRILL_COLOR: &str = "#cc0000";

#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: u32,
    height: u32,
    padding: f64,
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            padding: crate::viewport::VIEW_PADDING,
        }
    }

    /// Fraction of the canvas left free on each side.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Viewport fitted to the contours of `artifacts`.
    pub fn viewport_for(&self, artifacts: &[PanelArtifact]) -> PreviewViewport {
        let mut viewport = PreviewViewport::new(self.width as f64, self.height as f64);
        if let Some((min, max)) = artifacts_bounds(artifacts) {
            viewport.fit_to_bounds(min.x, min.y, max.x, max.y, self.padding);
        }
        viewport
    }

    /// Render a complete SVG document. Parts are drawn where they are, so a
    /// multi-part sheet should be laid out first.
    pub fn render(&self, artifacts: &[PanelArtifact]) -> String {
        let viewport = self.viewport_for(artifacts);
        debug!(
            "Rendering {} part(s) at {}",
            artifacts.len(),
            viewport
        );
        self.render_scene(&Scene::from_artifacts(artifacts, &viewport))
    }

    pub fn render_scene(&self, scene: &Scene) -> String {
        let mut svg = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );

        let _ = writeln!(
            svg,
            r#"  <g id="cut" fill="none" stroke="{CUT_COLOR}" stroke-width="1">"#
        );
        for outline in &scene.outlines {
            let _ = writeln!(svg, r#"    <path d="{}"/>"#, path_data(outline));
        }
        svg.push_str("  </g>\n");

        let _ = writeln!(
            svg,
            r#"  <g id="fold" fill="none" stroke-width="0.75" stroke-dasharray="6 3">"#
        );
        for fold in &scene.folds {
            let color = match fold.kind {
                FoldKind::Primary => PRIMARY_FOLD_COLOR,
                FoldKind::Inset => INSET_FOLD_COLOR,
            };
            let _ = writeln!(
                svg,
                r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}"/>"#,
                fold.from.0, fold.from.1, fold.to.0, fold.to.1
            );
        }
        svg.push_str("  </g>\n");

        let _ = writeln!(
            svg,
            r#"  <g id="drill" fill="none" stroke="{DRILL_COLOR}" stroke-width="0.5">"#
        );
        for hole in &scene.holes {
            let _ = writeln!(
                svg,
                r#"    <circle cx="{}" cy="{}" r="{}"/>"#,
                hole.center.0, hole.center.1, hole.radius
            );
        }
        svg.push_str("  </g>\n</svg>\n");
        svg
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(1200, 800)
    }
}

/// Render `artifacts` on a default-sized canvas.
pub fn render_svg(artifacts: &[PanelArtifact]) -> String {
    SvgRenderer::default().render(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use signkit_panels::{generate, PanelParams, PanelSpec};

    fn simple_parts(drilling: bool) -> Vec<PanelArtifact> {
        let params = PanelParams {
            drilling,
            ..PanelParams::default()
        };
        generate(&PanelSpec::new(params).unwrap()).into_parts()
    }

    #[test]
    fn test_render_has_three_layers() {
        let parts = simple_parts(true);
        let svg = render_svg(&parts);

        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"<g id="cut""#));
        assert!(svg.contains(r#"<g id="fold""#));
        assert!(svg.contains(r#"<g id="drill""#));
        assert_eq!(svg.matches("<path ").count(), 1);
        assert_eq!(svg.matches("<line ").count(), parts[0].fold_lines.len());
        assert_eq!(svg.matches("<circle ").count(), parts[0].holes.len());
    }

    #[test]
    fn test_render_without_drilling() {
        let svg = render_svg(&simple_parts(false));
        assert_eq!(svg.matches("<circle ").count(), 0);
        assert!(svg.contains(INSET_FOLD_COLOR));
    }

    #[test]
    fn test_render_empty_sheet() {
        let svg = SvgRenderer::new(100, 50).render(&[]);
        assert!(svg.contains(r#"viewBox="0 0 100 50""#));
        assert!(!svg.contains("<path "));
    }

    #[test]
    fn test_viewport_fits_part() {
        let parts = simple_parts(true);
        let renderer = SvgRenderer::new(1140, 640).with_padding(0.0);
        let viewport = renderer.viewport_for(&parts);
        assert!((viewport.zoom() - 1.0).abs() < 1e-9);
    }
}
