//! Viewport and coordinate transformation for preview rendering.
//!
//! Maps world coordinates (millimetres, y up) to pixel coordinates
//! (top-left origin, y down) through a zoom factor and a pan offset.

use signkit_core::Point;
use std::fmt;

/// Fraction of the canvas kept free on each side by [`PreviewViewport::fit_to_view`].
pub const VIEW_PADDING: f64 = 0.05;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewViewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl PreviewViewport {
    /// Unit zoom with the world origin at the bottom-left corner.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Pixels per millimetre.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level; values outside `MIN_ZOOM..=MAX_ZOOM` are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if (MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
            self.zoom = zoom;
        }
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// ```text
    /// pixel_x = world_x * zoom + pan_x
    /// pixel_y = canvas_height - (world_y * zoom + pan_y)
    /// ```
    pub fn world_to_pixel(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        let pixel_x = world_x * self.zoom + self.pan_x;
        let pixel_y = self.canvas_height - (world_y * self.zoom + self.pan_y);
        (pixel_x, pixel_y)
    }

    pub fn world_point_to_pixel(&self, point: &Point) -> (f64, f64) {
        self.world_to_pixel(point.x, point.y)
    }

    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> Point {
        let world_x = (pixel_x - self.pan_x) / self.zoom;
        let world_y = (self.canvas_height - pixel_y - self.pan_y) / self.zoom;
        Point::new(world_x, world_y)
    }

    /// World length to pixel length.
    pub fn scale_length(&self, length: f64) -> f64 {
        length * self.zoom
    }

    /// Centres the bounding box on the canvas at the largest zoom that keeps
    /// `padding` (fraction of the canvas, per side) free. Empty or inverted
    /// boxes leave the viewport unchanged.
    pub fn fit_to_bounds(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64, padding: f64) {
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let width = max_x - min_x;
        let height = max_y - min_y;

        let padding_factor = 1.0 - (padding * 2.0);
        let zoom_x = (self.canvas_width * padding_factor) / width;
        let zoom_y = (self.canvas_height * padding_factor) / height;
        let zoom = zoom_x.min(zoom_y).clamp(MIN_ZOOM, MAX_ZOOM);

        let left = self.canvas_width / 2.0 - width * zoom / 2.0;
        let bottom = self.canvas_height / 2.0 - height * zoom / 2.0;

        self.zoom = zoom;
        self.pan_x = left - min_x * zoom;
        self.pan_y = bottom - min_y * zoom;
    }

    pub fn fit_to_view(&mut self, min: Point, max: Point) {
        self.fit_to_bounds(min.x, min.y, max.x, max.y, VIEW_PADDING);
    }

    pub fn center_on(&mut self, world_x: f64, world_y: f64) {
        self.pan_x = self.canvas_width / 2.0 - world_x * self.zoom;
        self.pan_y = self.canvas_height / 2.0 - world_y * self.zoom;
    }
}

impl fmt::Display for PreviewViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for PreviewViewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
