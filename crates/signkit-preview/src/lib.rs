//! # SignKit Preview
//!
//! Screen-space view of panel artifacts: a [`PreviewViewport`] maps
//! millimetres to pixels, a [`Scene`] holds the transformed primitives and
//! [`SvgRenderer`] writes them out as an SVG sheet.

pub mod scene;
pub mod svg;
pub mod viewport;

pub use scene::{artifacts_bounds, contour_path, path_data, Scene, ScreenCircle, ScreenLine};
pub use svg::{render_svg, SvgRenderer};
pub use viewport::PreviewViewport;
