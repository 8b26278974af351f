//! # SignKit Core
//!
//! Core types shared by every SignKit crate: the planar [`Point`] used for
//! all panel geometry, export [`OutputUnits`] and the workspace-wide
//! [`Error`] type.

pub mod error;
pub mod point;
pub mod units;

pub use error::{Error, Result};
pub use point::Point;
pub use units::{OutputUnits, POINTS_PER_MM};
