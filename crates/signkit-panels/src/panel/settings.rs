//! Tunable constants used by the geometry builders.

use super::types::PanelTopology;
use crate::error::{PanelResult, ValidationError};
use serde::{Deserialize, Serialize};

/// Smallest `max_spacing` a drilling profile accepts (mm).
pub const MIN_HOLE_SPACING: f64 = 10.0;

/// Drill-hole placement rules for one product family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillingProfile {
    /// Distance kept free after each corner relief (mm)
    pub corner_clearance: f64,
    /// Distance from the outer edge to the hole line (mm)
    pub edge_margin: f64,
    /// Largest allowed distance between neighbouring holes (mm)
    pub max_spacing: f64,
    /// Hole radius (mm)
    pub hole_radius: f64,
}

impl DrillingProfile {
    /// Single and segmented panels.
    pub const PANEL: DrillingProfile = DrillingProfile {
        corner_clearance: 50.0,
        edge_margin: 25.0,
        max_spacing: 750.0,
        hole_radius: 1.5,
    };

    /// Double-faced panels have narrower flanges, so holes sit closer to the edge.
    pub const DOUBLE_FACED: DrillingProfile = DrillingProfile {
        edge_margin: 10.0,
        ..DrillingProfile::PANEL
    };

    fn validate(&self) -> PanelResult<()> {
        check_positive("corner_clearance", self.corner_clearance)?;
        check_positive("edge_margin", self.edge_margin)?;
        check_positive("max_spacing", self.max_spacing)?;
        if self.max_spacing < MIN_HOLE_SPACING {
            return Err(ValidationError::SettingTooSmall {
                name: "max_spacing",
                value: self.max_spacing,
                min: MIN_HOLE_SPACING,
            });
        }
        check_positive("hole_radius", self.hole_radius)
    }
}

impl Default for DrillingProfile {
    fn default() -> Self {
        Self::PANEL
    }
}

/// Hanging-cleat notch dimensions for double-faced panels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleatGeometry {
    /// Cut depth into the edge (mm)
    pub depth: f64,
    /// Notch height along the edge (mm)
    pub height: f64,
    /// Gap between a notch and the neighbouring relief boundary in extremity mode (mm)
    pub extremity_margin: f64,
    /// Smallest free gap between the two notches (mm)
    pub min_gap: f64,
    /// Visible height that must stay free of the pitch (mm)
    pub top_clearance: f64,
}

impl CleatGeometry {
    /// Smallest accepted custom pitch.
    pub fn min_pitch(&self) -> f64 {
        self.height + self.min_gap
    }

    /// Largest accepted custom pitch for a visible height.
    pub fn max_pitch(&self, visible_height: f64) -> f64 {
        visible_height - self.top_clearance
    }

    fn validate(&self) -> PanelResult<()> {
        check_positive("cleats.depth", self.depth)?;
        check_positive("cleats.height", self.height)?;
        check_positive("cleats.extremity_margin", self.extremity_margin)?;
        check_positive("cleats.min_gap", self.min_gap)?;
        check_positive("cleats.top_clearance", self.top_clearance)
    }
}

impl Default for CleatGeometry {
    fn default() -> Self {
        Self {
            depth: 16.0,
            height: 34.0,
            extremity_margin: 10.0,
            min_gap: 50.0,
            top_clearance: 20.0,
        }
    }
}

/// Everything the engine can be tuned with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub panel_drilling: DrillingProfile,
    pub double_faced_drilling: DrillingProfile,
    pub cleats: CleatGeometry,
    /// Gap between parts laid out on one sheet (mm)
    pub part_spacing: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            panel_drilling: DrillingProfile::PANEL,
            double_faced_drilling: DrillingProfile::DOUBLE_FACED,
            cleats: CleatGeometry::default(),
            part_spacing: 10.0,
        }
    }
}

impl EngineSettings {
    pub fn drilling_for(&self, topology: PanelTopology) -> &DrillingProfile {
        match topology {
            PanelTopology::DoubleFaced => &self.double_faced_drilling,
            PanelTopology::Simple
            | PanelTopology::LeftSegment
            | PanelTopology::CenterSegment
            | PanelTopology::RightSegment => &self.panel_drilling,
        }
    }

    pub fn validate(&self) -> PanelResult<()> {
        self.panel_drilling.validate()?;
        self.double_faced_drilling.validate()?;
        self.cleats.validate()?;
        if !self.part_spacing.is_finite() || self.part_spacing < 0.0 {
            return Err(ValidationError::InvalidSetting {
                name: "part_spacing",
                value: self.part_spacing,
            });
        }
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f64) -> PanelResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidSetting { name, value })
    }
}
