//! Output units
//!
//! Panel geometry is always computed in millimetres. Exporters may need the
//! same values in PostScript points (the host document model).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// PostScript points per millimetre, as used by the host document model
pub const POINTS_PER_MM: f64 = 2.83465;

/// Units written by exporters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputUnits {
    /// Millimetres, the engine's native unit
    Mm,
    /// PostScript points (1 mm = 2.83465 pt)
    Pt,
}

impl Default for OutputUnits {
    fn default() -> Self {
        Self::Mm
    }
}

impl OutputUnits {
    /// Scale factor from millimetres to this unit
    pub fn scale_from_mm(self) -> f64 {
        match self {
            Self::Mm => 1.0,
            Self::Pt => POINTS_PER_MM,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mm => "mm",
            Self::Pt => "pt",
        }
    }
}

impl fmt::Display for OutputUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OutputUnits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeters" | "millimetres" => Ok(Self::Mm),
            "pt" | "points" => Ok(Self::Pt),
            _ => Err(format!("Unknown output units: {}", s)),
        }
    }
}
