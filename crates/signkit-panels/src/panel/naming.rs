//! Canonical part names used as output file stems.

use super::types::{PanelTopology, PartRole};

/// File stem for the part of `topology` at 1-based `index`.
///
/// Only center segments and double-faced faces use the index: center
/// segments are numbered, and index 1 of a double-faced panel is the recto,
/// any other index the verso.
pub fn part_file_stem(topology: PanelTopology, index: usize) -> String {
    match topology {
        PanelTopology::Simple => "Caisson_Simple".to_string(),
        PanelTopology::LeftSegment => "Partie_Gauche".to_string(),
        PanelTopology::CenterSegment => format!("Partie_Centrale_{}", index),
        PanelTopology::RightSegment => "Partie_Droite".to_string(),
        PanelTopology::DoubleFaced if index <= 1 => "Caisson_Double_Recto".to_string(),
        PanelTopology::DoubleFaced => "Caisson_Double_Verso".to_string(),
    }
}

impl PartRole {
    pub fn topology(&self) -> PanelTopology {
        match self {
            PartRole::Single => PanelTopology::Simple,
            PartRole::Left => PanelTopology::LeftSegment,
            PartRole::Center(_) => PanelTopology::CenterSegment,
            PartRole::Right => PanelTopology::RightSegment,
            PartRole::Recto | PartRole::Verso => PanelTopology::DoubleFaced,
        }
    }

    pub fn file_stem(&self) -> String {
        let index = match self {
            PartRole::Center(n) => *n,
            PartRole::Verso => 2,
            PartRole::Single | PartRole::Left | PartRole::Right | PartRole::Recto => 1,
        };
        part_file_stem(self.topology(), index)
    }
}
