//! Consumer seam for generated artifacts.
//!
//! The engine never writes files. Exporters and previewers implement
//! [`ArtifactSink`] and receive every part with its canonical name.

use super::types::PanelArtifact;
use std::convert::Infallible;

pub trait ArtifactSink {
    type Error;

    fn accept(&mut self, name: &str, artifact: &PanelArtifact) -> Result<(), Self::Error>;
}

/// Keeps every accepted artifact in memory, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub entries: Vec<(String, PanelArtifact)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl ArtifactSink for MemorySink {
    type Error = Infallible;

    fn accept(&mut self, name: &str, artifact: &PanelArtifact) -> Result<(), Infallible> {
        self.entries.push((name.to_string(), artifact.clone()));
        Ok(())
    }
}
