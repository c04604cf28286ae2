//! Layout export: the document handed to the host for download.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use serde::{Deserialize, Serialize};

use crate::doc::{PanelStore, PlacedInstance, Wire};
use crate::error::EditorError;

/// Serializable view of the whole panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelLayout {
    pub placed_components: Vec<PlacedInstance>,
    pub wires: Vec<Wire>,
}

impl PanelLayout {
    #[must_use]
    pub fn from_store(doc: &PanelStore) -> Self {
        Self { placed_components: doc.instances().to_vec(), wires: doc.wires().to_vec() }
    }

    /// Encode as pretty JSON with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Export`] if serialization fails.
    pub fn to_json(&self) -> Result<String, EditorError> {
        serde_json::to_string_pretty(self).map_err(EditorError::Export)
    }
}
