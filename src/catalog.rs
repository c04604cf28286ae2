//! Component catalog: the fixed palette of placeable templates.
//!
//! Templates are created once at startup and only ever read. A drop onto the
//! canvas carries a template encoded as JSON (the palette's drag payload);
//! [`ComponentTemplate::from_payload`] decodes it.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_COMPONENT_COLOR;
use crate::error::EditorError;

/// A placeable component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentTemplate {
    /// Stable type identifier (e.g. `"cb_10a"`).
    #[serde(rename = "id", alias = "typeId")]
    pub type_id: String,
    /// Display name drawn as the instance label.
    pub name: String,
    /// Footprint width in canvas units.
    pub width: f64,
    /// Footprint height in canvas units.
    pub height: f64,
    /// CSS fill color.
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_COMPONENT_COLOR.to_string()
}

impl ComponentTemplate {
    #[must_use]
    pub fn new(type_id: &str, name: &str, width: f64, height: f64, color: &str) -> Self {
        Self {
            type_id: type_id.to_string(),
            name: name.to_string(),
            width,
            height,
            color: color.to_string(),
        }
    }

    /// Decode a drag payload into a template.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::MalformedPayload`] if the payload is not valid
    /// JSON or is missing a required field.
    pub fn from_payload(payload: &str) -> Result<Self, EditorError> {
        serde_json::from_str(payload).map_err(EditorError::MalformedPayload)
    }
}

/// Ordered, read-only list of templates.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<ComponentTemplate>,
}

impl Catalog {
    #[must_use]
    pub fn new(templates: Vec<ComponentTemplate>) -> Self {
        Self { templates }
    }

    /// All templates in palette order.
    #[must_use]
    pub fn templates(&self) -> &[ComponentTemplate] {
        &self.templates
    }

    /// Look up a template by its type identifier.
    #[must_use]
    pub fn get(&self, type_id: &str) -> Option<&ComponentTemplate> {
        self.templates.iter().find(|t| t.type_id == type_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for Catalog {
    /// The standard electrical-panel palette.
    fn default() -> Self {
        Self::new(vec![
            ComponentTemplate::new("main_breaker", "Main Breaker", 50.0, 70.0, "#FF6347"),
            ComponentTemplate::new("cb_10a", "CB 10A", 25.0, 60.0, "lightgrey"),
            ComponentTemplate::new("cb_15a", "CB 15A", 25.0, 60.0, "lightblue"),
            ComponentTemplate::new("cb_20a", "CB 20A", 25.0, 60.0, "lightpink"),
            ComponentTemplate::new("cb_30a", "CB 30A", 50.0, 60.0, "lightgreen"),
            ComponentTemplate::new("bus_bar", "Bus Bar", 200.0, 20.0, "#D2B48C"),
            ComponentTemplate::new("neutral_bar", "Neutral Bar", 150.0, 15.0, "#007bff"),
            ComponentTemplate::new("ground_bar", "Ground Bar", 150.0, 15.0, "#90EE90"),
            ComponentTemplate::new("contactor", "Contactor", 60.0, 70.0, "#4682B4"),
            ComponentTemplate::new("overload_relay", "Overload Relay", 50.0, 60.0, "#FFA07A"),
            ComponentTemplate::new("fuse_block_3p", "Fuse Block 3P", 70.0, 50.0, "#808080"),
            ComponentTemplate::new("transformer", "Transformer", 80.0, 90.0, "#F4A460"),
            ComponentTemplate::new("terminal_block_strip", "Terminal Strip", 120.0, 30.0, "#A9A9A9"),
            ComponentTemplate::new("pilot_light_red", "Pilot Light R", 25.0, 25.0, "red"),
            ComponentTemplate::new("pilot_light_green", "Pilot Light G", 25.0, 25.0, "green"),
            ComponentTemplate::new("push_button_green", "Push Button G", 30.0, 30.0, "#2E8B57"),
            ComponentTemplate::new("emergency_stop", "E-Stop", 40.0, 40.0, "#DC143C"),
        ])
    }
}
