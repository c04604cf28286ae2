//! Editor configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;

use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_EXPORT_FILE};
use crate::error::EditorError;

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Canvas width in CSS pixels.
    pub canvas_width: f64,
    /// Canvas height in CSS pixels.
    pub canvas_height: f64,
    /// File name offered for layout export.
    pub export_file: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            export_file: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

impl EditorConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PANEL_CANVAS_WIDTH`: default 1000
    /// - `PANEL_CANVAS_HEIGHT`: default 700
    /// - `PANEL_EXPORT_FILE`: default `panel_layout.json`
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::ConfigParse`] if a dimension is not a positive
    /// finite number, the export file name is blank, or a variable is not
    /// valid unicode.
    pub fn from_env() -> Result<Self, EditorError> {
        let mut found = Vec::new();
        for key in ENV_KEYS {
            if let Some(value) = read_var(key)? {
                found.push((key, value));
            }
        }
        Self::from_lookup(|key| found.iter().find(|(k, _)| *k == key).map(|(_, v)| v.clone()))
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`EditorConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EditorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_overrides(lookup)
    }

    /// Replace the values `lookup` provides, keeping the rest.
    ///
    /// # Errors
    ///
    /// See [`EditorConfig::from_env`].
    pub fn with_overrides<F>(self, lookup: F) -> Result<Self, EditorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let canvas_width = parse_dimension("PANEL_CANVAS_WIDTH", lookup("PANEL_CANVAS_WIDTH"), self.canvas_width)?;
        let canvas_height = parse_dimension("PANEL_CANVAS_HEIGHT", lookup("PANEL_CANVAS_HEIGHT"), self.canvas_height)?;
        let export_file = match lookup("PANEL_EXPORT_FILE") {
            Some(name) if name.trim().is_empty() => {
                return Err(EditorError::ConfigParse("PANEL_EXPORT_FILE is empty".into()));
            }
            Some(name) => name.trim().to_string(),
            None => self.export_file,
        };

        Ok(Self { canvas_width, canvas_height, export_file })
    }
}

const ENV_KEYS: [&str; 3] = ["PANEL_CANVAS_WIDTH", "PANEL_CANVAS_HEIGHT", "PANEL_EXPORT_FILE"];

/// Unset is `None`; a value that isn't valid unicode is an error.
fn read_var(key: &str) -> Result<Option<String>, EditorError> {
    match std::env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(EditorError::ConfigParse(format!("{key} is not valid unicode"))),
    }
}

fn parse_dimension(key: &str, raw: Option<String>, default: f64) -> Result<f64, EditorError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(EditorError::ConfigParse(format!("{key} must be a positive number, got '{raw}'"))),
    }
}
