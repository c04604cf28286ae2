//! Event scripts: a JSON array of input events replayed through the editor.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use panelboard::catalog::ComponentTemplate;
use panelboard::engine::EngineCore;
use panelboard::input::Event;
use serde_json::Value;

use crate::CliError;

/// Counts from a completed replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub actions: usize,
}

/// Parse a script body. Blank input is an empty script.
///
/// A drop whose template doesn't decode is kept as a drop without component
/// data, so the controller ignores it and the rest of the script still runs.
pub fn parse_script(text: &str) -> Result<Vec<Event>, CliError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let raw: Vec<Value> = serde_json::from_str(text)?;
    raw.into_iter().enumerate().map(|(index, value)| parse_event(index, value)).collect()
}

fn parse_event(index: usize, mut value: Value) -> Result<Event, CliError> {
    if value.get("type").and_then(Value::as_str) == Some("drop") {
        if let Some(template) = value.get_mut("template") {
            if let Err(err) = serde_json::from_value::<ComponentTemplate>(template.clone()) {
                tracing::warn!(index, %err, "malformed drop template");
                *template = Value::Null;
            }
        }
    }
    Ok(serde_json::from_value(value)?)
}

/// Feed every event to the controller in order.
pub fn replay(core: &mut EngineCore, events: Vec<Event>) -> ReplaySummary {
    let mut summary = ReplaySummary { events: 0, actions: 0 };
    for event in events {
        tracing::debug!(?event, "replay");
        summary.actions += core.dispatch(event).len();
        summary.events += 1;
    }
    summary
}
