//! Shared constants for the panel editor.

// ── Canvas ──────────────────────────────────────────────────────

/// Default canvas width in CSS pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1000.0;

/// Default canvas height in CSS pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 700.0;

/// File name offered for the exported layout.
pub const DEFAULT_EXPORT_FILE: &str = "panel_layout.json";

/// Fill used when a template carries no color.
pub const DEFAULT_COMPONENT_COLOR: &str = "black";

// ── Wires ───────────────────────────────────────────────────────

pub const WIRE_COLOR: &str = "black";
pub const WIRE_WIDTH: f64 = 2.0;

// ── Highlights ──────────────────────────────────────────────────

/// Border drawn around the instance being dragged.
pub const MOVE_HIGHLIGHT_COLOR: &str = "dodgerblue";
pub const MOVE_HIGHLIGHT_WIDTH: f64 = 2.0;

/// Outset of the drag highlight beyond the instance rectangle, per side.
pub const MOVE_HIGHLIGHT_OUTSET: f64 = 1.0;

/// Border drawn around the first endpoint of an in-progress wire.
pub const WIRE_HIGHLIGHT_COLOR: &str = "yellow";
pub const WIRE_HIGHLIGHT_WIDTH: f64 = 3.0;

// ── Labels ──────────────────────────────────────────────────────

pub const LABEL_COLOR: &str = "white";
pub const LABEL_FONT: &str = "10px sans-serif";
