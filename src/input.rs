//! Input model: events, cursor hints, and the mode state machine.
//!
//! [`Event`] is everything a host can feed the controller. [`InputState`] is
//! the editor mode; each variant carries only the state that mode needs, so
//! leaving a mode drops its in-flight gesture by construction.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::catalog::ComponentTemplate;
use crate::doc::InstanceId;
use crate::geom::Point;

/// A discrete input event in canvas-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A palette template dropped on the canvas. `template` is absent when
    /// the drag carried no usable component data.
    Drop {
        #[serde(default)]
        template: Option<ComponentTemplate>,
        x: f64,
        y: f64,
    },
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    /// A completed click (press and release without a drag in between).
    Click { x: f64, y: f64 },
    PointerEnter { x: f64, y: f64 },
    PointerLeave,
    ToggleWiring,
    Undo,
    Clear,
}

/// Cursor shape the host should show over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Hovering a movable instance.
    Grab,
    /// Dragging an instance.
    Grabbing,
    /// Wiring mode.
    Crosshair,
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::Crosshair => "crosshair",
        }
    }
}

/// An instance being dragged in idle mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Id of the instance under the pointer at press time.
    pub id: InstanceId,
    /// Top-left corner of the instance when the drag began.
    pub origin: Point,
    /// Pointer position minus the instance's top-left corner at press time.
    pub offset: Point,
}

impl DragState {
    /// Where the instance's top-left corner goes for a pointer at `pointer`.
    #[must_use]
    pub fn target(&self, pointer: Point) -> Point {
        Point::new(pointer.x - self.offset.x, pointer.y - self.offset.y)
    }
}

/// Editor mode. Placement and dragging live in `Idle`, wire selection in
/// `Wiring`; input belonging to the other mode is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputState {
    Idle {
        drag: Option<DragState>,
    },
    Wiring {
        /// First endpoint chosen for the wire in progress.
        pending: Option<InstanceId>,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle { drag: None }
    }
}

impl InputState {
    #[must_use]
    pub fn is_wiring(&self) -> bool {
        matches!(self, Self::Wiring { .. })
    }

    /// The opposite mode with no gesture in flight.
    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            Self::Idle { .. } => Self::Wiring { pending: None },
            Self::Wiring { .. } => Self::Idle { drag: None },
        }
    }

    /// The instance currently drawn with a selection border, if any.
    #[must_use]
    pub fn highlight(&self) -> Option<Highlight> {
        match *self {
            Self::Idle { drag: Some(drag) } => Some(Highlight { id: drag.id, kind: HighlightKind::Move }),
            Self::Wiring { pending: Some(id) } => Some(Highlight { id, kind: HighlightKind::WireEndpoint }),
            _ => None,
        }
    }

    /// Label for the host's mode toggle control.
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.is_wiring() {
            "Toggle Wiring Mode (ON)"
        } else {
            "Toggle Wiring Mode (OFF)"
        }
    }
}

/// Why an instance is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    /// Being dragged.
    Move,
    /// Chosen as the first end of a new wire.
    WireEndpoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub id: InstanceId,
    pub kind: HighlightKind,
}
