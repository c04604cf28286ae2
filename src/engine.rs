use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::catalog::{Catalog, ComponentTemplate};
use crate::config::EditorConfig;
use crate::doc::{InstanceId, PanelStore, PlacedInstance, Wire};
use crate::error::EditorError;
use crate::export::PanelLayout;
use crate::geom::Point;
use crate::history::{EditorSnapshot, History};
use crate::hit::hit_test;
use crate::input::{Cursor, DragState, Event, Highlight, InputState};
use crate::render::{self, DrawOp};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A new instance was placed.
    InstancePlaced(PlacedInstance),
    /// A drag finished with a net displacement.
    InstanceMoved { id: InstanceId, x: f64, y: f64 },
    WireAdded(Wire),
    /// Everything was removed.
    Cleared,
    /// The last snapshot was restored.
    Undone,
    ModeChanged { wiring: bool },
    /// The undo control should be enabled or disabled.
    UndoAvailable(bool),
    SetCursor(Cursor),
    RenderNeeded,
}

/// Core editor state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub doc: PanelStore,
    pub history: History,
    pub input: InputState,
    pub catalog: Catalog,
    pub config: EditorConfig,
    cursor: Cursor,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EditorConfig::default(), Catalog::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig, catalog: Catalog) -> Self {
        Self {
            doc: PanelStore::new(),
            history: History::new(),
            input: InputState::default(),
            catalog,
            config,
            cursor: Cursor::Default,
        }
    }

    /// Route one event to its handler.
    pub fn dispatch(&mut self, event: Event) -> Vec<Action> {
        match event {
            Event::Drop { template, x, y } => self.on_drop(template.as_ref(), Point::new(x, y)),
            Event::PointerDown { x, y } => self.on_pointer_down(Point::new(x, y)),
            Event::PointerMove { x, y } => self.on_pointer_move(Point::new(x, y)),
            Event::PointerUp { x, y } => self.on_pointer_up(Point::new(x, y)),
            Event::Click { x, y } => self.on_click(Point::new(x, y)),
            Event::PointerEnter { x, y } => self.on_pointer_enter(Point::new(x, y)),
            Event::PointerLeave => self.on_pointer_leave(),
            Event::ToggleWiring => self.toggle_wiring(),
            Event::Undo => self.undo(),
            Event::Clear => self.clear(),
        }
    }

    // --- Placement ---

    /// Place a template centered on `pt`. Ignored in wiring mode or when the
    /// drop carried no template.
    pub fn on_drop(&mut self, template: Option<&ComponentTemplate>, pt: Point) -> Vec<Action> {
        if self.input.is_wiring() {
            debug!("drop ignored in wiring mode");
            return Vec::new();
        }
        let Some(template) = template else {
            warn!(x = pt.x, y = pt.y, "drop without component data ignored");
            return Vec::new();
        };

        let mut actions = Vec::new();
        self.record_snapshot(&mut actions);
        let placed = self.doc.create_instance(template, pt).clone();
        debug!(id = placed.instance_id, type_id = %placed.type_id, "instance placed");
        actions.push(Action::InstancePlaced(placed));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Place from a raw drag payload (JSON-encoded template).
    pub fn on_drop_payload(&mut self, payload: &str, pt: Point) -> Vec<Action> {
        match ComponentTemplate::from_payload(payload) {
            Ok(template) => self.on_drop(Some(&template), pt),
            Err(e) => {
                warn!(error = %e, "drop payload rejected");
                Vec::new()
            }
        }
    }

    // --- Idle mode: drag-move ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        let InputState::Idle { drag } = &mut self.input else {
            return Vec::new();
        };
        let Some(hit) = hit_test(pt, &self.doc) else {
            return Vec::new();
        };
        *drag = Some(DragState {
            id: hit.instance_id,
            origin: hit.position(),
            offset: Point::new(pt.x - hit.x, pt.y - hit.y),
        });

        let mut actions = Vec::new();
        self.set_cursor(Cursor::Grabbing, &mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let InputState::Idle { drag } = self.input else {
            return Vec::new();
        };
        let mut actions = Vec::new();
        match drag {
            Some(drag) => {
                let target = drag.target(pt);
                self.doc.move_instance(drag.id, target.x, target.y);
                actions.push(Action::RenderNeeded);
            }
            None => {
                let cursor = self.hover_cursor(pt);
                self.set_cursor(cursor, &mut actions);
            }
        }
        actions
    }

    /// End a drag. A snapshot of the pre-drag state is committed only when
    /// the instance ended up somewhere other than where it started.
    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        let InputState::Idle { drag } = &mut self.input else {
            return Vec::new();
        };
        let Some(drag) = drag.take() else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        if let Some(inst) = self.doc.find_instance(drag.id) {
            let end = inst.position();
            if end != drag.origin {
                let mut before = EditorSnapshot::capture(&self.doc);
                if let Some(moved) = before.instances.iter_mut().find(|i| i.instance_id == drag.id) {
                    moved.x = drag.origin.x;
                    moved.y = drag.origin.y;
                }
                let was_available = self.history.can_undo();
                self.history.commit(before);
                if !was_available {
                    actions.push(Action::UndoAvailable(true));
                }
                debug!(id = drag.id, x = end.x, y = end.y, "instance moved");
                actions.push(Action::InstanceMoved { id: drag.id, x: end.x, y: end.y });
            }
        }

        let cursor = self.hover_cursor(pt);
        self.set_cursor(cursor, &mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Pointer left the canvas. An in-flight drag is abandoned: the instance
    /// keeps its last position and no snapshot is committed.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let InputState::Idle { drag } = &mut self.input {
            if let Some(abandoned) = drag.take() {
                debug!(id = abandoned.id, "drag abandoned at canvas edge");
                actions.push(Action::RenderNeeded);
            }
        }
        self.set_cursor(Cursor::Default, &mut actions);
        actions
    }

    pub fn on_pointer_enter(&mut self, pt: Point) -> Vec<Action> {
        let cursor = match self.input {
            InputState::Wiring { .. } => Cursor::Crosshair,
            InputState::Idle { drag: Some(_) } => Cursor::Grabbing,
            InputState::Idle { drag: None } => self.hover_cursor(pt),
        };
        let mut actions = Vec::new();
        self.set_cursor(cursor, &mut actions);
        actions
    }

    // --- Wiring mode: two-phase endpoint selection ---

    pub fn on_click(&mut self, pt: Point) -> Vec<Action> {
        let InputState::Wiring { pending } = self.input else {
            return Vec::new();
        };
        let first = pending.filter(|id| self.doc.find_instance(*id).is_some());
        let hit = hit_test(pt, &self.doc).map(|inst| inst.instance_id);

        let mut actions = Vec::new();
        let next_pending = match (hit, first) {
            (None, _) => None,
            (Some(id), None) => Some(id),
            (Some(id), Some(first)) if id == first => None,
            (Some(id), Some(first)) => {
                if !self.doc.has_wire(first, id) {
                    self.record_snapshot(&mut actions);
                    if self.doc.add_wire(first, id) {
                        debug!(start = first, end = id, "wire added");
                        actions.push(Action::WireAdded(Wire { start_instance_id: first, end_instance_id: id }));
                    }
                }
                None
            }
        };
        self.input = InputState::Wiring { pending: next_pending };
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Commands ---

    /// Switch between idle and wiring mode, dropping any in-flight gesture.
    pub fn toggle_wiring(&mut self) -> Vec<Action> {
        self.input = self.input.toggled();
        let wiring = self.input.is_wiring();
        debug!(wiring, "mode toggled");

        let mut actions = vec![Action::ModeChanged { wiring }];
        self.set_cursor(if wiring { Cursor::Crosshair } else { Cursor::Default }, &mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn undo(&mut self) -> Vec<Action> {
        if !self.history.undo(&mut self.doc) {
            return Vec::new();
        }
        self.drop_stale_refs();
        debug!(instances = self.doc.len(), wires = self.doc.wires().len(), "undo applied");
        vec![Action::Undone, Action::UndoAvailable(false), Action::RenderNeeded]
    }

    /// Remove every instance and wire. Undoable.
    pub fn clear(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.record_snapshot(&mut actions);
        self.doc.clear();
        self.drop_stale_refs();
        debug!("panel cleared");
        actions.push(Action::Cleared);
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn is_wiring(&self) -> bool {
        self.input.is_wiring()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn highlight(&self) -> Option<Highlight> {
        self.input.highlight()
    }

    /// File name the host should offer for the exported layout.
    #[must_use]
    pub fn export_file_name(&self) -> &str {
        &self.config.export_file
    }

    /// Display list for the current state.
    #[must_use]
    pub fn scene(&self) -> Vec<DrawOp> {
        render::scene(&self.doc, &self.input, self.config.canvas_width, self.config.canvas_height)
    }

    #[must_use]
    pub fn layout(&self) -> PanelLayout {
        PanelLayout::from_store(&self.doc)
    }

    /// The exported layout document.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Export`] if encoding fails.
    pub fn export_json(&self) -> Result<String, EditorError> {
        self.layout().to_json()
    }

    // --- Internals ---

    fn record_snapshot(&mut self, actions: &mut Vec<Action>) {
        let was_available = self.history.can_undo();
        self.history.snapshot(&self.doc);
        if !was_available {
            actions.push(Action::UndoAvailable(true));
        }
    }

    fn set_cursor(&mut self, cursor: Cursor, actions: &mut Vec<Action>) {
        if self.cursor != cursor {
            self.cursor = cursor;
            actions.push(Action::SetCursor(cursor));
        }
    }

    fn hover_cursor(&self, pt: Point) -> Cursor {
        if hit_test(pt, &self.doc).is_some() { Cursor::Grab } else { Cursor::Default }
    }

    /// Forget gesture references to instances that no longer exist.
    fn drop_stale_refs(&mut self) {
        match &mut self.input {
            InputState::Idle { drag } => {
                if drag.is_some_and(|d| self.doc.find_instance(d.id).is_none()) {
                    *drag = None;
                }
            }
            InputState::Wiring { pending } => {
                if pending.is_some_and(|id| self.doc.find_instance(id).is_none()) {
                    *pending = None;
                }
            }
        }
    }
}

/// The full editor engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to `canvas`, sizing it from `config`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(canvas: HtmlCanvasElement, config: EditorConfig) -> Self {
        canvas.set_width(config.canvas_width.round() as u32);
        canvas.set_height(config.canvas_height.round() as u32);
        Self { canvas, core: EngineCore::with_config(config, Catalog::default()) }
    }

    // --- Delegated input ---

    pub fn dispatch(&mut self, event: Event) -> Vec<Action> {
        self.core.dispatch(event)
    }

    pub fn on_drop_payload(&mut self, payload: &str, pt: Point) -> Vec<Action> {
        self.core.on_drop_payload(payload, pt)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, &self.core.scene())
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.core.can_undo()
    }

    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        self.core.input.toggle_label()
    }

    /// # Errors
    ///
    /// Returns [`EditorError::Export`] if encoding fails.
    pub fn export_json(&self) -> Result<String, EditorError> {
        self.core.export_json()
    }

    #[must_use]
    pub fn export_file_name(&self) -> &str {
        self.core.export_file_name()
    }
}
