//! Rendering: turns editor state into a display list and paints it on a 2D
//! canvas context.
//!
//! [`scene`] is a pure function of the store and the input state; it never
//! mutates anything and is what the tests exercise. [`draw`] is the only
//! place that touches [`web_sys::CanvasRenderingContext2d`]; it replays a
//! display list and propagates `Canvas2D` failures as `JsValue`.
//!
//! Layering: clear, then every wire, then every instance in placement order.
//! Wires go first so instance rectangles cover the line ends, and later
//! instances sit above earlier ones, matching hit-test priority.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    LABEL_COLOR, LABEL_FONT, MOVE_HIGHLIGHT_COLOR, MOVE_HIGHLIGHT_OUTSET, MOVE_HIGHLIGHT_WIDTH, WIRE_COLOR,
    WIRE_HIGHLIGHT_COLOR, WIRE_HIGHLIGHT_WIDTH, WIRE_WIDTH,
};
use crate::doc::{PanelStore, PlacedInstance};
use crate::geom::{Point, Rect};
use crate::input::{HighlightKind, InputState};

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Wipe the whole surface.
    Clear { width: f64, height: f64 },
    /// Straight stroked segment.
    Line { from: Point, to: Point, color: String, width: f64 },
    FillRect { rect: Rect, color: String },
    StrokeRect { rect: Rect, color: String, width: f64 },
    /// Text centered on `at`.
    Label { text: String, at: Point, color: String },
}

/// Build the display list for the current state.
#[must_use]
pub fn scene(doc: &PanelStore, input: &InputState, width: f64, height: f64) -> Vec<DrawOp> {
    let mut ops = vec![DrawOp::Clear { width, height }];

    for wire in doc.wires() {
        let start = doc.find_instance(wire.start_instance_id);
        let end = doc.find_instance(wire.end_instance_id);
        let (Some(start), Some(end)) = (start, end) else {
            warn!(
                start = wire.start_instance_id,
                end = wire.end_instance_id,
                "wire endpoint not found; skipping"
            );
            continue;
        };
        ops.push(DrawOp::Line {
            from: start.rect().center(),
            to: end.rect().center(),
            color: WIRE_COLOR.to_string(),
            width: WIRE_WIDTH,
        });
    }

    let highlight = input.highlight();
    for inst in doc.instances() {
        ops.push(DrawOp::FillRect { rect: inst.rect(), color: inst.color.clone() });
        match highlight {
            Some(h) if h.id == inst.instance_id => ops.push(highlight_op(inst, h.kind)),
            _ => {}
        }
        ops.push(DrawOp::Label {
            text: inst.name.clone(),
            at: inst.rect().center(),
            color: LABEL_COLOR.to_string(),
        });
    }

    ops
}

fn highlight_op(inst: &PlacedInstance, kind: HighlightKind) -> DrawOp {
    match kind {
        HighlightKind::Move => DrawOp::StrokeRect {
            rect: inst.rect().inflate(MOVE_HIGHLIGHT_OUTSET),
            color: MOVE_HIGHLIGHT_COLOR.to_string(),
            width: MOVE_HIGHLIGHT_WIDTH,
        },
        HighlightKind::WireEndpoint => DrawOp::StrokeRect {
            rect: inst.rect(),
            color: WIRE_HIGHLIGHT_COLOR.to_string(),
            width: WIRE_HIGHLIGHT_WIDTH,
        },
    }
}

/// Paint a display list.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, ops: &[DrawOp]) -> Result<(), JsValue> {
    for op in ops {
        match op {
            DrawOp::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
            DrawOp::Line { from, to, color, width } => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*width);
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.stroke();
            }
            DrawOp::FillRect { rect, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
            }
            DrawOp::StrokeRect { rect, color, width } => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*width);
                ctx.stroke_rect(rect.x, rect.y, rect.width, rect.height);
            }
            DrawOp::Label { text, at, color } => {
                ctx.set_fill_style_str(color);
                ctx.set_font(LABEL_FONT);
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                ctx.fill_text(text, at.x, at.y)?;
            }
        }
    }
    Ok(())
}
