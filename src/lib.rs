//! Editor core for composing electrical-panel layouts on a 2D canvas.
//!
//! The crate owns the full interaction lifecycle of the panel editor:
//! placing catalog components by drop, dragging them around, connecting them
//! with wires in a dedicated wiring mode, single-level undo, and producing the
//! scene that keeps the canvas in sync with the entity graph. The host layer
//! (a browser page or the `panelctl` replay tool) only forwards input events
//! and acts on the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Interaction controller ([`engine::EngineCore`]) and the browser-bound [`engine::Engine`] |
//! | [`catalog`] | Immutable component templates and drop-payload parsing |
//! | [`doc`] | Entity store: placed instances, wires, id allocation |
//! | [`hit`] | Point-to-instance hit-testing |
//! | [`history`] | Single-level undo snapshots |
//! | [`input`] | Input events, modes and the gesture state machine |
//! | [`render`] | Display-list construction and canvas painting |
//! | [`export`] | Layout document serialization |
//! | [`config`] | Environment-driven editor configuration |
//! | [`geom`] | Points and rectangle math |
//! | [`consts`] | Shared constants (canvas defaults, colors, line widths) |
//! | [`error`] | Error type for the fallible edges |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod export;
pub mod geom;
pub mod history;
pub mod hit;
pub mod input;
pub mod render;
