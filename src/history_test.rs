#![allow(clippy::float_cmp)]

use super::*;
use crate::catalog::ComponentTemplate;
use crate::geom::Point;

fn breaker() -> ComponentTemplate {
    ComponentTemplate::new("cb_10a", "CB 10A", 25.0, 60.0, "lightgrey")
}

fn populated() -> PanelStore {
    let mut doc = PanelStore::new();
    doc.create_instance(&breaker(), Point::new(100.0, 100.0));
    doc.create_instance(&breaker(), Point::new(200.0, 100.0));
    doc.add_wire(0, 1);
    doc
}

#[test]
fn new_history_cannot_undo() {
    assert!(!History::new().can_undo());
}

#[test]
fn undo_on_empty_history_is_noop() {
    let mut history = History::new();
    let mut doc = populated();
    assert!(!history.undo(&mut doc));
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.wires().len(), 1);
}

#[test]
fn snapshot_enables_undo() {
    let mut history = History::new();
    history.snapshot(&PanelStore::new());
    assert!(history.can_undo());
}

#[test]
fn undo_restores_state_after_placement() {
    let mut history = History::new();
    let mut doc = populated();
    let before = EditorSnapshot::capture(&doc);

    history.snapshot(&doc);
    doc.create_instance(&breaker(), Point::new(300.0, 100.0));
    assert!(history.undo(&mut doc));

    assert_eq!(EditorSnapshot::capture(&doc), before);
}

#[test]
fn undo_restores_state_after_move() {
    let mut history = History::new();
    let mut doc = populated();
    let before = EditorSnapshot::capture(&doc);

    history.snapshot(&doc);
    doc.move_instance(0, 1.0, 1.0);
    history.undo(&mut doc);

    assert_eq!(EditorSnapshot::capture(&doc), before);
}

#[test]
fn undo_restores_state_after_clear() {
    let mut history = History::new();
    let mut doc = populated();
    let before = EditorSnapshot::capture(&doc);

    history.snapshot(&doc);
    doc.clear();
    history.undo(&mut doc);

    assert_eq!(EditorSnapshot::capture(&doc), before);
    let next = doc.create_instance(&breaker(), Point::new(0.0, 0.0));
    assert_eq!(next.instance_id, 2);
}

#[test]
fn snapshot_is_independent_of_later_mutation() {
    let mut history = History::new();
    let mut doc = populated();
    history.snapshot(&doc);
    doc.move_instance(0, 999.0, 999.0);

    assert!(history.undo(&mut doc));
    assert_eq!(doc.find_instance(0).unwrap().position(), Point::new(87.5, 70.0));
}

#[test]
fn undo_twice_only_applies_once() {
    let mut history = History::new();
    let mut doc = populated();
    history.snapshot(&doc);
    doc.add_wire(1, 0);
    doc.create_instance(&breaker(), Point::new(0.0, 0.0));

    assert!(history.undo(&mut doc));
    let after_first = EditorSnapshot::capture(&doc);
    assert!(!history.undo(&mut doc));
    assert_eq!(EditorSnapshot::capture(&doc), after_first);
    assert!(!history.can_undo());
}

#[test]
fn new_snapshot_overwrites_previous() {
    let mut history = History::new();
    let mut doc = PanelStore::new();
    history.snapshot(&doc);
    doc.create_instance(&breaker(), Point::new(0.0, 0.0));
    history.snapshot(&doc);
    doc.create_instance(&breaker(), Point::new(50.0, 0.0));

    history.undo(&mut doc);
    assert_eq!(doc.len(), 1);
}

#[test]
fn commit_retains_given_snapshot() {
    let mut history = History::new();
    let mut doc = populated();
    let earlier = EditorSnapshot::capture(&doc);
    doc.move_instance(1, 0.0, 0.0);

    history.commit(earlier.clone());
    history.undo(&mut doc);
    assert_eq!(EditorSnapshot::capture(&doc), earlier);
}
