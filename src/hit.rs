#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{PanelStore, PlacedInstance};
use crate::geom::Point;

/// Find the top-most instance under `pt`.
///
/// Probes in reverse placement order so the instance drawn last (on top) wins
/// where rectangles overlap. Bounds are inclusive.
#[must_use]
pub fn hit_test(pt: Point, doc: &PanelStore) -> Option<&PlacedInstance> {
    doc.instances().iter().rev().find(|inst| inst.rect().contains(pt))
}
