//! Single-level undo.
//!
//! The history keeps at most one [`EditorSnapshot`]: an owned deep copy of
//! the instance and wire lists taken just before a mutation. Taking a new
//! snapshot discards the old one; undo consumes it.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::doc::{PanelStore, PlacedInstance, Wire};

/// Owned copy of the editor's entity sets.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSnapshot {
    pub instances: Vec<PlacedInstance>,
    pub wires: Vec<Wire>,
}

impl EditorSnapshot {
    /// Deep-copy the current contents of `doc`.
    #[must_use]
    pub fn capture(doc: &PanelStore) -> Self {
        Self { instances: doc.instances().to_vec(), wires: doc.wires().to_vec() }
    }
}

/// Holds the one retained snapshot, if any.
#[derive(Debug, Default)]
pub struct History {
    slot: Option<EditorSnapshot>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain a copy of the current state, replacing any earlier snapshot.
    pub fn snapshot(&mut self, doc: &PanelStore) {
        self.slot = Some(EditorSnapshot::capture(doc));
    }

    /// Retain an already captured snapshot, replacing any earlier one.
    pub fn commit(&mut self, snapshot: EditorSnapshot) {
        self.slot = Some(snapshot);
    }

    /// Restore the retained snapshot into `doc` and drop it.
    ///
    /// Returns false (and leaves `doc` untouched) when nothing is retained.
    pub fn undo(&mut self, doc: &mut PanelStore) -> bool {
        let Some(snapshot) = self.slot.take() else {
            return false;
        };
        doc.replace(snapshot.instances, snapshot.wires);
        true
    }

    /// Whether an undo would have an effect.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.slot.is_some()
    }
}
