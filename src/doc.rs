//! Entity store: placed component instances, the wires between them, and
//! instance id allocation.
//!
//! Instances are kept in placement order. That order is the draw order for the
//! renderer and, reversed, the probe order for hit-testing, so whatever is
//! drawn on top is also what a click reaches first.
//!
//! Wires reference instances by id only. The store never removes a single
//! instance, so a dangling wire can only arise from outside manipulation; the
//! renderer treats it as a warning rather than an error.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::catalog::ComponentTemplate;
use crate::geom::{Point, Rect};

/// Identifier of a placed instance. Unique within a session until `clear`.
pub type InstanceId = u64;

/// One positioned copy of a catalog template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedInstance {
    pub instance_id: InstanceId,
    pub type_id: String,
    pub name: String,
    /// Left edge in canvas coordinates.
    pub x: f64,
    /// Top edge in canvas coordinates.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

impl PlacedInstance {
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// An undirected connection between two instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wire {
    pub start_instance_id: InstanceId,
    pub end_instance_id: InstanceId,
}

impl Wire {
    /// Whether this wire joins `a` and `b`, in either direction.
    #[must_use]
    pub fn connects(&self, a: InstanceId, b: InstanceId) -> bool {
        (self.start_instance_id == a && self.end_instance_id == b)
            || (self.start_instance_id == b && self.end_instance_id == a)
    }
}

/// In-memory store of instances and wires.
#[derive(Debug, Default)]
pub struct PanelStore {
    instances: Vec<PlacedInstance>,
    wires: Vec<Wire>,
    next_id: InstanceId,
}

impl PanelStore {
    /// Create an empty store whose first instance will get id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new instance of `template` centered on `center`.
    pub fn create_instance(&mut self, template: &ComponentTemplate, center: Point) -> &PlacedInstance {
        let rect = Rect::centered_at(center, template.width, template.height);
        let instance_id = self.next_id;
        self.next_id += 1;
        self.instances.push(PlacedInstance {
            instance_id,
            type_id: template.type_id.clone(),
            name: template.name.clone(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            color: template.color.clone(),
        });
        &self.instances[self.instances.len() - 1]
    }

    /// Set the top-left corner of an instance. Returns false if the id is unknown.
    pub fn move_instance(&mut self, id: InstanceId, x: f64, y: f64) -> bool {
        let Some(instance) = self.instances.iter_mut().find(|i| i.instance_id == id) else {
            return false;
        };
        instance.x = x;
        instance.y = y;
        true
    }

    /// Connect `a` and `b`. Self-loops and duplicates (in either direction)
    /// are rejected; returns whether a wire was added.
    pub fn add_wire(&mut self, a: InstanceId, b: InstanceId) -> bool {
        if a == b || self.has_wire(a, b) {
            return false;
        }
        self.wires.push(Wire { start_instance_id: a, end_instance_id: b });
        true
    }

    /// Whether a wire joins `a` and `b` in either direction.
    #[must_use]
    pub fn has_wire(&self, a: InstanceId, b: InstanceId) -> bool {
        self.wires.iter().any(|w| w.connects(a, b))
    }

    /// Remove everything and restart id allocation at 0.
    pub fn clear(&mut self) {
        self.instances.clear();
        self.wires.clear();
        self.next_id = 0;
    }

    #[must_use]
    pub fn find_instance(&self, id: InstanceId) -> Option<&PlacedInstance> {
        self.instances.iter().find(|i| i.instance_id == id)
    }

    /// Instances in placement order (bottom-most first).
    #[must_use]
    pub fn instances(&self) -> &[PlacedInstance] {
        &self.instances
    }

    #[must_use]
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// The id the next placement will receive.
    #[must_use]
    pub fn next_id(&self) -> InstanceId {
        self.next_id
    }

    /// Replace the live contents wholesale.
    ///
    /// The id counter is never lowered below an id that is now in use, so a
    /// restored clear cannot hand out duplicate ids; it is not rewound either,
    /// so ids of discarded instances stay retired.
    pub fn replace(&mut self, instances: Vec<PlacedInstance>, wires: Vec<Wire>) {
        let floor = instances.iter().map(|i| i.instance_id + 1).max().unwrap_or(0);
        self.next_id = self.next_id.max(floor);
        self.instances = instances;
        self.wires = wires;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
