//! Pointer input events and per-contact tracking.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Identifier of an input contact (mouse, touch point, or pen), unique for
/// the lifetime of the contact.
pub type PointerId = u64;

/// Pointer event type for unified mouse/touch/pen handling.
///
/// `Cancel` is delivered when the platform aborts a contact (palm rejection,
/// window loss); it is handled exactly like `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { id: PointerId, position: Point },
    Move { id: PointerId, position: Point },
    Up { id: PointerId },
    Cancel { id: PointerId },
}

/// Last-known positions of the active contacts, in the order they went down.
///
/// Down order matters: pinch handling pairs the first two contacts, so a
/// plain `HashMap` would not do.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    points: Vec<(PointerId, Point)>,
}

impl PointerTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a contact going down. An id that is already tracked just has
    /// its position updated, keeping its place in the down order.
    pub fn insert(&mut self, id: PointerId, position: Point) {
        match self.points.iter_mut().find(|(pid, _)| *pid == id) {
            Some(entry) => entry.1 = position,
            None => self.points.push((id, position)),
        }
    }

    /// Update the position of a tracked contact; untracked ids are ignored.
    pub fn update(&mut self, id: PointerId, position: Point) {
        if let Some(entry) = self.points.iter_mut().find(|(pid, _)| *pid == id) {
            entry.1 = position;
        }
    }

    /// Remove a contact; untracked ids are ignored.
    pub fn remove(&mut self, id: PointerId) {
        self.points.retain(|(pid, _)| *pid != id);
    }

    /// Check if a contact is tracked.
    pub fn contains(&self, id: PointerId) -> bool {
        self.points.iter().any(|(pid, _)| *pid == id)
    }

    /// Number of active contacts.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no contact is active.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position of the first contact that went down.
    pub fn first(&self) -> Option<Point> {
        self.points.first().map(|(_, p)| *p)
    }

    /// Positions of the first two contacts, in down order.
    pub fn first_two(&self) -> Option<(Point, Point)> {
        match self.points.as_slice() {
            [(_, a), (_, b), ..] => Some((*a, *b)),
            _ => None,
        }
    }

    /// Euclidean distance between the first two contacts.
    pub fn pinch_distance(&self) -> Option<f64> {
        self.first_two().map(|(a, b)| a.distance(b))
    }
}
