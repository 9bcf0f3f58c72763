//! The board: the owned, ordered collection of shapes.

use crate::shapes::{RectShape, ShapeId};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Ordered collection of rectangles on the sketch surface.
///
/// Insertion order doubles as hit-test priority: the first inserted shape
/// that matches a point wins, also when shapes overlap. This is a deliberate
/// simplicity choice, not topmost-wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    shapes: Vec<RectShape>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape.
    pub fn push(&mut self, shape: RectShape) {
        self.shapes.push(shape);
    }

    /// Remove a shape by identity. Returns the shape, or `None` when the id
    /// is not present (a silent no-op).
    pub fn remove(&mut self, id: ShapeId) -> Option<RectShape> {
        let idx = self.shapes.iter().position(|s| s.id() == id)?;
        Some(self.shapes.remove(idx))
    }

    /// Get a shape by ID.
    pub fn get(&self, id: ShapeId) -> Option<&RectShape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut RectShape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// All shapes, in insertion order.
    pub fn shapes(&self) -> &[RectShape] {
        &self.shapes
    }

    /// Check if the board is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of shapes on the board.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// First shape (insertion order) whose interior strictly contains the
    /// point.
    pub fn shape_at(&self, p: Point) -> Option<ShapeId> {
        self.shapes.iter().find(|s| s.contains(p)).map(|s| s.id())
    }

    /// First shape (insertion order) whose resize handle contains the point.
    pub fn resize_handle_at(&self, p: Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .find(|s| s.in_resize_handle(p))
            .map(|s| s.id())
    }
}
