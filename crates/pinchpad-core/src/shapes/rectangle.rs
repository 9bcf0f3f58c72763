//! Rectangle shape.

use super::ShapeId;
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Side length of the square resize-handle zone that sits immediately
/// outside a shape's bottom-right corner.
pub const RESIZE_HANDLE_SIZE: f64 = 50.0;

/// An axis-aligned rectangle on the sketch surface.
///
/// Width and height may be negative while a shape is being dragged out
/// towards the top-left; nothing normalizes the sign afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectShape {
    pub(crate) id: ShapeId,
    /// Top-left corner position.
    pub origin: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl RectShape {
    /// Create a new rectangle.
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            width,
            height,
        }
    }

    /// Create a zero-sized rectangle at the given point (start of a draw).
    pub fn at(origin: Point) -> Self {
        Self::new(origin, 0.0, 0.0)
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    /// Strict interior test; points on the boundary are outside.
    ///
    /// Written out explicitly instead of going through [`Rect::contains`],
    /// whose edge semantics are half-open. Trivially false while the extent
    /// is negative.
    pub fn contains(&self, p: Point) -> bool {
        p.x > self.origin.x
            && p.x < self.origin.x + self.width
            && p.y > self.origin.y
            && p.y < self.origin.y + self.height
    }

    /// Test the [`RESIZE_HANDLE_SIZE`] square just outside the bottom-right
    /// corner, bounds excluded.
    pub fn in_resize_handle(&self, p: Point) -> bool {
        let corner = Point::new(self.origin.x + self.width, self.origin.y + self.height);
        p.x > corner.x
            && p.x < corner.x + RESIZE_HANDLE_SIZE
            && p.y > corner.y
            && p.y < corner.y + RESIZE_HANDLE_SIZE
    }

    /// Scale width and height by `factor`, keeping the center point fixed.
    ///
    /// No lower bound is applied; a pinch may shrink a shape to zero or
    /// flip it through negative extents.
    pub fn scale(&mut self, factor: f64) {
        let dw = self.width * (factor - 1.0);
        let dh = self.height * (factor - 1.0);
        self.width += dw;
        self.height += dh;
        self.origin.x -= dw / 2.0;
        self.origin.y -= dh / 2.0;
    }

    /// Translate the origin by `delta`, then clamp it so the shape stays on
    /// a surface of the given size.
    ///
    /// The upper clamp bound is floored at 0: a shape larger than the
    /// surface pins to the surface corner instead of making the clamp range
    /// ill-formed.
    pub fn translate_clamped(&mut self, delta: Vec2, surface: Size) {
        let max_x = (surface.width - self.width).max(0.0);
        let max_y = (surface.height - self.height).max(0.0);
        self.origin.x = (self.origin.x + delta.x).clamp(0.0, max_x);
        self.origin.y = (self.origin.y + delta.y).clamp(0.0, max_y);
    }
}
