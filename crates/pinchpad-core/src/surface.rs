//! Contracts for the external collaborators: the render surface and the
//! selection overlay with its delete affordance.

use crate::shapes::RectShape;
use kurbo::{Point, Rect, Size};

/// Distance between a shape's bounds and its selection outline, on all sides.
pub const OUTLINE_MARGIN: f64 = 5.0;

/// Distance above a shape's top-right corner at which the delete control
/// sits.
pub const DELETE_CONTROL_OFFSET: f64 = 20.0;

/// The drawing surface.
///
/// `render_all` is invoked after every state-mutating pointer event and is
/// expected to clear the surface and redraw every shape as a filled
/// rectangle with a small marker at its bottom-right corner.
pub trait RenderSurface {
    /// Surface bounds; shapes cannot be moved outside them.
    fn size(&self) -> Size;

    /// Clear and redraw every shape, in insertion order.
    fn render_all(&mut self, shapes: &[RectShape]);
}

/// The selection overlay and its delete affordance.
///
/// The `show_*` methods double as position updates while the selected shape
/// is being moved or resized. Activating the delete control is the host's
/// concern; it calls back into
/// [`GestureController::delete_selected`](crate::gesture::GestureController::delete_selected).
pub trait SelectionOverlay {
    /// Position the outline around the given shape.
    fn show_outline(&mut self, shape: &RectShape);

    /// Remove the outline.
    fn hide_outline(&mut self);

    /// Position the delete control above the shape's top-right corner.
    fn show_delete_control(&mut self, shape: &RectShape);

    /// Remove the delete control.
    fn hide_delete_control(&mut self);
}

/// Rectangle of the selection outline: the shape bounds grown by
/// [`OUTLINE_MARGIN`] on all sides.
pub fn outline_rect(shape: &RectShape) -> Rect {
    shape.as_rect().inflate(OUTLINE_MARGIN, OUTLINE_MARGIN)
}

/// Anchor point of the delete control: [`DELETE_CONTROL_OFFSET`] above the
/// shape's top-right corner.
pub fn delete_control_anchor(shape: &RectShape) -> Point {
    Point::new(
        shape.origin.x + shape.width,
        shape.origin.y - DELETE_CONTROL_OFFSET,
    )
}
