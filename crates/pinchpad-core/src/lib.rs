//! PinchPad Core Library
//!
//! Platform-agnostic gesture interpretation and rectangle geometry for the
//! PinchPad sketch surface. A stream of pointer events from mouse, touch, or
//! pen contacts (possibly several at once) is classified into draw, move, and
//! resize gestures applied to an ordered collection of rectangles. Rendering
//! and the selection overlay are reached through the traits in [`surface`].

pub mod board;
pub mod gesture;
pub mod input;
pub mod shapes;
pub mod surface;

pub use board::Board;
pub use gesture::{Gesture, GestureController, MIN_DRAG_SIZE, PINCH_EPSILON};
pub use input::{PointerEvent, PointerId, PointerTracker};
pub use shapes::{RectShape, ShapeId, RESIZE_HANDLE_SIZE};
pub use surface::{
    delete_control_anchor, outline_rect, RenderSurface, SelectionOverlay, DELETE_CONTROL_OFFSET,
    OUTLINE_MARGIN,
};
