//! Shape definitions for the sketch surface.

mod rectangle;

pub use rectangle::{RectShape, RESIZE_HANDLE_SIZE};

use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;
