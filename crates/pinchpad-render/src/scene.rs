//! Display-list scene building.

use kurbo::{Point, Rect};
use pinchpad_core::shapes::RectShape;
use pinchpad_core::surface::{delete_control_anchor, outline_rect};

/// Side length of the visual marker drawn at a shape's bottom-right corner.
///
/// Purely visual; the interactive handle zone around that corner is larger
/// (see [`pinchpad_core::RESIZE_HANDLE_SIZE`]).
pub const CORNER_MARKER_SIZE: f64 = 10.0;

/// One drawing primitive of a rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled body of a shape.
    FillRect(Rect),
    /// The square marker at a shape's bottom-right corner.
    CornerMarker(Rect),
    /// Selection outline, already grown by the overlay margin.
    Outline(Rect),
    /// Delete control anchored above the selected shape's top-right corner.
    DeleteControl(Point),
}

/// Build the shape pass of a frame: every shape as a filled rectangle plus
/// its corner marker, in insertion order.
pub fn shape_pass(shapes: &[RectShape]) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(shapes.len() * 2);
    for shape in shapes {
        commands.push(DrawCommand::FillRect(shape.as_rect()));
        commands.push(DrawCommand::CornerMarker(corner_marker(shape)));
    }
    commands
}

/// Build the overlay pass for the selected shape.
pub fn overlay_pass(selected: &RectShape) -> Vec<DrawCommand> {
    vec![
        DrawCommand::Outline(outline_rect(selected)),
        DrawCommand::DeleteControl(delete_control_anchor(selected)),
    ]
}

/// Build the display list for a full frame: the shape pass followed by the
/// overlay pass for the selected shape, if any.
pub fn build_scene(shapes: &[RectShape], selected: Option<&RectShape>) -> Vec<DrawCommand> {
    let mut commands = shape_pass(shapes);
    if let Some(shape) = selected {
        commands.extend(overlay_pass(shape));
    }
    commands
}

/// Marker rect centered on the shape's bottom-right corner.
pub fn corner_marker(shape: &RectShape) -> Rect {
    let corner = Point::new(shape.origin.x + shape.width, shape.origin.y + shape.height);
    let half = CORNER_MARKER_SIZE / 2.0;
    Rect::new(
        corner.x - half,
        corner.y - half,
        corner.x + half,
        corner.y + half,
    )
}
