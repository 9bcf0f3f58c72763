//! Replays a scripted pointer stream against the recording collaborators
//! and logs what each gesture did. Run with `RUST_LOG=debug` to see the
//! controller's own transition logging too.

use kurbo::{Point, Size};
use pinchpad_core::{GestureController, PointerEvent};
use pinchpad_render::{RecordingOverlay, RecordingSurface};

fn main() {
    env_logger::init();
    log::info!("Starting PinchPad scripted demo");

    let surface = RecordingSurface::new(Size::new(800.0, 600.0)).expect("surface size is valid");
    let mut controller = GestureController::new(surface, RecordingOverlay::new());

    // Draw a rectangle on empty surface.
    let script = [
        PointerEvent::Down { id: 1, position: Point::new(100.0, 100.0) },
        PointerEvent::Move { id: 1, position: Point::new(300.0, 250.0) },
        PointerEvent::Up { id: 1 },
        // Grab it and drag it around.
        PointerEvent::Down { id: 2, position: Point::new(200.0, 175.0) },
        PointerEvent::Move { id: 2, position: Point::new(260.0, 215.0) },
        PointerEvent::Up { id: 2 },
        // Pinch it larger with two fingers.
        PointerEvent::Down { id: 3, position: Point::new(230.0, 215.0) },
        PointerEvent::Down { id: 4, position: Point::new(290.0, 215.0) },
        PointerEvent::Move { id: 4, position: Point::new(350.0, 215.0) },
        PointerEvent::Up { id: 3 },
        PointerEvent::Up { id: 4 },
    ];

    for event in script {
        controller.handle_pointer_event(event);
        log::info!(
            "{event:?} -> gesture {:?}, {} shape(s), {} draw command(s)",
            controller.gesture(),
            controller.board().len(),
            controller.surface().display_list().len(),
        );
    }

    if let Some(shape) = controller.board().shapes().first() {
        log::info!(
            "final shape: origin ({:.1}, {:.1}), {:.1} x {:.1}",
            shape.origin.x,
            shape.origin.y,
            shape.width,
            shape.height,
        );
    }

    controller.delete_selected();
    log::info!(
        "after delete: {} shape(s), {} frame(s) rendered",
        controller.board().len(),
        controller.surface().frames(),
    );
}
