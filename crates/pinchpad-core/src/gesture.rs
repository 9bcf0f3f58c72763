//! The gesture state machine.
//!
//! Interprets a stream of pointer events (possibly from several
//! simultaneous contacts) as one of three mutually exclusive gestures
//! applied to the board: drawing a new rectangle, moving one, or resizing
//! one (corner-handle drag or two-finger pinch).
//!
//! Everything here is a pure local state mutation; out-of-protocol event
//! sequences (an up for an untracked contact, a third finger joining a
//! pinch) silently no-op instead of failing.

use crate::board::Board;
use crate::input::{PointerEvent, PointerId, PointerTracker};
use crate::shapes::{RectShape, ShapeId};
use crate::surface::{RenderSurface, SelectionOverlay};
use kurbo::Point;

/// Minimum width/height a shape can be dragged down to via the corner
/// handle. Pinching has no such bound.
pub const MIN_DRAG_SIZE: f64 = 10.0;

/// Pinch reference distances below this are degenerate (both contacts on
/// the same spot) and are re-captured instead of divided by.
pub const PINCH_EPSILON: f64 = 1e-6;

/// The active gesture. At most one applies at any time by construction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No contact is being interpreted.
    #[default]
    Idle,
    /// A fresh rectangle is being dragged out on empty surface.
    Drawing { shape: ShapeId },
    /// A rectangle is being dragged across the surface.
    Moving { shape: ShapeId },
    /// A rectangle is being resized, via the corner handle (one contact) or
    /// a pinch (two contacts).
    Resizing {
        shape: ShapeId,
        /// Reference distance for the next pinch step; `None` until two
        /// contacts have produced one. Each step rebases on the distance it
        /// saw, so scaling is incremental rather than compounding.
        pinch_distance: Option<f64>,
    },
}

/// Owns the board and the live multi-contact state, classifies pointer
/// events into gestures, and drives the injected render surface and
/// selection overlay.
///
/// Single-threaded by design: every event is processed to completion
/// through `&mut self` before the next one is looked at. A multi-threaded
/// host must funnel all pointer events through one queue.
#[derive(Debug)]
pub struct GestureController<S, O> {
    board: Board,
    pointers: PointerTracker,
    gesture: Gesture,
    /// Selection persists across gesture boundaries, until a pointer goes
    /// down on empty surface or the shape is deleted.
    selected: Option<ShapeId>,
    /// Reference point for move-delta computation; reset on every down.
    last_pointer: Point,
    surface: S,
    overlay: O,
}

impl<S: RenderSurface, O: SelectionOverlay> GestureController<S, O> {
    /// Create a controller with an empty board.
    pub fn new(surface: S, overlay: O) -> Self {
        Self::with_board(surface, overlay, Board::new())
    }

    /// Create a controller over an existing board.
    pub fn with_board(surface: S, overlay: O, board: Board) -> Self {
        Self {
            board,
            pointers: PointerTracker::new(),
            gesture: Gesture::Idle,
            selected: None,
            last_pointer: Point::ZERO,
            surface,
            overlay,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active gesture.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// The selected shape, if any.
    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    /// Number of active contacts.
    pub fn active_pointers(&self) -> usize {
        self.pointers.len()
    }

    /// The render surface collaborator.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The selection overlay collaborator.
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// Feed one pointer event through the state machine.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { id, position } => self.on_pointer_down(id, position),
            PointerEvent::Move { id, position } => self.on_pointer_move(id, position),
            PointerEvent::Up { id } | PointerEvent::Cancel { id } => self.on_pointer_up(id),
        }
    }

    /// Remove the selected shape from the board and clear the overlay.
    ///
    /// Complete no-op (no overlay calls, no redraw) when nothing is
    /// selected or the shape is already gone.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected else { return };
        if self.board.remove(id).is_none() {
            return;
        }
        log::debug!("deleted shape {id}");
        self.selected = None;
        self.overlay.hide_outline();
        self.overlay.hide_delete_control();
        self.request_render();
    }

    fn on_pointer_down(&mut self, id: PointerId, position: Point) {
        if matches!(self.gesture, Gesture::Resizing { .. }) && self.pointers.len() >= 2 {
            // Two contacts already drive the resize; later ones take no part.
            return;
        }
        self.pointers.insert(id, position);
        self.last_pointer = position;

        match self.pointers.len() {
            1 => {
                if let Some(shape) = self.board.resize_handle_at(position) {
                    log::debug!("pointer {id} down on resize handle of {shape}");
                    self.gesture = Gesture::Resizing {
                        shape,
                        pinch_distance: None,
                    };
                    self.select(shape);
                } else if let Some(shape) = self.board.shape_at(position) {
                    log::debug!("pointer {id} down inside {shape}");
                    self.gesture = Gesture::Moving { shape };
                    self.select(shape);
                } else {
                    let shape = RectShape::at(position);
                    let shape_id = shape.id();
                    log::debug!("pointer {id} down on empty surface, drawing {shape_id}");
                    self.board.push(shape);
                    self.gesture = Gesture::Drawing { shape: shape_id };
                    self.deselect();
                }
            }
            2 => {
                // A second contact turns a selection into a pinch, but only
                // when both contacts sit inside the selected shape.
                if let Some(selected) = self.selected {
                    let both_inside = self.board.get(selected).is_some_and(|shape| {
                        self.pointers
                            .first_two()
                            .is_some_and(|(a, b)| shape.contains(a) && shape.contains(b))
                    });
                    if both_inside {
                        log::debug!("second pointer {id} down inside {selected}, pinch begins");
                        self.gesture = Gesture::Resizing {
                            shape: selected,
                            pinch_distance: self.pointers.pinch_distance(),
                        };
                    }
                }
            }
            // Three or more contacts never start a gesture.
            _ => {}
        }
        self.request_render();
    }

    fn on_pointer_move(&mut self, id: PointerId, position: Point) {
        if matches!(self.gesture, Gesture::Resizing { .. }) && !self.pointers.contains(id) {
            // A contact that is not part of the resize cannot join it
            // mid-flight.
            return;
        }
        self.pointers.update(id, position);

        match self.gesture {
            Gesture::Resizing {
                shape,
                pinch_distance,
            } => {
                match self.pointers.len() {
                    2 => self.apply_pinch_step(shape, pinch_distance),
                    1 => self.apply_handle_drag(shape, position),
                    _ => {}
                }
                self.refresh_overlay(shape);
                self.request_render();
                return;
            }
            Gesture::Drawing { shape } if self.pointers.len() == 1 => {
                if let Some(rect) = self.board.get_mut(shape) {
                    // Unclamped: drawing towards the top-left goes negative.
                    rect.width = position.x - rect.origin.x;
                    rect.height = position.y - rect.origin.y;
                }
            }
            Gesture::Moving { shape } if self.pointers.len() == 1 => {
                let delta = position - self.last_pointer;
                let surface = self.surface.size();
                if let Some(rect) = self.board.get_mut(shape) {
                    rect.translate_clamped(delta, surface);
                }
                self.last_pointer = position;
                self.refresh_overlay(shape);
            }
            _ => {}
        }
        self.request_render();
    }

    fn on_pointer_up(&mut self, id: PointerId) {
        self.pointers.remove(id);
        if self.pointers.len() < 2 {
            if let Gesture::Resizing {
                shape,
                pinch_distance: Some(_),
            } = self.gesture
            {
                self.gesture = Gesture::Resizing {
                    shape,
                    pinch_distance: None,
                };
            }
        }
        if self.pointers.is_empty() {
            // Selection deliberately survives the gesture.
            log::trace!("last pointer up, gesture ends");
            self.gesture = Gesture::Idle;
        }
    }

    /// One incremental pinch step: scale by the ratio of the current
    /// contact distance to the reference, then rebase the reference.
    fn apply_pinch_step(&mut self, shape: ShapeId, reference: Option<f64>) {
        let Some(current) = self.pointers.pinch_distance() else {
            return;
        };
        match reference {
            Some(initial) if initial > PINCH_EPSILON => {
                let factor = current / initial;
                if let Some(rect) = self.board.get_mut(shape) {
                    rect.scale(factor);
                }
                log::trace!("pinch step on {shape}: factor {factor:.4}");
            }
            // Degenerate or missing reference: start measuring from here.
            _ => {}
        }
        self.gesture = Gesture::Resizing {
            shape,
            pinch_distance: Some(current),
        };
    }

    /// Single-contact corner-handle drag: size follows the contact, floored
    /// at [`MIN_DRAG_SIZE`].
    fn apply_handle_drag(&mut self, shape: ShapeId, position: Point) {
        if let Some(rect) = self.board.get_mut(shape) {
            rect.width = (position.x - rect.origin.x).max(MIN_DRAG_SIZE);
            rect.height = (position.y - rect.origin.y).max(MIN_DRAG_SIZE);
        }
    }

    fn select(&mut self, id: ShapeId) {
        self.selected = Some(id);
        self.refresh_overlay(id);
    }

    fn deselect(&mut self) {
        if self.selected.take().is_some() {
            self.overlay.hide_outline();
            self.overlay.hide_delete_control();
        }
    }

    fn refresh_overlay(&mut self, id: ShapeId) {
        if let Some(shape) = self.board.get(id) {
            self.overlay.show_outline(shape);
            self.overlay.show_delete_control(shape);
        }
    }

    fn request_render(&mut self) {
        self.surface.render_all(self.board.shapes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{delete_control_anchor, outline_rect};
    use kurbo::{Rect, Size};

    #[derive(Debug)]
    struct TestSurface {
        size: Size,
        frames: usize,
    }

    impl TestSurface {
        fn new() -> Self {
            Self {
                size: Size::new(800.0, 600.0),
                frames: 0,
            }
        }
    }

    impl RenderSurface for TestSurface {
        fn size(&self) -> Size {
            self.size
        }

        fn render_all(&mut self, _shapes: &[RectShape]) {
            self.frames += 1;
        }
    }

    #[derive(Debug, Default)]
    struct TestOverlay {
        outline: Option<Rect>,
        delete_control: Option<Point>,
        calls: usize,
    }

    impl SelectionOverlay for TestOverlay {
        fn show_outline(&mut self, shape: &RectShape) {
            self.outline = Some(outline_rect(shape));
            self.calls += 1;
        }

        fn hide_outline(&mut self) {
            self.outline = None;
            self.calls += 1;
        }

        fn show_delete_control(&mut self, shape: &RectShape) {
            self.delete_control = Some(delete_control_anchor(shape));
            self.calls += 1;
        }

        fn hide_delete_control(&mut self) {
            self.delete_control = None;
            self.calls += 1;
        }
    }

    type TestController = GestureController<TestSurface, TestOverlay>;

    fn controller() -> TestController {
        GestureController::new(TestSurface::new(), TestOverlay::default())
    }

    fn controller_with(shapes: Vec<RectShape>) -> TestController {
        let mut board = Board::new();
        for shape in shapes {
            board.push(shape);
        }
        GestureController::with_board(TestSurface::new(), TestOverlay::default(), board)
    }

    fn down(c: &mut TestController, id: PointerId, x: f64, y: f64) {
        c.handle_pointer_event(PointerEvent::Down {
            id,
            position: Point::new(x, y),
        });
    }

    fn mv(c: &mut TestController, id: PointerId, x: f64, y: f64) {
        c.handle_pointer_event(PointerEvent::Move {
            id,
            position: Point::new(x, y),
        });
    }

    fn up(c: &mut TestController, id: PointerId) {
        c.handle_pointer_event(PointerEvent::Up { id });
    }

    #[test]
    fn test_draw_on_empty_surface() {
        let mut c = controller();

        down(&mut c, 1, 10.0, 10.0);
        assert!(matches!(c.gesture(), Gesture::Drawing { .. }));
        assert_eq!(c.board().len(), 1);
        let shape = &c.board().shapes()[0];
        assert_eq!(shape.origin, Point::new(10.0, 10.0));
        assert!((shape.width).abs() < f64::EPSILON);
        assert!((shape.height).abs() < f64::EPSILON);

        mv(&mut c, 1, 60.0, 40.0);
        let shape = &c.board().shapes()[0];
        assert!((shape.width - 50.0).abs() < f64::EPSILON);
        assert!((shape.height - 30.0).abs() < f64::EPSILON);

        up(&mut c, 1);
        assert_eq!(c.gesture(), Gesture::Idle);
        let shape = &c.board().shapes()[0];
        assert!((shape.width - 50.0).abs() < f64::EPSILON);
        assert!((shape.height - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_draw_towards_top_left_goes_negative() {
        let mut c = controller();

        down(&mut c, 1, 100.0, 100.0);
        mv(&mut c, 1, 60.0, 70.0);
        let shape = &c.board().shapes()[0];
        assert!((shape.width + 40.0).abs() < f64::EPSILON);
        assert!((shape.height + 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_move_selected_shape() {
        let rect = RectShape::new(Point::new(0.0, 0.0), 100.0, 100.0);
        let id = rect.id();
        let mut c = controller_with(vec![rect]);

        down(&mut c, 1, 50.0, 50.0);
        assert_eq!(c.gesture(), Gesture::Moving { shape: id });
        assert_eq!(c.selected(), Some(id));

        mv(&mut c, 1, 60.0, 60.0);
        let shape = c.board().get(id).unwrap();
        assert_eq!(shape.origin, Point::new(10.0, 10.0));
        assert!((shape.width - 100.0).abs() < f64::EPSILON);
        assert!((shape.height - 100.0).abs() < f64::EPSILON);

        // Each step is relative to the previous position.
        mv(&mut c, 1, 65.0, 55.0);
        let shape = c.board().get(id).unwrap();
        assert_eq!(shape.origin, Point::new(15.0, 5.0));
    }

    #[test]
    fn test_move_clamps_to_surface_bounds() {
        let rect = RectShape::new(Point::new(0.0, 0.0), 100.0, 100.0);
        let id = rect.id();
        let mut c = controller_with(vec![rect]);

        down(&mut c, 1, 50.0, 50.0);
        mv(&mut c, 1, -500.0, -500.0);
        let shape = c.board().get(id).unwrap();
        assert_eq!(shape.origin, Point::new(0.0, 0.0));

        mv(&mut c, 1, 5000.0, 5000.0);
        let shape = c.board().get(id).unwrap();
        // Surface is 800x600, shape is 100x100.
        assert_eq!(shape.origin, Point::new(700.0, 500.0));
    }

    #[test]
    fn test_handle_drag_resize() {
        let rect = RectShape::new(Point::new(0.0, 0.0), 40.0, 40.0);
        let id = rect.id();
        let mut c = controller_with(vec![rect]);

        // (45, 45) is in the handle zone beyond the bottom-right corner.
        down(&mut c, 1, 45.0, 45.0);
        assert_eq!(
            c.gesture(),
            Gesture::Resizing {
                shape: id,
                pinch_distance: None
            }
        );
        assert_eq!(c.selected(), Some(id));

        mv(&mut c, 1, 20.0, 20.0);
        let shape = c.board().get(id).unwrap();
        assert_eq!(shape.origin, Point::new(0.0, 0.0));
        assert!((shape.width - 20.0).abs() < f64::EPSILON);
        assert!((shape.height - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_handle_drag_floors_at_min_size() {
        let rect = RectShape::new(Point::new(0.0, 0.0), 40.0, 40.0);
        let id = rect.id();
        let mut c = controller_with(vec![rect]);

        down(&mut c, 1, 45.0, 45.0);
        mv(&mut c, 1, 2.0, 80.0);
        let shape = c.board().get(id).unwrap();
        assert!((shape.width - MIN_DRAG_SIZE).abs() < f64::EPSILON);
        assert!((shape.height - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_handle_zone_beats_overlapping_interior() {
        // The handle zone of the first shape overlaps the interior of the
        // second; the handle scan runs first over the whole board.
        let first = RectShape::new(Point::new(0.0, 0.0), 40.0, 40.0);
        let second = RectShape::new(Point::new(41.0, 41.0), 100.0, 100.0);
        let first_id = first.id();
        let mut c = controller_with(vec![first, second]);

        down(&mut c, 1, 45.0, 45.0);
        assert_eq!(
            c.gesture(),
            Gesture::Resizing {
                shape: first_id,
                pinch_distance: None
            }
        );
    }

    #[test]
    fn test_pinch_resize_is_incremental() {
        let rect = RectShape::new(Point::new(0.0, 0.0), 100.0, 100.0);
        let id = rect.id();
        let mut c = controller_with(vec![rect]);

        down(&mut c, 1, 40.0, 50.0);
        assert_eq!(c.gesture(), Gesture::Moving { shape: id });

        down(&mut c, 2, 60.0, 50.0);
        assert_eq!(
            c.gesture(),
            Gesture::Resizing {
                shape: id,
                pinch_distance: Some(20.0)
            }
        );

        // Doubling the distance doubles the shape, centered.
        mv(&mut c, 2, 80.0, 50.0);
        let shape = c.board().get(id).unwrap();
        assert!((shape.width - 200.0).abs() < 1e-9);
        assert!((shape.height - 200.0).abs() < 1e-9);
        assert_eq!(shape.origin, Point::new(-50.0, -50.0));
        assert_eq!(
            c.gesture(),
            Gesture::Resizing {
                shape: id,
                pinch_distance: Some(40.0)
            }
        );

        // The reference was rebased, so an identical move is a no-op.
        mv(&mut c, 2, 80.0, 50.0);
        let shape = c.board().get(id).unwrap();
        assert!((shape.width - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_pinch_requires_both_contacts_inside() {
        let rect = RectShape::new(Point::new(0.0, 0.0), 100.0, 100.0);
        let id = rect.id();
        let mut c = controller_with(vec![rect]);

        down(&mut c, 1, 50.0, 50.0);
        // Second contact lands outside the shape: still moving.
        down(&mut c, 2, 300.0, 300.0);
        assert_eq!(c.gesture(), Gesture::Moving { shape: id });

        // With two contacts down the single-contact move guard blocks
        // dragging, so the shape stays put.
        mv(&mut c, 1, 80.0, 80.0);
        let shape = c.board().get(id).unwrap();
        assert_eq!(shape.origin, Point::new(0.0, 0.0));

        // Lifting the stray contact resumes the drag, but the move
        // reference was rebased to the stray down position (every down
        // records it), so the first step clamps hard against the surface
        // origin before tracking resumes normally.
        up(&mut c, 2);
        mv(&mut c, 1, 90.0, 90.0);
        let shape = c.board().get(id).unwrap();
        assert_eq!(shape.origin, Point::new(0.0, 0.0));
        mv(&mut c, 1, 95.0, 95.0);
        let shape = c.board().get(id).unwrap();
        assert_eq!(shape.origin, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_zero_pinch_distance_is_guarded() {
        let rect = RectShape::new(Point::new(0.0, 0.0), 100.0, 100.0);
        let id = rect.id();
        let mut c = controller_with(vec![rect]);

        down(&mut c, 1, 50.0, 50.0);
        down(&mut c, 2, 50.0, 50.0);
        assert_eq!(
            c.gesture(),
            Gesture::Resizing {
                shape: id,
                pinch_distance: Some(0.0)
            }
        );

        // A degenerate reference is re-captured, not divided by.
        mv(&mut c, 2, 60.0, 50.0);
        let shape = c.board().get(id).unwrap();
        assert!((shape.width - 100.0).abs() < f64::EPSILON);
        assert_eq!(
            c.gesture(),
            Gesture::Resizing {
                shape: id,
                pinch_distance: Some(10.0)
            }
        );

        // From here on scaling applies normally.
        mv(&mut c, 2, 70.0, 50.0);
        let shape = c.board().get(id).unwrap();
        assert!((shape.width - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_third_contact_cannot_join_a_pinch() {
        let rect = RectShape::new(Point::new(0.0, 0.0), 100.0, 100.0);
        let id = rect.id();
        let mut c = controller_with(vec![rect]);

        down(&mut c, 1, 40.0, 50.0);
        down(&mut c, 2, 60.0, 50.0);
        assert!(matches!(c.gesture(), Gesture::Resizing { .. }));

        // The third contact is not even recorded.
        down(&mut c, 3, 50.0, 60.0);
        assert_eq!(c.active_pointers(), 2);

        // Its moves are dropped outright.
        let frames = c.surface().frames;
        mv(&mut c, 3, 10.0, 10.0);
        assert_eq!(c.surface().frames, frames);
        let shape = c.board().get(id).unwrap();
        assert!((shape.width - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pinch_collapses_to_handle_drag_when_finger_lifts() {
        let rect = RectShape::new(Point::new(0.0, 0.0), 100.0, 100.0);
        let id = rect.id();
        let mut c = controller_with(vec![rect]);

        down(&mut c, 1, 40.0, 50.0);
        down(&mut c, 2, 60.0, 50.0);
        up(&mut c, 1);
        // Still resizing, but the pinch reference is gone.
        assert_eq!(
            c.gesture(),
            Gesture::Resizing {
                shape: id,
                pinch_distance: None
            }
        );

        // The remaining contact drives the corner handle directly.
        mv(&mut c, 2, 30.0, 40.0);
        let shape = c.board().get(id).unwrap();
        assert!((shape.width - 30.0).abs() < f64::EPSILON);
        assert!((shape.height - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_selection_persists_across_gestures() {
        let rect = RectShape::new(Point::new(0.0, 0.0), 100.0, 100.0);
        let id = rect.id();
        let mut c = controller_with(vec![rect]);

        down(&mut c, 1, 50.0, 50.0);
        up(&mut c, 1);
        assert_eq!(c.gesture(), Gesture::Idle);
        assert_eq!(c.selected(), Some(id));
        assert!(c.overlay().outline.is_some());
    }

    #[test]
    fn test_empty_surface_down_drops_selection() {
        let rect = RectShape::new(Point::new(0.0, 0.0), 100.0, 100.0);
        let mut c = controller_with(vec![rect]);

        down(&mut c, 1, 50.0, 50.0);
        up(&mut c, 1);
        assert!(c.selected().is_some());

        down(&mut c, 1, 400.0, 400.0);
        assert!(c.selected().is_none());
        assert!(c.overlay().outline.is_none());
        assert!(c.overlay().delete_control.is_none());
        assert!(matches!(c.gesture(), Gesture::Drawing { .. }));
    }

    #[test]
    fn test_delete_selected() {
        let rect = RectShape::new(Point::new(0.0, 0.0), 100.0, 100.0);
        let mut c = controller_with(vec![rect]);

        down(&mut c, 1, 50.0, 50.0);
        up(&mut c, 1);

        c.delete_selected();
        assert!(c.board().is_empty());
        assert!(c.selected().is_none());
        assert!(c.overlay().outline.is_none());
        assert!(c.overlay().delete_control.is_none());
    }

    #[test]
    fn test_delete_without_selection_is_silent() {
        let rect = RectShape::new(Point::new(0.0, 0.0), 100.0, 100.0);
        let mut c = controller_with(vec![rect]);

        let frames = c.surface().frames;
        let overlay_calls = c.overlay().calls;
        c.delete_selected();
        assert_eq!(c.board().len(), 1);
        assert_eq!(c.surface().frames, frames);
        assert_eq!(c.overlay().calls, overlay_calls);
    }

    #[test]
    fn test_up_for_untracked_contact_is_silent() {
        let mut c = controller();
        up(&mut c, 99);
        assert_eq!(c.gesture(), Gesture::Idle);
        assert_eq!(c.active_pointers(), 0);
    }

    #[test]
    fn test_cancel_behaves_like_up() {
        let mut c = controller();
        down(&mut c, 1, 10.0, 10.0);
        c.handle_pointer_event(PointerEvent::Cancel { id: 1 });
        assert_eq!(c.gesture(), Gesture::Idle);
        assert_eq!(c.active_pointers(), 0);
    }

    #[test]
    fn test_overlay_tracks_shape_during_move() {
        let rect = RectShape::new(Point::new(0.0, 0.0), 100.0, 100.0);
        let mut c = controller_with(vec![rect]);

        down(&mut c, 1, 50.0, 50.0);
        mv(&mut c, 1, 60.0, 60.0);

        // Shape is now at (10, 10); outline sits 5 outside, the delete
        // control 20 above the top-right corner.
        let outline = c.overlay().outline.unwrap();
        assert!((outline.x0 - 5.0).abs() < f64::EPSILON);
        assert!((outline.y0 - 5.0).abs() < f64::EPSILON);
        let anchor = c.overlay().delete_control.unwrap();
        assert_eq!(anchor, Point::new(110.0, -10.0));
    }

    #[test]
    fn test_every_move_triggers_a_redraw() {
        let mut c = controller();
        down(&mut c, 1, 10.0, 10.0);
        let frames = c.surface().frames;
        mv(&mut c, 1, 20.0, 20.0);
        mv(&mut c, 1, 30.0, 30.0);
        assert_eq!(c.surface().frames, frames + 2);
    }

    #[test]
    fn test_gestures_stay_exclusive_through_a_session() {
        let rect = RectShape::new(Point::new(200.0, 200.0), 100.0, 100.0);
        let id = rect.id();
        let mut c = controller_with(vec![rect]);

        // Draw, then move, then pinch, checking one state at every step.
        down(&mut c, 1, 10.0, 10.0);
        assert!(matches!(c.gesture(), Gesture::Drawing { .. }));
        mv(&mut c, 1, 50.0, 50.0);
        up(&mut c, 1);
        assert_eq!(c.gesture(), Gesture::Idle);

        down(&mut c, 1, 250.0, 250.0);
        assert_eq!(c.gesture(), Gesture::Moving { shape: id });
        down(&mut c, 2, 260.0, 260.0);
        assert!(matches!(c.gesture(), Gesture::Resizing { .. }));

        up(&mut c, 1);
        up(&mut c, 2);
        assert_eq!(c.gesture(), Gesture::Idle);
        assert_eq!(c.selected(), Some(id));
    }
}
