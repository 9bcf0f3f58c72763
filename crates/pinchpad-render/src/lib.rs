//! PinchPad Render
//!
//! Headless rendering collaborators for the PinchPad gesture core: a
//! display-list scene builder plus recording implementations of the render
//! surface and selection overlay traits, for tests, tooling, and embedders
//! that bring their own raster backend.

pub mod scene;
pub mod surface;

pub use scene::{
    build_scene, corner_marker, overlay_pass, shape_pass, DrawCommand, CORNER_MARKER_SIZE,
};
pub use surface::{RecordingOverlay, RecordingSurface, RenderError};
