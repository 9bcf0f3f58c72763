//! Recording implementations of the core's collaborator traits.

use crate::scene::{shape_pass, DrawCommand};
use kurbo::{Point, Rect, Size};
use pinchpad_core::shapes::RectShape;
use pinchpad_core::surface::{
    delete_control_anchor, outline_rect, RenderSurface, SelectionOverlay,
};
use thiserror::Error;

/// Render surface errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid surface size: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// A headless render surface that keeps the display list of the last frame.
///
/// Stands in for a real raster target in tests and tooling; embedders can
/// replay [`DrawCommand`]s against whatever backend they have.
#[derive(Debug)]
pub struct RecordingSurface {
    size: Size,
    frames: u64,
    display_list: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create a surface of the given size.
    ///
    /// The size must be finite and strictly positive in both dimensions.
    pub fn new(size: Size) -> Result<Self, RenderError> {
        if !(size.width.is_finite() && size.height.is_finite())
            || size.width <= 0.0
            || size.height <= 0.0
        {
            return Err(RenderError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self {
            size,
            frames: 0,
            display_list: Vec::new(),
        })
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Display list of the most recent frame.
    pub fn display_list(&self) -> &[DrawCommand] {
        &self.display_list
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn render_all(&mut self, shapes: &[RectShape]) {
        self.frames += 1;
        self.display_list = shape_pass(shapes);
    }
}

/// A headless selection overlay that records what it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingOverlay {
    outline: Option<Rect>,
    delete_control: Option<Point>,
    calls: u64,
}

impl RecordingOverlay {
    /// Create an overlay with nothing shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rectangle of the outline currently shown, if any.
    pub fn outline(&self) -> Option<Rect> {
        self.outline
    }

    /// Anchor of the delete control currently shown, if any.
    pub fn delete_control(&self) -> Option<Point> {
        self.delete_control
    }

    /// Total number of overlay calls received (shows and hides alike).
    pub fn calls(&self) -> u64 {
        self.calls
    }
}

impl SelectionOverlay for RecordingOverlay {
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
