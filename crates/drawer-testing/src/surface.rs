//! In-memory host surface.

use drawer_core::{CaptureError, DrawerSurface, PointerId, ScrollMetrics};
use drawer_geometry::{Rect, Size};

/// Host geometry under test control.
///
/// Every field is public so a test can change the layout between events,
/// e.g. scroll the body or drop the panel ref.
#[derive(Clone, Debug)]
pub struct FakeSurface {
    pub rect: Option<Rect>,
    pub viewport: Size,
    pub metrics: Option<ScrollMetrics>,
    pub header: Option<f32>,
    pub refuse_capture: bool,
    pub captured: Vec<PointerId>,
    pub released: Vec<PointerId>,
}

impl FakeSurface {
    pub fn new(rect: Rect, viewport: Size) -> Self {
        Self {
            rect: Some(rect),
            viewport,
            metrics: None,
            header: None,
            refuse_capture: false,
            captured: Vec::new(),
            released: Vec::new(),
        }
    }

    /// A full-height panel of `width` against the left or right edge.
    pub fn side_panel(width: f32, viewport: Size) -> Self {
        Self::new(Rect::new(0.0, 0.0, width, viewport.height), viewport)
    }

    /// A panel of `height` anchored to the bottom of the viewport.
    pub fn bottom_sheet(height: f32, viewport: Size) -> Self {
        let rect = Rect::new(0.0, viewport.height - height, viewport.width, height);
        Self::new(rect, viewport)
    }

    /// A panel of `height` hanging from the top of the viewport.
    pub fn top_sheet(height: f32, viewport: Size) -> Self {
        Self::new(Rect::new(0.0, 0.0, viewport.width, height), viewport)
    }

    pub fn with_metrics(mut self, metrics: ScrollMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_header(mut self, header: f32) -> Self {
        self.header = Some(header);
        self
    }

    pub fn refusing_capture(mut self) -> Self {
        self.refuse_capture = true;
        self
    }
}

impl DrawerSurface for FakeSurface {
    fn panel_rect(&self) -> Option<Rect> {
        self.rect
    }

    fn scroll_metrics(&self) -> Option<ScrollMetrics> {
        self.metrics
    }

    fn header_height(&self) -> Option<f32> {
        self.header
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn capture_pointer(&mut self, id: PointerId) -> Result<(), CaptureError> {
        if self.refuse_capture {
            return Err(CaptureError::Unsupported);
        }
        self.captured.push(id);
        Ok(())
    }

    fn release_pointer(&mut self, id: PointerId) {
        self.released.push(id);
    }
}
