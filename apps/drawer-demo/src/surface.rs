use drawer_core::{CaptureError, DrawerSurface, PanelPaint, PointerId, ScrollMetrics, Side};
use drawer_geometry::{Rect, Size};

/// Host geometry for the scripted runs: a panel against one viewport edge
/// whose rect follows the height the engine asks for.
pub struct DemoSurface {
    side: Side,
    viewport: Size,
    extent: f32,
    header: Option<f32>,
    body: Option<ScrollMetrics>,
    captured: Option<PointerId>,
}

impl DemoSurface {
    pub fn new(side: Side, viewport: Size, extent: f32) -> Self {
        Self {
            side,
            viewport,
            extent,
            header: None,
            body: None,
            captured: None,
        }
    }

    pub fn with_header(mut self, header: f32) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_body(mut self, body: ScrollMetrics) -> Self {
        self.body = Some(body);
        self
    }

    /// Applies the engine's height instruction to the panel rect.
    pub fn sync(&mut self, paint: &PanelPaint) {
        if let Some(height) = paint.height_px {
            self.extent = height;
        }
    }
}

impl DrawerSurface for DemoSurface {
    fn panel_rect(&self) -> Option<Rect> {
        let Size { width, height } = self.viewport;
        let rect = match self.side {
            Side::Left => Rect::new(0.0, 0.0, self.extent, height),
            Side::Right => Rect::new(width - self.extent, 0.0, self.extent, height),
            Side::Top => Rect::new(0.0, 0.0, width, self.extent),
            Side::Bottom => Rect::new(0.0, height - self.extent, width, self.extent),
        };
        Some(rect)
    }

    fn scroll_metrics(&self) -> Option<ScrollMetrics> {
        self.body
    }

    fn header_height(&self) -> Option<f32> {
        self.header
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn capture_pointer(&mut self, id: PointerId) -> Result<(), CaptureError> {
        if let Some(active) = self.captured {
            if active != id {
                return Err(CaptureError::InvalidPointer(id));
            }
        }
        log::debug!("pointer {id} captured");
        self.captured = Some(id);
        Ok(())
    }

    fn release_pointer(&mut self, id: PointerId) {
        if self.captured == Some(id) {
            log::debug!("pointer {id} released");
            self.captured = None;
        }
    }
}
