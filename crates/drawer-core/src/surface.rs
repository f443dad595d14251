//! Host geometry and pointer capture, as seen by the engine.

use crate::event::PointerId;
use crate::gesture_constants::SCROLL_EDGE_TOLERANCE;
use drawer_geometry::{Rect, Size};
use std::fmt;

/// Scroll position of the panel's scrollable body.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub client_height: f32,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f32, scroll_height: f32, client_height: f32) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    pub fn max_scroll(&self) -> f32 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    pub fn at_top(&self) -> bool {
        self.scroll_top <= SCROLL_EDGE_TOLERANCE
    }

    pub fn at_bottom(&self) -> bool {
        self.scroll_top >= self.max_scroll() - SCROLL_EDGE_TOLERANCE
    }

    /// Whether the body would scroll in response to a finger moving by
    /// `finger_dy` on screen.
    ///
    /// A finger moving down pulls content toward its start, so it is
    /// absorbed unless the body already sits at the top; moving up is
    /// absorbed unless the body sits at the bottom.
    pub fn can_absorb(&self, finger_dy: f32) -> bool {
        if finger_dy > 0.0 {
            !self.at_top()
        } else if finger_dy < 0.0 {
            !self.at_bottom()
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    Unsupported,
    InvalidPointer(PointerId),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Unsupported => write!(f, "pointer capture is not supported"),
            CaptureError::InvalidPointer(id) => write!(f, "pointer {id} is not active"),
        }
    }
}

impl std::error::Error for CaptureError {}

/// Live geometry and pointer capture supplied by the host.
///
/// Returning `None` from a geometry query means the element is not mounted;
/// the engine skips the event in that case.
pub trait DrawerSurface {
    /// Bounding rect of the panel element.
    fn panel_rect(&self) -> Option<Rect>;

    /// Scroll position of the scrollable body, if the panel has one.
    fn scroll_metrics(&self) -> Option<ScrollMetrics> {
        None
    }

    /// Measured height of the panel header, used when docking.
    fn header_height(&self) -> Option<f32> {
        None
    }

    fn viewport(&self) -> Size;

    fn capture_pointer(&mut self, id: PointerId) -> Result<(), CaptureError>;

    fn release_pointer(&mut self, _id: PointerId) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_use_tolerance() {
        let metrics = ScrollMetrics::new(0.5, 1000.0, 400.0);
        assert!(metrics.at_top());
        assert!(!metrics.at_bottom());

        let bottom = ScrollMetrics::new(599.5, 1000.0, 400.0);
        assert!(bottom.at_bottom());
    }

    #[test]
    fn short_content_sits_at_both_edges() {
        let metrics = ScrollMetrics::new(0.0, 300.0, 400.0);
        assert_eq!(metrics.max_scroll(), 0.0);
        assert!(metrics.at_top() && metrics.at_bottom());
        assert!(!metrics.can_absorb(12.0));
        assert!(!metrics.can_absorb(-12.0));
    }

    #[test]
    fn absorption_follows_finger_direction() {
        let middle = ScrollMetrics::new(200.0, 1000.0, 400.0);
        assert!(middle.can_absorb(10.0));
        assert!(middle.can_absorb(-10.0));

        let top = ScrollMetrics::new(0.0, 1000.0, 400.0);
        assert!(!top.can_absorb(10.0));
        assert!(top.can_absorb(-10.0));
        assert!(!top.can_absorb(0.0));
    }
}
