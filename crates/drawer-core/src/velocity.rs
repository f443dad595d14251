//! Rolling velocity window for release decisions.
//!
//! Unlike a fling tracker, the drawer only needs the fastest recent closing
//! motion, so samples are plain per-event velocities (px/ms, positive toward
//! closed) in a short ring.

use crate::gesture_constants::VELOCITY_WINDOW;
use smallvec::SmallVec;

#[derive(Clone, Debug, Default)]
pub struct VelocityWindow {
    samples: SmallVec<[f32; VELOCITY_WINDOW]>,
}

impl VelocityWindow {
    pub fn new() -> Self {
        Self {
            samples: SmallVec::new(),
        }
    }

    /// Records a projected movement of `delta` pixels over `elapsed_ms`.
    ///
    /// Non-positive intervals (coalesced or out-of-order events) are dropped.
    pub fn add_movement(&mut self, delta: f32, elapsed_ms: f64) {
        if !(elapsed_ms > 0.0) || !delta.is_finite() {
            return;
        }
        self.push((delta as f64 / elapsed_ms) as f32);
    }

    pub fn push(&mut self, velocity: f32) {
        if self.samples.len() == VELOCITY_WINDOW {
            self.samples.remove(0);
        }
        self.samples.push(velocity);
    }

    /// Fastest closing velocity in the window, never negative.
    pub fn max_closing_velocity(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |max, &v| max.max(v))
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window_reports_zero() {
        let window = VelocityWindow::new();
        assert_eq!(window.max_closing_velocity(), 0.0);
    }

    #[test]
    fn keeps_only_latest_samples() {
        let mut window = VelocityWindow::new();
        for v in 1..=8 {
            window.push(v as f32);
        }
        assert_eq!(window.len(), VELOCITY_WINDOW);
        assert_eq!(window.samples()[0], 3.0);
        assert_eq!(window.max_closing_velocity(), 8.0);
    }

    #[test]
    fn opening_motion_never_counts() {
        let mut window = VelocityWindow::new();
        window.add_movement(-30.0, 10.0);
        window.add_movement(-5.0, 16.0);
        assert_eq!(window.max_closing_velocity(), 0.0);
    }

    #[test]
    fn zero_interval_is_dropped() {
        let mut window = VelocityWindow::new();
        window.add_movement(20.0, 0.0);
        window.add_movement(20.0, -4.0);
        assert!(window.is_empty());

        window.add_movement(20.0, 16.0);
        assert_eq!(window.max_closing_velocity(), 1.25);

        window.reset();
        assert!(window.is_empty());
    }
}
