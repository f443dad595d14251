//! The single drag session owned by a gesture controller.

use crate::event::PointerId;
use crate::velocity::VelocityWindow;
use drawer_geometry::{Axis, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Watching movement; native scroll and clicks pass through.
    Tracking,
    /// Committed to a drag; the engine owns the panel's inline style.
    Committed,
    /// Cross-axis movement won; ignored until the pointer lifts.
    Abandoned,
}

/// State of one press-move-release sequence.
///
/// `applied_shrink` is the net height removed since the press and goes
/// negative when the panel grew. `resisted_distance` holds closing travel
/// that could not translate the panel (close gestures disabled or docked)
/// and `elastic_distance` holds opening travel past every real bound.
#[derive(Clone, Debug)]
pub struct DragSession {
    pub pointer_id: PointerId,
    pub axis: Axis,
    pub phase: SessionPhase,
    pub start_point: Point,
    pub start_time: f64,
    pub last_point: Point,
    pub last_time: f64,
    pub velocity: VelocityWindow,
    pub applied_shrink: f32,
    pub applied_translate: f32,
    pub resisted_distance: f32,
    pub elastic_distance: f32,
    /// Closing delta of the latest committed move, zero after opening moves.
    pub last_effort: f32,
    pub height_at_start: f32,
    pub axis_size_at_start: f32,
    pub started_at_max: bool,
    pub started_inside_scrollable_body: bool,
}

impl DragSession {
    pub fn new(
        pointer_id: PointerId,
        axis: Axis,
        point: Point,
        time: f64,
        height_at_start: f32,
        axis_size_at_start: f32,
    ) -> Self {
        Self {
            pointer_id,
            axis,
            phase: SessionPhase::Tracking,
            start_point: point,
            start_time: time,
            last_point: point,
            last_time: time,
            velocity: VelocityWindow::new(),
            applied_shrink: 0.0,
            applied_translate: 0.0,
            resisted_distance: 0.0,
            elastic_distance: 0.0,
            last_effort: 0.0,
            height_at_start,
            axis_size_at_start,
            started_at_max: false,
            started_inside_scrollable_body: false,
        }
    }

    pub fn is_committed(&self) -> bool {
        self.phase == SessionPhase::Committed
    }

    /// Everything the finger achieved toward closed: height given up plus
    /// translation.
    pub fn total_close(&self) -> f32 {
        self.applied_shrink.max(0.0) + self.applied_translate
    }
}
