//! Release decision for a committed drag.
//!
//! Rules run in a fixed order:
//! 1. progress threshold or a fast flick closes;
//! 2. a pull that started at max height either covers nearly the whole
//!    height and closes, or falls back to compact;
//! 3. on top/bottom panels, absolute travel of half the viewport always closes;
//! 4. anything else settles on the nearer height bound.
//!
//! Rules 2 and 3 are independent heuristics and can disagree; 3 wins.

use crate::gesture_constants::{
    CLOSE_FROM_FULL_THRESHOLD, CLOSE_PROGRESS_THRESHOLD, HALF_VIEWPORT_OVERRIDE,
    VELOCITY_MIN_PROGRESS, VELOCITY_THRESHOLD,
};
use drawer_geometry::Side;

/// Terminal action of a drag session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapDecision {
    /// Dismiss the panel.
    Close,
    /// Collapse to the header instead of closing.
    Dock,
    /// Settle at the compact height.
    SnapCompact,
    /// Settle at the max expanded height.
    SnapExpanded,
    /// Spring back to where the panel was; no height change.
    Return,
    /// Leave the docked state.
    Restore,
}

impl SnapDecision {
    pub fn is_dismissal(self) -> bool {
        matches!(self, SnapDecision::Close | SnapDecision::Dock)
    }
}

/// Everything the resolver needs from a finished session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapInput {
    pub side: Side,
    pub total_close: f32,
    pub axis_size: f32,
    pub max_velocity: f32,
    pub height_at_start: f32,
    pub started_at_max: bool,
    pub expansion_enabled: bool,
    pub viewport_height: f32,
    pub current_height: f32,
    pub compact_height: f32,
    pub max_height: f32,
    pub close_allowed: bool,
    pub dock_on_close: bool,
}

pub struct SnapResolver;

impl SnapResolver {
    pub fn resolve(input: &SnapInput) -> SnapDecision {
        let progress = if input.axis_size > 0.0 {
            input.total_close / input.axis_size
        } else {
            0.0
        };
        let max_velocity = input.max_velocity.max(0.0);

        let mut should_close = Self::passes_threshold(progress, max_velocity);
        let mut fall_back_to_compact = false;

        if input.side.is_vertical() && input.expansion_enabled && input.started_at_max {
            should_close = Self::pull_from_full_closes(input.total_close, input.height_at_start);
            fall_back_to_compact = !should_close;
        }

        if input.side.is_vertical()
            && Self::covers_half_viewport(input.total_close, input.viewport_height)
        {
            should_close = true;
        }

        let decision = if should_close && input.close_allowed {
            if input.dock_on_close {
                SnapDecision::Dock
            } else {
                SnapDecision::Close
            }
        } else if fall_back_to_compact {
            SnapDecision::SnapCompact
        } else if input.expansion_enabled {
            let midpoint = (input.compact_height + input.max_height) * 0.5;
            if input.current_height >= midpoint {
                SnapDecision::SnapExpanded
            } else {
                SnapDecision::SnapCompact
            }
        } else {
            SnapDecision::Return
        };

        log::debug!(
            "snap: progress={progress:.3} velocity={max_velocity:.3}px/ms total_close={:.1} -> {decision:?}",
            input.total_close
        );
        decision
    }

    /// Progress alone, or a flick with a minimum of progress.
    pub fn passes_threshold(progress: f32, max_velocity: f32) -> bool {
        progress >= CLOSE_PROGRESS_THRESHOLD
            || (max_velocity >= VELOCITY_THRESHOLD && progress >= VELOCITY_MIN_PROGRESS)
    }

    /// Whether a pull that started at max height covered enough of it to close.
    pub fn pull_from_full_closes(total_close: f32, height_at_start: f32) -> bool {
        height_at_start > 0.0 && total_close / height_at_start >= CLOSE_FROM_FULL_THRESHOLD
    }

    pub fn covers_half_viewport(total_close: f32, viewport_height: f32) -> bool {
        viewport_height > 0.0 && total_close >= HALF_VIEWPORT_OVERRIDE * viewport_height
    }
}

#[cfg(test)]
#[path = "tests/snap_tests.rs"]
mod tests;
