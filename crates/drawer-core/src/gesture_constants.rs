//! Shared gesture constants for drawer drag handling.
//!
//! All distances are logical pixels, velocities are px/ms and scale values
//! are multiplicative contributions on top of 1.0.

/// Fraction of the panel's axis size a release must have travelled to close.
pub const CLOSE_PROGRESS_THRESHOLD: f32 = 0.4;

/// Closing velocity (px/ms) that closes a panel even below the progress threshold.
pub const VELOCITY_THRESHOLD: f32 = 0.5;

/// Minimum progress a fast flick needs before the velocity rule applies.
///
/// Keeps a twitch on a stationary finger from dismissing the panel.
pub const VELOCITY_MIN_PROGRESS: f32 = 0.02;

/// Axis movement from the press position before a session may commit.
///
/// Below this distance every event passes through untouched so taps and
/// native scrolling inside the panel keep working.
pub const MOVEMENT_DEADZONE: f32 = 6.0;

/// Maximum elastic stretch while pushing the panel in the closing direction.
pub const MAX_WRONG_STRETCH: f32 = 0.02;

/// Maximum elastic stretch for travel in the opening direction.
pub const MAX_OPENING_STRETCH: f32 = 0.015;

/// Maximum extra stretch once progress goes past a full panel length.
pub const MAX_OVERDRAG_STRETCH: f32 = 0.015;

/// Per-event closing delta at which the effort stretch saturates.
pub const EFFORT_CAP: f32 = 40.0;

/// Wrong-direction travel at which the opening stretch saturates.
pub const ELASTIC_RANGE: f32 = 120.0;

/// Progress past 1.0 at which the over-drag stretch saturates.
pub const OVERDRAG_RANGE: f32 = 0.2;

/// Upper bound for reported progress.
pub const MAX_PROGRESS: f32 = 1.2;

/// Fraction of the starting height a pull from full must cover to close.
pub const CLOSE_FROM_FULL_THRESHOLD: f32 = 0.9;

/// Fraction of the viewport height whose absolute travel always closes a
/// top or bottom panel.
pub const HALF_VIEWPORT_OVERRIDE: f32 = 0.5;

/// Number of velocity samples kept for the release decision.
pub const VELOCITY_WINDOW: usize = 6;

/// Per-tick cap on wheel deltas fed into the height negotiator.
pub const MAX_WHEEL_DELTA: f32 = 120.0;

/// Slack when deciding whether a scroll body sits at one of its edges.
pub const SCROLL_EDGE_TOLERANCE: f32 = 1.0;

/// Animation frames awaited after opening before transitions are enabled.
pub const OPEN_SETTLE_FRAMES: u8 = 2;
