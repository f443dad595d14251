//! Assertion utilities for gesture tests

use drawer_core::{DragState, PanelPaint};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a drag state is back at rest.
pub fn assert_idle(state: &DragState, msg: &str) {
    assert!(
        state.is_idle(),
        "{}: expected idle drag state, got {:?}",
        msg,
        state
    );
}

/// Assert that the panel paint carries no drag feedback.
pub fn assert_untransformed(paint: &PanelPaint, msg: &str) {
    assert!(
        !paint.is_transformed(),
        "{}: expected no transform, got {:?}",
        msg,
        paint
    );
}

/// Assert `low <= value <= high`, with `tolerance` slack on both ends.
pub fn assert_within(value: f32, low: f32, high: f32, tolerance: f32, msg: &str) {
    assert!(
        value >= low - tolerance && value <= high + tolerance,
        "{}: {} outside [{}, {}]",
        msg,
        value,
        low,
        high
    );
}
