use drawer_core::prelude::*;
use drawer_testing::prelude::*;
use drawer_testing::robot_assertions::{assert_idle, assert_untransformed, assert_within};

const VIEWPORT: Size = Size::new(400.0, 800.0);

fn expandable_sheet() -> (GestureRobot, CallbackLog) {
    let config = DrawerConfig::new(Side::Bottom)
        .with_size(SizeToken::M)
        .with_expand_to_full(true)
        .with_max_expanded_height("calc(100% - 32px)");
    let log = CallbackLog::new();
    let mut robot = GestureRobot::with_callbacks(
        config,
        FakeSurface::bottom_sheet(520.0, VIEWPORT),
        log.callbacks(),
    );
    robot.open();
    (robot, log)
}

fn expandable_top_sheet() -> (GestureRobot, CallbackLog) {
    let config = DrawerConfig::new(Side::Top)
        .with_size(SizeToken::M)
        .with_expand_to_full(true)
        .with_max_expanded_height("calc(100% - 32px)");
    let log = CallbackLog::new();
    let mut robot = GestureRobot::with_callbacks(
        config,
        FakeSurface::top_sheet(520.0, VIEWPORT),
        log.callbacks(),
    );
    robot.open();
    (robot, log)
}

fn side_panel(side: Side) -> (GestureRobot, CallbackLog) {
    let log = CallbackLog::new();
    let mut robot = GestureRobot::with_callbacks(
        DrawerConfig::new(side),
        FakeSurface::side_panel(300.0, VIEWPORT),
        log.callbacks(),
    );
    robot.open();
    (robot, log)
}

#[test]
fn bottom_sheet_drag_open_clamps_at_max() {
    let (mut robot, log) = expandable_sheet();
    assert_eq!(robot.height(), 520.0);

    robot.press(200.0, 700.0);
    robot.move_along((200.0, 100.0), 20, 600.0);
    assert_eq!(robot.height(), 768.0);
    assert!(robot.state().wrong_direction_scale > 1.0);

    robot.release();
    assert_eq!(robot.height(), 768.0);
    assert_eq!(robot.drawer().phase(), DrawerPhase::OpenExpanded);
    assert_idle(&robot.state(), "after release");
    assert!(log.is_empty());
}

#[test]
fn height_stays_within_bounds_for_jagged_drags() {
    let (mut robot, _log) = expandable_sheet();
    robot.press(200.0, 600.0);
    let legs = [
        (450.0, 5),
        (700.0, 7),
        (150.0, 12),
        (620.0, 9),
        (300.0, 4),
        (760.0, 10),
    ];
    for &(y, steps) in &legs {
        robot.move_along((200.0, y), steps, 40.0 * steps as f64);
    }
    assert!(!robot.samples().is_empty());
    for sample in robot.samples() {
        assert_within(sample.height, 520.0, 768.0, 0.0, "height during drag");
        assert!(sample.state.offset >= 0.0);
        assert!(sample.state.wrong_direction_scale >= 1.0);
        assert!(sample.state.wrong_direction_scale <= 1.02 + f32::EPSILON);
    }
    robot.release();
    assert_within(robot.height(), 520.0, 768.0, 0.0, "height after release");
}

#[test]
fn left_panel_closes_at_half_width() {
    let (mut robot, log) = side_panel(Side::Left);
    let disposition = robot.drag((250.0, 400.0), (100.0, 400.0), 10, 600.0);
    assert_eq!(disposition, EventDisposition::Consumed);
    assert_eq!(robot.drawer().phase(), DrawerPhase::Closing);
    assert_eq!(log.entries(), vec![HostCallback::Close]);

    assert!(robot.finish_transition());
    assert_eq!(robot.drawer().phase(), DrawerPhase::Closed);
    assert_eq!(robot.paint(), PanelPaint::HIDDEN);
}

#[test]
fn left_panel_snaps_back_after_short_slow_drag() {
    let (mut robot, log) = side_panel(Side::Left);
    robot.press(250.0, 400.0);
    robot.move_along((200.0, 400.0), 10, 1000.0);
    assert_approx_eq(robot.state().offset, 50.0, 0.01, "offset before release");
    assert_approx_eq(robot.state().progress, 50.0 / 300.0, 0.001, "progress before release");

    robot.release();
    assert_idle(&robot.state(), "after snap back");
    assert_untransformed(&robot.paint(), "after snap back");
    assert_eq!(robot.drawer().phase(), DrawerPhase::OpenCompact);
    assert!(log.is_empty());
}

#[test]
fn progress_threshold_closes_slow_drags() {
    let (mut robot, log) = side_panel(Side::Right);
    robot.drag((60.0, 400.0), (186.0, 400.0), 12, 2400.0);
    assert_eq!(log.count(HostCallback::Close), 1);
}

#[test]
fn fast_flick_closes_below_threshold() {
    let (mut robot, log) = side_panel(Side::Right);
    robot.drag((60.0, 400.0), (90.0, 400.0), 3, 30.0);
    assert_eq!(log.count(HostCallback::Close), 1);
}

#[test]
fn slow_short_drag_does_not_close() {
    let (mut robot, log) = side_panel(Side::Right);
    robot.drag((60.0, 400.0), (90.0, 400.0), 3, 600.0);
    assert!(log.is_empty());
    assert_eq!(robot.drawer().phase(), DrawerPhase::OpenCompact);
}

#[test]
fn opening_direction_passes_through_side_panels() {
    let (mut robot, log) = side_panel(Side::Left);
    robot.press(250.0, 400.0);
    robot.move_along((450.0, 400.0), 10, 200.0);
    for sample in robot.samples() {
        assert_idle(&sample.state, "opening move");
        assert_untransformed(&sample.paint, "opening move");
    }
    assert!(robot.surface().captured.is_empty());
    assert_eq!(robot.release(), EventDisposition::Ignored);
    assert!(log.is_empty());
}

#[test]
fn expand_then_collapse_returns_to_compact_exactly() {
    let (mut robot, _log) = expandable_sheet();
    let compact = robot.height();

    robot.press(200.0, 600.0);
    robot.move_along((200.0, 340.0), 10, 1000.0);
    assert_eq!(robot.height(), 768.0);
    robot.move_along((200.0, 600.0), 10, 1000.0);
    robot.release();

    assert_eq!(robot.height(), compact);
    assert_eq!(robot.drawer().phase(), DrawerPhase::OpenCompact);
}

#[test]
fn cancel_mid_drag_resets_without_callbacks() {
    let (mut robot, log) = side_panel(Side::Left);
    robot.press(250.0, 400.0);
    robot.move_along((170.0, 400.0), 4, 64.0);
    assert_approx_eq(robot.state().offset, 80.0, 0.01, "offset before cancel");

    robot.cancel();
    assert_eq!(robot.state(), DragState::IDLE);
    assert_untransformed(&robot.paint(), "after cancel");
    assert!(robot.paint().transitions_enabled);
    assert!(log.is_empty());
    assert_eq!(robot.surface().released, vec![1]);
}

#[test]
fn strong_pull_from_full_falls_back_to_compact() {
    let (mut robot, log) = expandable_sheet();
    robot.drag((200.0, 600.0), (200.0, 300.0), 10, 800.0);
    assert_eq!(robot.drawer().phase(), DrawerPhase::OpenExpanded);

    robot.drag((200.0, 100.0), (200.0, 480.0), 20, 2000.0);
    assert!(log.is_empty());
    assert_eq!(robot.height(), 520.0);
    assert_eq!(robot.drawer().phase(), DrawerPhase::OpenCompact);
}

#[test]
fn scrolled_body_keeps_the_gesture_at_max() {
    let (mut robot, _log) = expandable_sheet();
    robot.drag((200.0, 600.0), (200.0, 300.0), 10, 800.0);
    robot.surface_mut().metrics = Some(ScrollMetrics::new(240.0, 2000.0, 700.0));
    robot.set_in_scroll_body(true);

    robot.press(200.0, 200.0);
    robot.move_along((200.0, 400.0), 10, 400.0);
    for sample in robot.samples() {
        assert_idle(&sample.state, "body scrolling");
        assert_eq!(sample.height, 768.0);
    }
    assert_eq!(robot.release(), EventDisposition::Ignored);
}

#[test]
fn capture_failure_still_drags() {
    let log = CallbackLog::new();
    let mut robot = GestureRobot::with_callbacks(
        DrawerConfig::new(Side::Left),
        FakeSurface::side_panel(300.0, VIEWPORT).refusing_capture(),
        log.callbacks(),
    );
    robot.open();
    robot.drag((250.0, 400.0), (60.0, 400.0), 8, 400.0);
    assert_eq!(log.count(HostCallback::Close), 1);
}

#[test]
fn missing_panel_skips_events() {
    let (mut robot, log) = side_panel(Side::Left);
    robot.surface_mut().rect = None;
    assert_eq!(robot.press(250.0, 400.0), EventDisposition::Ignored);
    robot.move_along((50.0, 400.0), 5, 100.0);
    robot.release();
    assert!(log.is_empty());
    assert_idle(&robot.state(), "no panel");
}

#[test]
fn slow_short_pull_from_full_falls_back_to_compact() {
    let (mut robot, log) = expandable_sheet();
    robot.drag((200.0, 600.0), (200.0, 300.0), 10, 800.0);
    assert_eq!(robot.height(), 768.0);

    robot.drag((200.0, 300.0), (200.0, 360.0), 6, 1200.0);
    assert_eq!(robot.height(), 520.0);
    assert_eq!(robot.drawer().phase(), DrawerPhase::OpenCompact);
    assert!(log.is_empty());
}

#[test]
fn right_panel_passes_opening_moves_through() {
    let (mut robot, log) = side_panel(Side::Right);
    robot.press(250.0, 400.0);
    robot.move_along((50.0, 400.0), 10, 200.0);
    for sample in robot.samples() {
        assert_idle(&sample.state, "opening move");
        assert_untransformed(&sample.paint, "opening move");
    }
    assert!(robot.surface().captured.is_empty());
    assert_eq!(robot.release(), EventDisposition::Ignored);
    assert!(log.is_empty());
}

#[test]
fn top_sheet_grows_when_dragged_down() {
    let (mut robot, log) = expandable_top_sheet();
    assert_eq!(robot.height(), 520.0);

    robot.press(200.0, 400.0);
    robot.move_along((200.0, 700.0), 10, 600.0);
    assert_eq!(robot.height(), 768.0);
    assert_eq!(robot.state().offset, 0.0);
    assert!(robot.state().wrong_direction_scale > 1.0);
    assert_eq!(robot.paint().translate_y, 0.0);
    assert_eq!(robot.paint().height_px, Some(768.0));

    robot.release();
    assert_eq!(robot.drawer().phase(), DrawerPhase::OpenExpanded);
    assert!(log.is_empty());
}

#[test]
fn top_sheet_shrinks_before_translating_up() {
    let (mut robot, log) = expandable_top_sheet();
    robot.drag((200.0, 400.0), (200.0, 700.0), 10, 600.0);
    assert_eq!(robot.height(), 768.0);

    robot.press(200.0, 700.0);
    robot.move_along((200.0, 280.0), 20, 2000.0);
    assert_eq!(robot.height(), 520.0);
    assert_approx_eq(robot.state().offset, 172.0, 0.05, "translation after shrink");
    assert_approx_eq(robot.state().progress, 172.0 / 520.0, 0.001, "progress after shrink");
    assert_approx_eq(robot.paint().translate_y, -172.0, 0.05, "panel moves up");

    // 420px of travel covers half of the 800px viewport.
    robot.release();
    assert_eq!(robot.drawer().phase(), DrawerPhase::Closing);
    assert_eq!(log.entries(), vec![HostCallback::Close]);
}

#[test]
fn top_sheet_close_decision_from_compact() {
    let (mut robot, log) = expandable_top_sheet();
    robot.drag((200.0, 500.0), (200.0, 400.0), 10, 2000.0);
    assert_eq!(robot.drawer().phase(), DrawerPhase::OpenCompact);
    assert_eq!(robot.height(), 520.0);
    assert!(log.is_empty());

    robot.drag((200.0, 500.0), (200.0, 250.0), 10, 2000.0);
    assert_eq!(robot.drawer().phase(), DrawerPhase::Closing);
    assert_eq!(log.entries(), vec![HostCallback::Close]);
}

#[test]
fn top_sheet_body_absorbs_upward_moves_until_its_bottom() {
    let (mut robot, _log) = expandable_top_sheet();
    robot.drag((200.0, 400.0), (200.0, 700.0), 10, 600.0);
    robot.surface_mut().metrics = Some(ScrollMetrics::new(240.0, 2000.0, 700.0));
    robot.set_in_scroll_body(true);

    robot.press(200.0, 600.0);
    robot.move_along((200.0, 400.0), 10, 400.0);
    for sample in robot.samples() {
        assert_idle(&sample.state, "body scrolling");
        assert_eq!(sample.height, 768.0);
    }
    assert_eq!(robot.release(), EventDisposition::Ignored);

    // Body scrolled to its end: the same motion now drags the panel.
    robot.surface_mut().metrics = Some(ScrollMetrics::new(1300.0, 2000.0, 700.0));
    robot.press(200.0, 600.0);
    robot.move_along((200.0, 560.0), 4, 400.0);
    assert_eq!(robot.height(), 728.0);
    assert!(robot.state().is_dragging);

    robot.release();
    assert_eq!(robot.height(), 520.0);
    assert_eq!(robot.drawer().phase(), DrawerPhase::OpenCompact);
}
