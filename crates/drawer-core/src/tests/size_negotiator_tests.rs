use super::*;
use crate::config::{DrawerConfig, SizeToken};
use drawer_geometry::Side;

fn bottom_sheet(max: &str) -> SizeNegotiator {
    let config = DrawerConfig::new(Side::Bottom)
        .with_size(SizeToken::M)
        .with_expand_to_full(true)
        .with_max_expanded_height(max);
    SizeNegotiator::new(&config, 800.0)
}

#[test]
fn compact_height_comes_from_size_token() {
    let sizes = bottom_sheet("calc(100% - 32px)");
    assert_eq!(sizes.compact_height_px(), 520.0);
    assert_eq!(sizes.max_height_px(), 768.0);
    assert_eq!(sizes.current_height_px(), 520.0);
}

#[test]
fn compact_height_never_exceeds_first_measured_base() {
    let mut sizes = bottom_sheet("90vh");
    sizes.record_base_height(400.0);
    assert_eq!(sizes.compact_height_px(), 400.0);
    assert_eq!(sizes.current_height_px(), 400.0);

    // Later measurements are ignored.
    sizes.record_base_height(300.0);
    assert_eq!(sizes.base_height(), Some(400.0));
    assert_eq!(sizes.compact_height_px(), 400.0);
}

#[test]
fn unparseable_max_falls_back_to_viewport() {
    let sizes = bottom_sheet("almost everything");
    assert_eq!(sizes.max_height_px(), 800.0);
}

#[test]
fn max_below_compact_is_raised_to_compact() {
    let sizes = bottom_sheet("100px");
    assert_eq!(sizes.max_height_px(), sizes.compact_height_px());
    assert!(sizes.is_at_max());
}

#[test]
fn set_height_clamps_to_bounds() {
    let mut sizes = bottom_sheet("calc(100% - 32px)");
    assert_eq!(sizes.set_height(2000.0), 768.0);
    assert_eq!(sizes.set_height(10.0), 520.0);
    assert_eq!(sizes.set_height(600.0), 600.0);
    assert_eq!(sizes.set_height(f32::NAN), 600.0);
}

#[test]
fn shrink_and_grow_report_consumption() {
    let mut sizes = bottom_sheet("calc(100% - 32px)");
    assert_eq!(sizes.grow_by(100.0), 100.0);
    assert_eq!(sizes.grow_by(500.0), 148.0);
    assert!(sizes.is_at_max());

    assert_eq!(sizes.shrink_by(48.0), 48.0);
    assert_eq!(sizes.shrink_by(1000.0), 200.0);
    assert_eq!(sizes.current_height_px(), 520.0);
    assert!(sizes.is_at_compact());
}

#[test]
fn disabled_expansion_pins_height() {
    let config = DrawerConfig::new(Side::Bottom).with_size(SizeToken::L);
    let mut sizes = SizeNegotiator::new(&config, 1000.0);
    assert_eq!(sizes.compact_height_px(), 800.0);
    assert_eq!(sizes.max_height_px(), 800.0);
    assert_eq!(sizes.grow_by(50.0), 0.0);
    assert_eq!(sizes.set_height(900.0), 800.0);
    assert!(!sizes.is_at_max());
}

#[test]
fn snap_to_nearest_uses_midpoint() {
    let mut sizes = bottom_sheet("calc(100% - 32px)");
    sizes.set_height(650.0);
    assert!(sizes.snap_to_nearest());
    assert_eq!(sizes.current_height_px(), 768.0);

    sizes.set_height(640.0);
    assert!(!sizes.snap_to_nearest());
    assert_eq!(sizes.current_height_px(), 520.0);
}

#[test]
fn viewport_change_reclamps() {
    let mut sizes = bottom_sheet("calc(100% - 32px)");
    sizes.snap_to_max();
    sizes.set_viewport_height(600.0);
    assert_eq!(sizes.max_height_px(), 568.0);
    assert_eq!(sizes.current_height_px(), 568.0);

    sizes.set_viewport_height(0.0);
    assert_eq!(sizes.viewport_height(), 600.0);
}

#[test]
fn docking_only_changes_displayed_height() {
    let mut sizes = bottom_sheet("calc(100% - 32px)");
    sizes.dock(56.0);
    assert!(sizes.is_docked());
    assert_eq!(sizes.displayed_height_px(), 56.0);
    assert_eq!(sizes.current_height_px(), 520.0);

    sizes.reset();
    assert!(!sizes.is_docked());
    assert_eq!(sizes.displayed_height_px(), 520.0);
}

#[test]
fn wheel_grows_bottom_sheet_with_capped_ticks() {
    let mut sizes = bottom_sheet("calc(100% - 32px)");
    assert!(sizes.apply_wheel(1000.0, None));
    assert_eq!(sizes.current_height_px(), 640.0);

    assert!(sizes.apply_wheel(1000.0, None));
    assert_eq!(sizes.current_height_px(), 760.0);
    assert!(sizes.apply_wheel(1000.0, None));
    assert!(sizes.is_at_max());

    // At max the body scrolls natively.
    assert!(!sizes.apply_wheel(40.0, None));
}

#[test]
fn wheel_shrinks_only_when_body_is_at_its_edge() {
    let mut sizes = bottom_sheet("calc(100% - 32px)");
    sizes.snap_to_max();

    let scrolled = ScrollMetrics::new(200.0, 2000.0, 700.0);
    assert!(!sizes.apply_wheel(-60.0, Some(scrolled)));
    assert!(sizes.is_at_max());

    let at_top = ScrollMetrics::new(0.0, 2000.0, 700.0);
    assert!(sizes.apply_wheel(-60.0, Some(at_top)));
    assert_eq!(sizes.current_height_px(), 708.0);
}

#[test]
fn wheel_direction_is_mirrored_for_top_panels() {
    let config = DrawerConfig::new(Side::Top)
        .with_expand_to_full(true)
        .with_max_expanded_height(700.0);
    let mut sizes = SizeNegotiator::new(&config, 800.0);
    assert!(!sizes.apply_wheel(50.0, None));
    assert!(sizes.apply_wheel(-50.0, None));
    assert_eq!(sizes.current_height_px(), 570.0);
}
