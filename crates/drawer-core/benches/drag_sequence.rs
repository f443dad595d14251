use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use drawer_core::prelude::*;
use drawer_testing::{FakeSurface, GestureRobot};

const VIEWPORT: Size = Size {
    width: 1080.0,
    height: 1920.0,
};
const STEP_SAMPLES: &[u32] = &[16, 64, 256];

fn expandable_sheet() -> GestureRobot {
    let config = DrawerConfig::new(Side::Bottom)
        .with_size(SizeToken::M)
        .with_expand_to_full(true)
        .with_max_expanded_height("calc(100% - 32px)");
    let mut robot = GestureRobot::new(config, FakeSurface::bottom_sheet(1248.0, VIEWPORT));
    robot.open();
    robot
}

fn expand_and_collapse(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_and_collapse");
    for &steps in STEP_SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            let mut robot = expandable_sheet();
            b.iter(|| {
                robot.press(540.0, 1500.0);
                robot.move_along((540.0, 300.0), steps, 400.0);
                robot.move_along((540.0, 1500.0), steps, 400.0);
                black_box(robot.release());
            });
        });
    }
    group.finish();
}

fn side_panel_flick(c: &mut Criterion) {
    c.bench_function("side_panel_flick", |b| {
        b.iter(|| {
            let mut robot = GestureRobot::new(
                DrawerConfig::new(Side::Right),
                FakeSurface::side_panel(420.0, VIEWPORT),
            );
            robot.open();
            robot.drag((100.0, 900.0), (160.0, 900.0), 6, 60.0);
            black_box(robot.drawer().phase())
        });
    });
}

criterion_group!(benches, expand_and_collapse, side_panel_flick);
criterion_main!(benches);
