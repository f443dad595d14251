use crate::surface::DemoSurface;
use drawer_core::gesture_constants::OPEN_SETTLE_FRAMES;
use drawer_core::prelude::*;
use drawer_core::EventClock;
use std::cell::RefCell;
use std::rc::Rc;

/// One scripted host event. Moves carry the time since the previous event.
#[derive(Clone, Copy, Debug)]
pub enum Step {
    Open,
    Press(f32, f32),
    Move(f32, f32, f64),
    Release,
    Cancel,
    Wheel(f32),
    TransitionEnd,
    RequestClose,
}

pub struct Script {
    pub name: &'static str,
    pub config: DrawerConfig,
    pub surface: DemoSurface,
    pub steps: Vec<Step>,
}

#[derive(Debug)]
pub struct Report {
    pub name: &'static str,
    pub events: usize,
    pub final_phase: DrawerPhase,
    pub final_height: f32,
    pub callbacks: Vec<&'static str>,
    pub elapsed_ms: f64,
}

pub fn run(script: Script, ids: &IdScope) -> Report {
    let clock = EventClock::new();
    let fired = Rc::new(RefCell::new(Vec::new()));
    let callbacks = {
        let close = Rc::clone(&fired);
        let minimize = Rc::clone(&fired);
        let restore = Rc::clone(&fired);
        DrawerCallbacks::new()
            .on_close(move || close.borrow_mut().push("close"))
            .on_minimize(move || minimize.borrow_mut().push("minimize"))
            .on_restore(move || restore.borrow_mut().push("restore"))
    };
    let mut drawer = Drawer::new(script.config, script.surface, ids).with_callbacks(callbacks);
    drawer.subscribe(|state| {
        log::trace!(
            "drag offset={:.1} progress={:.3} scale={:.4}",
            state.offset,
            state.progress,
            state.wrong_direction_scale
        );
    });

    let mut now = 0.0;
    let mut cursor = Point::ZERO;
    for step in &script.steps {
        let disposition = match *step {
            Step::Open => {
                drawer.set_open(true);
                for _ in 0..OPEN_SETTLE_FRAMES {
                    now += 16.0;
                    drawer.on_animation_frame();
                }
                None
            }
            Step::Press(x, y) => {
                cursor = Point::new(x, y);
                Some(drawer.handle_pointer(&PointerEvent::down(cursor, now)))
            }
            Step::Move(x, y, dt) => {
                now += dt;
                cursor = Point::new(x, y);
                Some(drawer.handle_pointer(&PointerEvent::moved(cursor, now)))
            }
            Step::Release => Some(drawer.handle_pointer(&PointerEvent::up(cursor, now))),
            Step::Cancel => Some(drawer.handle_pointer(&PointerEvent::cancel(cursor, now))),
            Step::Wheel(delta_y) => {
                now += 16.0;
                Some(drawer.handle_wheel(&WheelEvent::new(delta_y, now)))
            }
            Step::TransitionEnd => {
                drawer.on_transition_end();
                None
            }
            Step::RequestClose => {
                drawer.request_close();
                None
            }
        };

        let paint = drawer.paint();
        drawer.surface_mut().sync(&paint);
        log::info!(
            "[{}] {:?} -> {:?} phase={:?} height={:.1} translate=({:.1}, {:.1}) backdrop={:.2}",
            script.name,
            step,
            disposition,
            drawer.phase(),
            drawer.current_height_px(),
            paint.translate_x,
            paint.translate_y,
            paint.backdrop_opacity
        );
    }

    let callbacks = fired.borrow().clone();
    Report {
        name: script.name,
        events: script.steps.len(),
        final_phase: drawer.phase(),
        final_height: drawer.current_height_px(),
        callbacks,
        elapsed_ms: clock.now_ms(),
    }
}

/// Evenly spaced moves from `from` to `to`.
pub fn stroke(from: (f32, f32), to: (f32, f32), steps: u32, duration_ms: f64) -> Vec<Step> {
    let steps = steps.max(1);
    let interval = duration_ms / steps as f64;
    let mut script = vec![Step::Press(from.0, from.1)];
    script.extend((1..=steps).map(|i| {
        let t = i as f32 / steps as f32;
        Step::Move(
            from.0 + (to.0 - from.0) * t,
            from.1 + (to.1 - from.1) * t,
            interval,
        )
    }));
    script.push(Step::Release);
    script
}
