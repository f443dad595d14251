//! Robot-style driver for drawer gesture tests
//!
//! Wraps a [`Drawer`] over a [`FakeSurface`] and feeds it timestamped
//! pointer and wheel events, the way a host's event loop would.
//!
//! # Example
//!
//! ```
//! use drawer_core::prelude::*;
//! use drawer_testing::{FakeSurface, GestureRobot};
//!
//! let viewport = Size::new(400.0, 800.0);
//! let mut robot = GestureRobot::new(
//!     DrawerConfig::new(Side::Left),
//!     FakeSurface::side_panel(300.0, viewport),
//! );
//! robot.open();
//! robot.drag((250.0, 400.0), (100.0, 400.0), 10, 300.0);
//! assert_eq!(robot.drawer().phase(), DrawerPhase::Closing);
//! ```

use crate::surface::FakeSurface;
use drawer_core::{
    DragState, Drawer, DrawerCallbacks, DrawerConfig, DrawerPhase, EventDisposition, IdScope,
    PanelPaint, PointerEvent, PointerId, PointerSource, WheelEvent,
};
use drawer_geometry::Point;

/// Frame interval used when a test does not give explicit timing.
pub const FRAME_MS: f64 = 16.0;

/// State observed after one delivered move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub time_ms: f64,
    pub state: DragState,
    pub height: f32,
    pub paint: PanelPaint,
}

pub struct GestureRobot {
    drawer: Drawer<FakeSurface>,
    now_ms: f64,
    pointer_id: PointerId,
    source: PointerSource,
    in_scroll_body: bool,
    cursor: Point,
    samples: Vec<GestureSample>,
}

impl GestureRobot {
    pub fn new(config: DrawerConfig, surface: FakeSurface) -> Self {
        Self::from_drawer(Drawer::new(config, surface, &IdScope::default()))
    }

    pub fn with_callbacks(
        config: DrawerConfig,
        surface: FakeSurface,
        callbacks: DrawerCallbacks,
    ) -> Self {
        let drawer = Drawer::new(config, surface, &IdScope::default()).with_callbacks(callbacks);
        Self::from_drawer(drawer)
    }

    pub fn from_drawer(drawer: Drawer<FakeSurface>) -> Self {
        Self {
            drawer,
            now_ms: 0.0,
            pointer_id: 1,
            source: PointerSource::Touch,
            in_scroll_body: false,
            cursor: Point::ZERO,
            samples: Vec::new(),
        }
    }

    pub fn drawer(&self) -> &Drawer<FakeSurface> {
        &self.drawer
    }

    pub fn drawer_mut(&mut self) -> &mut Drawer<FakeSurface> {
        &mut self.drawer
    }

    pub fn surface(&self) -> &FakeSurface {
        self.drawer.surface()
    }

    pub fn surface_mut(&mut self) -> &mut FakeSurface {
        self.drawer.surface_mut()
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn state(&self) -> DragState {
        self.drawer.drag_state()
    }

    pub fn height(&self) -> f32 {
        self.drawer.current_height_px()
    }

    pub fn paint(&self) -> PanelPaint {
        self.drawer.paint()
    }

    /// Samples recorded since the last press.
    pub fn samples(&self) -> &[GestureSample] {
        &self.samples
    }

    pub fn set_pointer(&mut self, id: PointerId, source: PointerSource) {
        self.pointer_id = id;
        self.source = source;
    }

    /// Whether the next press lands inside the panel's scrollable body.
    pub fn set_in_scroll_body(&mut self, in_scroll_body: bool) {
        self.in_scroll_body = in_scroll_body;
    }

    pub fn advance_time(&mut self, ms: f64) {
        self.now_ms += ms;
    }

    /// Opens the drawer and pumps frames until it settles.
    pub fn open(&mut self) -> DrawerPhase {
        self.drawer.set_open(true);
        for _ in 0..u8::MAX {
            self.advance_time(FRAME_MS);
            if !matches!(self.drawer.on_animation_frame(), DrawerPhase::Opening { .. }) {
                break;
            }
        }
        self.drawer.phase()
    }

    /// Finishes a pending close transition.
    pub fn finish_transition(&mut self) -> bool {
        self.drawer.on_transition_end()
    }

    pub fn press(&mut self, x: f32, y: f32) -> EventDisposition {
        self.samples.clear();
        self.cursor = Point::new(x, y);
        let event = PointerEvent::down(self.cursor, self.now_ms)
            .with_id(self.pointer_id)
            .with_source(self.source)
            .with_scroll_body(self.in_scroll_body);
        self.drawer.handle_pointer(&event)
    }

    /// Moves one frame later to `(x, y)`.
    pub fn move_to(&mut self, x: f32, y: f32) -> EventDisposition {
        self.move_to_after(x, y, FRAME_MS)
    }

    pub fn move_to_after(&mut self, x: f32, y: f32, elapsed_ms: f64) -> EventDisposition {
        self.advance_time(elapsed_ms);
        self.cursor = Point::new(x, y);
        let event = self.pointer_event(PointerEvent::moved(self.cursor, self.now_ms));
        let disposition = self.drawer.handle_pointer(&event);
        self.samples.push(GestureSample {
            time_ms: self.now_ms,
            state: self.drawer.drag_state(),
            height: self.drawer.current_height_px(),
            paint: self.drawer.paint(),
        });
        disposition
    }

    pub fn release(&mut self) -> EventDisposition {
        let event = self.pointer_event(PointerEvent::up(self.cursor, self.now_ms));
        self.drawer.handle_pointer(&event)
    }

    pub fn cancel(&mut self) -> EventDisposition {
        let event = self.pointer_event(PointerEvent::cancel(self.cursor, self.now_ms));
        self.drawer.handle_pointer(&event)
    }

    /// Press, `steps` evenly spaced moves over `duration_ms`, release.
    pub fn drag(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        steps: u32,
        duration_ms: f64,
    ) -> EventDisposition {
        self.press(from.0, from.1);
        self.move_along(to, steps, duration_ms);
        self.release()
    }

    /// Evenly spaced moves from the cursor to `to`, without pressing or
    /// releasing.
    pub fn move_along(&mut self, to: (f32, f32), steps: u32, duration_ms: f64) {
        let steps = steps.max(1);
        let start = self.cursor;
        let interval = duration_ms / steps as f64;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = start.x + (to.0 - start.x) * t;
            let y = start.y + (to.1 - start.y) * t;
            self.move_to_after(x, y, interval);
        }
        log::trace!(
            "robot moved to ({:.1}, {:.1}) in {steps} steps over {duration_ms}ms",
            to.0,
            to.1
        );
    }

    pub fn wheel(&mut self, delta_y: f32) -> EventDisposition {
        self.advance_time(FRAME_MS);
        let event = WheelEvent::new(delta_y, self.now_ms).with_scroll_body(self.in_scroll_body);
        self.drawer.handle_wheel(&event)
    }

    fn pointer_event(&self, event: PointerEvent) -> PointerEvent {
        event.with_id(self.pointer_id).with_source(self.source)
    }
}
