use crate::clock::EventClock;
use drawer_geometry::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Device that produced a pointer event. Touch points are mapped onto
/// pointer ids by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
    Pen,
}

/// Pointer or touch event delivered to a drawer.
///
/// The default-prevented flag is shared via `Rc<Cell>` so the host can keep
/// its own copy and observe whether the engine claimed the event.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub source: PointerSource,
    pub position: Point,
    pub timestamp_ms: f64,
    /// True when the event target sits inside the panel's scrollable body.
    pub in_scroll_body: bool,
    default_prevented: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, timestamp_ms: f64) -> Self {
        Self {
            id: 0,
            kind,
            source: PointerSource::Mouse,
            position,
            timestamp_ms,
            in_scroll_body: false,
            default_prevented: Rc::new(Cell::new(false)),
        }
    }

    /// Builds an event stamped with the current time of `clock`.
    pub fn stamped(kind: PointerEventKind, position: Point, clock: &EventClock) -> Self {
        Self::new(kind, position, clock.now_ms())
    }

    pub fn down(position: Point, timestamp_ms: f64) -> Self {
        Self::new(PointerEventKind::Down, position, timestamp_ms)
    }

    pub fn moved(position: Point, timestamp_ms: f64) -> Self {
        Self::new(PointerEventKind::Move, position, timestamp_ms)
    }

    pub fn up(position: Point, timestamp_ms: f64) -> Self {
        Self::new(PointerEventKind::Up, position, timestamp_ms)
    }

    pub fn cancel(position: Point, timestamp_ms: f64) -> Self {
        Self::new(PointerEventKind::Cancel, position, timestamp_ms)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_source(mut self, source: PointerSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_scroll_body(mut self, in_scroll_body: bool) -> Self {
        self.in_scroll_body = in_scroll_body;
        self
    }

    /// Claims the event so the host suppresses native scrolling and clicks.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// Wheel or trackpad scroll event. `delta_y` follows the DOM convention:
/// positive values scroll content toward its end.
#[derive(Clone, Debug)]
pub struct WheelEvent {
    pub delta_y: f32,
    pub timestamp_ms: f64,
    pub in_scroll_body: bool,
    default_prevented: Rc<Cell<bool>>,
}

impl WheelEvent {
    pub fn new(delta_y: f32, timestamp_ms: f64) -> Self {
        Self {
            delta_y,
            timestamp_ms,
            in_scroll_body: true,
            default_prevented: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_scroll_body(mut self, in_scroll_body: bool) -> Self {
        self.in_scroll_body = in_scroll_body;
        self
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// What a handler did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventDisposition {
    /// Not for this drawer; native handling continues.
    Ignored,
    /// Observed by an uncommitted session; native handling continues.
    Tracking,
    /// Claimed by the engine; default was prevented.
    Consumed,
}

impl EventDisposition {
    pub fn is_consumed(self) -> bool {
        matches!(self, EventDisposition::Consumed)
    }
}
