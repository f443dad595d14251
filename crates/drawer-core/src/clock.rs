//! Monotonic millisecond clock for hosts whose input events carry no timestamp.

// web_time matches std::time on native and maps to performance.now() on wasm.
use web_time::Instant;

#[derive(Clone, Copy, Debug)]
pub struct EventClock {
    origin: Instant,
}

impl Default for EventClock {
    fn default() -> Self {
        Self::new()
    }
}

impl EventClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock was created.
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}
