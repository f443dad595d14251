//! Height negotiation for expandable top and bottom panels.
//!
//! The negotiator is the only writer of the panel's steady-state height.
//! Whenever expansion is enabled `compact ≤ current ≤ max` holds after every
//! call.

use crate::config::DrawerConfig;
use crate::gesture_constants::MAX_WHEEL_DELTA;
use crate::height_expr::HeightExpr;
use crate::surface::ScrollMetrics;
use drawer_geometry::{Point, Side};

/// Heights closer than this to a bound count as sitting on it.
const BOUND_EPSILON: f32 = 0.5;

#[derive(Clone, Debug)]
pub struct SizeNegotiator {
    side: Side,
    viewport_fraction: f32,
    expansion_enabled: bool,
    max_expr: HeightExpr,
    viewport_height: f32,
    base_height: Option<f32>,
    current: f32,
    docked_height: Option<f32>,
}

impl SizeNegotiator {
    pub fn new(config: &DrawerConfig, viewport_height: f32) -> Self {
        let max_expr = match config.max_expanded_height.as_ref() {
            None => HeightExpr::FULL_VIEWPORT,
            Some(value) => value.to_expr().unwrap_or_else(|err| {
                log::warn!("{err}; using the full viewport height as max expanded height");
                HeightExpr::FULL_VIEWPORT
            }),
        };

        let mut negotiator = Self {
            side: config.side,
            viewport_fraction: config.size.viewport_fraction(),
            expansion_enabled: config.expansion_enabled(),
            max_expr,
            viewport_height: viewport_height.max(0.0),
            base_height: None,
            current: 0.0,
            docked_height: None,
        };
        negotiator.current = negotiator.compact_height_px();
        negotiator
    }

    pub fn is_expansion_enabled(&self) -> bool {
        self.expansion_enabled
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Re-resolves the bounds for a new viewport. A height sitting on a bound
    /// follows that bound; anything else is re-clamped.
    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        if !viewport_height.is_finite() || viewport_height <= 0.0 {
            return;
        }
        let (was_max, was_compact) = (self.is_at_max(), self.is_at_compact());
        self.viewport_height = viewport_height;
        self.current = if was_max {
            self.max_height_px()
        } else if was_compact {
            self.compact_height_px()
        } else {
            self.clamp(self.current)
        };
    }

    /// Records the panel's natural height. Only the first measurement counts.
    pub fn record_base_height(&mut self, height: f32) {
        if self.base_height.is_some() || !height.is_finite() || height <= 0.0 {
            return;
        }
        let was_compact = self.is_at_compact();
        self.base_height = Some(height);
        self.current = if was_compact {
            self.compact_height_px()
        } else {
            self.clamp(self.current)
        };
        log::debug!(
            "base height {height:.1}px recorded, compact height {:.1}px",
            self.compact_height_px()
        );
    }

    pub fn base_height(&self) -> Option<f32> {
        self.base_height
    }

    /// Size-token share of the viewport, capped at the first-measured height.
    pub fn compact_height_px(&self) -> f32 {
        let from_token = self.viewport_height * self.viewport_fraction;
        match self.base_height {
            Some(base) => from_token.min(base),
            None => from_token,
        }
    }

    pub fn max_height_px(&self) -> f32 {
        let compact = self.compact_height_px();
        if !self.expansion_enabled {
            return compact;
        }
        self.max_expr.resolve(self.viewport_height).max(compact)
    }

    pub fn current_height_px(&self) -> f32 {
        self.current
    }

    /// Height to paint: the header height while docked, the negotiated
    /// height otherwise.
    pub fn displayed_height_px(&self) -> f32 {
        self.docked_height.unwrap_or(self.current)
    }

    pub fn is_at_max(&self) -> bool {
        self.expansion_enabled && self.current >= self.max_height_px() - BOUND_EPSILON
    }

    pub fn is_at_compact(&self) -> bool {
        self.current <= self.compact_height_px() + BOUND_EPSILON
    }

    /// Clamps `px` into `[compact, max]` and stores it. Returns the stored height.
    pub fn set_height(&mut self, px: f32) -> f32 {
        if px.is_nan() {
            return self.current;
        }
        self.current = self.clamp(px);
        self.current
    }

    /// Shrinks toward compact by up to `distance`. Returns the amount consumed.
    pub fn shrink_by(&mut self, distance: f32) -> f32 {
        if !self.expansion_enabled || distance <= 0.0 {
            return 0.0;
        }
        let compact = self.compact_height_px();
        let capacity = (self.current - compact).max(0.0);
        if distance >= capacity {
            self.current = compact;
            capacity
        } else {
            self.current -= distance;
            distance
        }
    }

    /// Grows toward max by up to `distance`. Returns the amount consumed.
    pub fn grow_by(&mut self, distance: f32) -> f32 {
        if !self.expansion_enabled || distance <= 0.0 {
            return 0.0;
        }
        let max = self.max_height_px();
        let capacity = (max - self.current).max(0.0);
        if distance >= capacity {
            self.current = max;
            capacity
        } else {
            self.current += distance;
            distance
        }
    }

    pub fn snap_to_compact(&mut self) {
        self.current = self.compact_height_px();
    }

    pub fn snap_to_max(&mut self) {
        self.current = self.max_height_px();
    }

    /// Snaps to whichever bound is nearer. Returns true when that is max.
    pub fn snap_to_nearest(&mut self) -> bool {
        let midpoint = (self.compact_height_px() + self.max_height_px()) * 0.5;
        let expanded = self.expansion_enabled && self.current >= midpoint;
        if expanded {
            self.snap_to_max();
        } else {
            self.snap_to_compact();
        }
        expanded
    }

    pub fn dock(&mut self, header_height: f32) {
        self.docked_height = Some(header_height.max(0.0));
    }

    pub fn undock(&mut self) {
        self.docked_height = None;
    }

    pub fn is_docked(&self) -> bool {
        self.docked_height.is_some()
    }

    /// Back to the compact height, undocked. Used once a panel has closed.
    pub fn reset(&mut self) {
        self.docked_height = None;
        self.snap_to_compact();
    }

    /// Feeds one wheel tick into the height. Returns true when the tick was
    /// consumed and native scrolling must be suppressed.
    ///
    /// A tick behaves like a finger drag of the opposite sign, so scrolling
    /// a bottom panel's content toward its end grows the panel first.
    /// Shrinking only happens once the body cannot scroll any further.
    pub fn apply_wheel(&mut self, delta_y: f32, metrics: Option<ScrollMetrics>) -> bool {
        if !self.expansion_enabled || self.is_docked() || !delta_y.is_finite() {
            return false;
        }
        let tick = delta_y.clamp(-MAX_WHEEL_DELTA, MAX_WHEEL_DELTA);
        if tick == 0.0 {
            return false;
        }

        let finger = Point::new(0.0, -tick);
        let along = self.side.project(finger);
        let consumed = if along < 0.0 {
            self.grow_by(-along)
        } else {
            if metrics.is_some_and(|m| m.can_absorb(finger.y)) {
                return false;
            }
            self.shrink_by(along)
        };

        if consumed > 0.0 {
            log::trace!(
                "wheel tick {tick:.1} moved height to {:.1}px",
                self.current
            );
        }
        consumed > 0.0
    }

    fn clamp(&self, px: f32) -> f32 {
        let compact = self.compact_height_px();
        if !self.expansion_enabled {
            return compact;
        }
        px.clamp(compact, self.max_height_px())
    }
}

#[cfg(test)]
#[path = "tests/size_negotiator_tests.rs"]
mod tests;
