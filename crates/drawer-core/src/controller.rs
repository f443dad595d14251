//! Drag tracking for a single drawer panel.
//!
//! A press opens a [`DragSession`] in the tracking phase. Nothing is written
//! to the panel until the finger leaves the deadzone in a direction the
//! panel can use; only then is the pointer captured and the session
//! committed. Every committed move is split across elastic unwinding, the
//! [`SizeNegotiator`] and translation, and the resulting [`DragState`] is
//! pushed to subscribers.

use crate::config::DrawerConfig;
use crate::drag_state::{DragState, DragStateObservers, SubscriptionId};
use crate::event::{EventDisposition, PointerEvent, WheelEvent};
use crate::gesture_constants::{
    EFFORT_CAP, ELASTIC_RANGE, MAX_OPENING_STRETCH, MAX_OVERDRAG_STRETCH, MAX_PROGRESS,
    MAX_WRONG_STRETCH, MOVEMENT_DEADZONE, OVERDRAG_RANGE,
};
use crate::session::{DragSession, SessionPhase};
use crate::size_negotiator::SizeNegotiator;
use crate::snap::{SnapDecision, SnapInput, SnapResolver};
use crate::surface::{DrawerSurface, ScrollMetrics};
use drawer_geometry::Side;

pub struct GestureController {
    config: DrawerConfig,
    sizes: SizeNegotiator,
    session: Option<DragSession>,
    observers: DragStateObservers,
    state: DragState,
    docked: bool,
}

impl GestureController {
    pub fn new(config: DrawerConfig, viewport_height: f32) -> Self {
        let sizes = SizeNegotiator::new(&config, viewport_height);
        Self {
            config,
            sizes,
            session: None,
            observers: DragStateObservers::new(),
            state: DragState::IDLE,
            docked: false,
        }
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    pub fn side(&self) -> Side {
        self.config.side
    }

    pub fn sizes(&self) -> &SizeNegotiator {
        &self.sizes
    }

    pub fn drag_state(&self) -> DragState {
        self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(DragSession::is_committed)
    }

    pub fn is_docked(&self) -> bool {
        self.docked
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&DragState) + 'static) -> SubscriptionId {
        self.observers.subscribe(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    pub fn record_base_height(&mut self, height: f32) {
        self.sizes.record_base_height(height);
    }

    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        self.sizes.set_viewport_height(viewport_height);
    }

    /// Collapses the panel to its header. Returns false without a header.
    pub fn dock(&mut self, header_height: f32) -> bool {
        if !self.config.side.is_vertical() || !header_height.is_finite() {
            return false;
        }
        self.sizes.dock(header_height);
        self.docked = true;
        log::debug!("docked at header height {header_height:.1}px");
        true
    }

    /// Leaves the docked state at compact height.
    pub fn undock(&mut self) {
        if !self.docked {
            return;
        }
        self.docked = false;
        self.sizes.undock();
        self.sizes.snap_to_compact();
        log::debug!("undocked at {:.1}px", self.sizes.current_height_px());
    }

    /// Drops any session and returns the height to compact. Used once the
    /// panel has fully closed.
    pub fn reset(&mut self) {
        self.session = None;
        self.docked = false;
        self.sizes.reset();
        self.publish(DragState::IDLE);
    }

    pub fn on_down(
        &mut self,
        event: &PointerEvent,
        surface: &dyn DrawerSurface,
    ) -> EventDisposition {
        if let Some(session) = self.session.as_ref() {
            log::trace!(
                "pointer {} ignored while pointer {} is tracked",
                event.id,
                session.pointer_id
            );
            return EventDisposition::Ignored;
        }
        let Some(rect) = surface.panel_rect() else {
            return EventDisposition::Ignored;
        };
        self.sizes.set_viewport_height(surface.viewport().height);

        let side = self.config.side;
        let mut session = DragSession::new(
            event.id,
            side.axis(),
            event.position,
            event.timestamp_ms,
            self.sizes.current_height_px(),
            side.axis_extent(rect),
        );
        session.started_at_max = self.sizes.is_at_max();
        session.started_inside_scrollable_body = event.in_scroll_body;
        self.session = Some(session);
        EventDisposition::Tracking
    }

    pub fn on_move(
        &mut self,
        event: &PointerEvent,
        surface: &mut dyn DrawerSurface,
    ) -> EventDisposition {
        let Some(mut session) = self.session.take() else {
            return EventDisposition::Ignored;
        };
        if session.pointer_id != event.id || surface.panel_rect().is_none() {
            self.session = Some(session);
            return EventDisposition::Ignored;
        }

        let disposition = match session.phase {
            SessionPhase::Abandoned => EventDisposition::Ignored,
            SessionPhase::Tracking => self.track(&mut session, event, surface),
            SessionPhase::Committed => {
                self.drag(&mut session, event);
                EventDisposition::Consumed
            }
        };
        self.session = Some(session);
        disposition
    }

    /// Ends the session. Returns the decision for a committed drag, `None`
    /// when the press never became a drag.
    pub fn on_up(
        &mut self,
        event: &PointerEvent,
        surface: &mut dyn DrawerSurface,
    ) -> Option<SnapDecision> {
        let session = self.take_session_for(event)?;
        if !session.is_committed() {
            return None;
        }
        surface.release_pointer(session.pointer_id);
        event.prevent_default();

        let decision = if self.docked {
            if session.elastic_distance >= MOVEMENT_DEADZONE {
                SnapDecision::Restore
            } else {
                SnapDecision::Return
            }
        } else {
            let header = surface.header_height();
            let input = SnapInput {
                side: self.config.side,
                total_close: session.total_close(),
                axis_size: session.axis_size_at_start,
                max_velocity: session.velocity.max_closing_velocity(),
                height_at_start: session.height_at_start,
                started_at_max: session.started_at_max,
                expansion_enabled: self.sizes.is_expansion_enabled(),
                viewport_height: self.sizes.viewport_height(),
                current_height: self.sizes.current_height_px(),
                compact_height: self.sizes.compact_height_px(),
                max_height: self.sizes.max_height_px(),
                close_allowed: self.config.close_gesture_enabled(),
                dock_on_close: self.config.docking_enabled() && header.is_some(),
            };
            let decision = SnapResolver::resolve(&input);
            if decision == SnapDecision::Dock {
                if let Some(header) = header {
                    self.dock(header);
                }
            }
            decision
        };

        match decision {
            SnapDecision::SnapCompact => self.sizes.snap_to_compact(),
            SnapDecision::SnapExpanded => self.sizes.snap_to_max(),
            SnapDecision::Restore => self.undock(),
            SnapDecision::Close | SnapDecision::Dock | SnapDecision::Return => {}
        }
        self.publish(DragState::IDLE);
        Some(decision)
    }

    /// Drops the session without a decision. A committed drag gives back
    /// every height change it made.
    pub fn on_cancel(&mut self, event: &PointerEvent, surface: &mut dyn DrawerSurface) {
        if let Some(session) = self.take_session_for(event) {
            self.abort(session, surface);
        }
    }

    /// Cancels whatever session is active, regardless of pointer.
    pub fn cancel_session(&mut self, surface: &mut dyn DrawerSurface) {
        if let Some(session) = self.session.take() {
            self.abort(session, surface);
        }
    }

    /// Feeds a wheel tick into the panel height while no drag is active.
    pub fn on_wheel(
        &mut self,
        event: &WheelEvent,
        surface: &dyn DrawerSurface,
    ) -> EventDisposition {
        if !self.config.wheel_enabled() || self.docked || self.session.is_some() {
            return EventDisposition::Ignored;
        }
        if surface.panel_rect().is_none() {
            return EventDisposition::Ignored;
        }
        self.sizes.set_viewport_height(surface.viewport().height);

        let metrics = if event.in_scroll_body {
            surface.scroll_metrics()
        } else {
            None
        };
        if self.sizes.apply_wheel(event.delta_y, metrics) {
            event.prevent_default();
            EventDisposition::Consumed
        } else {
            EventDisposition::Ignored
        }
    }

    fn take_session_for(&mut self, event: &PointerEvent) -> Option<DragSession> {
        match self.session.take() {
            Some(session) if session.pointer_id == event.id => Some(session),
            other => {
                self.session = other;
                None
            }
        }
    }

    fn abort(&mut self, session: DragSession, surface: &mut dyn DrawerSurface) {
        if !session.is_committed() {
            return;
        }
        surface.release_pointer(session.pointer_id);
        if !self.docked {
            self.sizes.set_height(session.height_at_start);
        }
        log::debug!(
            "drag cancelled at offset {:.1}px, height back to {:.1}px",
            session.applied_translate,
            self.sizes.current_height_px()
        );
        self.publish(DragState::IDLE);
    }

    fn track(
        &mut self,
        session: &mut DragSession,
        event: &PointerEvent,
        surface: &mut dyn DrawerSurface,
    ) -> EventDisposition {
        let side = self.config.side;
        let travel = event.position - session.start_point;
        let along = side.project(travel);
        let cross = session.axis.cross_axis().component(travel).abs();

        if along.abs() < MOVEMENT_DEADZONE && cross < MOVEMENT_DEADZONE {
            return EventDisposition::Tracking;
        }
        if cross > along.abs() {
            log::trace!("pointer {} abandoned: cross-axis movement", session.pointer_id);
            session.phase = SessionPhase::Abandoned;
            return EventDisposition::Ignored;
        }

        let metrics = if session.started_inside_scrollable_body {
            surface.scroll_metrics()
        } else {
            None
        };
        let step = side.project(event.position - session.last_point);
        if !self.should_commit(step, metrics) {
            // Native scroll took this stretch of the movement.
            session.last_point = event.position;
            session.last_time = event.timestamp_ms;
            return EventDisposition::Tracking;
        }

        session.phase = SessionPhase::Committed;
        if let Err(err) = surface.capture_pointer(session.pointer_id) {
            log::debug!("continuing drag without pointer capture: {err}");
        }
        log::debug!(
            "drag committed on {:?} after {along:.1}px, height {:.1}px",
            side,
            self.sizes.current_height_px()
        );
        self.drag(session, event);
        EventDisposition::Consumed
    }

    fn should_commit(&self, along: f32, metrics: Option<ScrollMetrics>) -> bool {
        let side = self.config.side;
        // Finger motion in screen space, for the scroll body check.
        let finger_dy = along * side.closing_sign();
        let body_absorbs =
            side.is_vertical() && metrics.is_some_and(|m| m.can_absorb(finger_dy));

        if along > 0.0 {
            if self.docked {
                false
            } else if self.sizes.is_at_max() {
                !body_absorbs
            } else {
                true
            }
        } else if along < 0.0 {
            if self.docked {
                true
            } else if self.sizes.is_expansion_enabled() {
                !self.sizes.is_at_max() || !body_absorbs
            } else {
                false
            }
        } else {
            false
        }
    }

    fn drag(&mut self, session: &mut DragSession, event: &PointerEvent) {
        let delta = self.config.side.project(event.position - session.last_point);
        session
            .velocity
            .add_movement(delta, event.timestamp_ms - session.last_time);
        session.last_point = event.position;
        session.last_time = event.timestamp_ms;
        event.prevent_default();

        if delta > 0.0 {
            self.apply_closing(session, delta);
        } else if delta < 0.0 {
            self.apply_opening(session, -delta);
        }
        log::trace!(
            "move {delta:.1}: shrink={:.1} translate={:.1} resisted={:.1} elastic={:.1} height={:.1}",
            session.applied_shrink,
            session.applied_translate,
            session.resisted_distance,
            session.elastic_distance,
            self.sizes.current_height_px()
        );

        let state = self.state_for(session);
        self.publish(state);
    }

    fn apply_closing(&mut self, session: &mut DragSession, amount: f32) {
        let mut remaining = amount;

        let unwound = remaining.min(session.elastic_distance);
        session.elastic_distance -= unwound;
        remaining -= unwound;

        if remaining > 0.0 && !self.docked {
            let shrunk = self.sizes.shrink_by(remaining);
            session.applied_shrink += shrunk;
            remaining -= shrunk;
        }

        if remaining > 0.0 {
            if self.config.close_gesture_enabled() && !self.docked {
                session.applied_translate += remaining;
            } else {
                session.resisted_distance += remaining;
            }
        }
        session.last_effort = amount;
    }

    fn apply_opening(&mut self, session: &mut DragSession, amount: f32) {
        let mut remaining = amount;

        let unwound = remaining.min(session.resisted_distance);
        session.resisted_distance -= unwound;
        remaining -= unwound;

        let retracted = remaining.min(session.applied_translate);
        session.applied_translate -= retracted;
        remaining -= retracted;

        if remaining > 0.0 && !self.docked {
            let grown = self.sizes.grow_by(remaining);
            session.applied_shrink -= grown;
            remaining -= grown;
        }

        if remaining > 0.0 {
            session.elastic_distance += remaining;
        }
        session.last_effort = 0.0;
    }

    fn state_for(&self, session: &DragSession) -> DragState {
        let axis_size = if self.sizes.is_expansion_enabled() && !self.docked {
            self.sizes.current_height_px()
        } else {
            session.axis_size_at_start
        };
        let raw_progress = if axis_size > 0.0 {
            session.applied_translate / axis_size
        } else {
            0.0
        };

        let opening = MAX_OPENING_STRETCH * (session.elastic_distance / ELASTIC_RANGE).min(1.0);
        let resisted = MAX_WRONG_STRETCH * (session.resisted_distance / ELASTIC_RANGE).min(1.0);
        let effort = MAX_WRONG_STRETCH * (session.last_effort / EFFORT_CAP).min(1.0);
        let overdrag =
            MAX_OVERDRAG_STRETCH * ((raw_progress - 1.0) / OVERDRAG_RANGE).clamp(0.0, 1.0);
        let stretch = opening.max(resisted).max(effort).max(overdrag);

        DragState {
            is_dragging: true,
            offset: session.applied_translate,
            progress: raw_progress.min(MAX_PROGRESS),
            wrong_direction_scale: 1.0 + stretch.min(MAX_WRONG_STRETCH),
        }
    }

    fn publish(&mut self, state: DragState) {
        self.state = state;
        self.observers.publish(state);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
