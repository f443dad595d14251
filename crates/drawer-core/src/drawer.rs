//! Drawer lifecycle: open/close phases around the gesture controller.
//!
//! ```text
//! Closed -> Opening -> { OpenCompact <-> OpenExpanded <-> Docked } -> Closing -> Closed
//! ```
//!
//! Dragging is not a phase of its own. The controller reports it through
//! [`DragState`] while the drawer stays in whichever open phase the drag
//! started from.

use crate::config::DrawerConfig;
use crate::controller::GestureController;
use crate::drag_state::{DragState, SubscriptionId};
use crate::event::{EventDisposition, PointerEvent, PointerEventKind, WheelEvent};
use crate::gesture_constants::OPEN_SETTLE_FRAMES;
use crate::ids::{DrawerIds, IdScope};
use crate::listener::{InputSource, ListenerKind, ListenerRegistration};
use crate::paint::PanelPaint;
use crate::snap::SnapDecision;
use crate::surface::DrawerSurface;
use drawer_geometry::Axis;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerPhase {
    Closed,
    /// Mounted, waiting for layout before transitions are enabled.
    Opening {
        frames_left: u8,
    },
    OpenCompact,
    OpenExpanded,
    /// Collapsed to its header after a close gesture.
    Docked,
    Closing,
}

impl DrawerPhase {
    pub fn is_open(self) -> bool {
        matches!(
            self,
            DrawerPhase::OpenCompact | DrawerPhase::OpenExpanded | DrawerPhase::Docked
        )
    }

    fn accepts_input(self) -> bool {
        self.is_open()
    }
}

type Callback = Box<dyn FnMut()>;

/// Host callbacks. Any of them may be left unset.
#[derive(Default)]
pub struct DrawerCallbacks {
    on_close: Option<Callback>,
    on_minimize: Option<Callback>,
    on_restore: Option<Callback>,
}

impl DrawerCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn on_minimize(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_minimize = Some(Box::new(callback));
        self
    }

    pub fn on_restore(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_restore = Some(Box::new(callback));
        self
    }

    fn fire(slot: &mut Option<Callback>) {
        if let Some(callback) = slot.as_mut() {
            callback();
        }
    }
}

pub struct Drawer<S: DrawerSurface> {
    controller: GestureController,
    surface: S,
    callbacks: DrawerCallbacks,
    phase: DrawerPhase,
    ids: DrawerIds,
}

impl<S: DrawerSurface> Drawer<S> {
    pub fn new(config: DrawerConfig, surface: S, scope: &IdScope) -> Self {
        let controller = GestureController::new(config, surface.viewport().height);
        Self {
            controller,
            surface,
            callbacks: DrawerCallbacks::default(),
            phase: DrawerPhase::Closed,
            ids: scope.next_ids(),
        }
    }

    pub fn with_callbacks(mut self, callbacks: DrawerCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn phase(&self) -> DrawerPhase {
        self.phase
    }

    pub fn ids(&self) -> &DrawerIds {
        &self.ids
    }

    pub fn config(&self) -> &DrawerConfig {
        self.controller.config()
    }

    pub fn controller(&self) -> &GestureController {
        &self.controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn drag_state(&self) -> DragState {
        self.controller.drag_state()
    }

    pub fn current_height_px(&self) -> f32 {
        self.controller.sizes().current_height_px()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&DragState) + 'static) -> SubscriptionId {
        self.controller.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.controller.unsubscribe(id)
    }

    /// Attaches pointer and touch listeners, plus wheel when wheel expansion
    /// is configured. `None` when the source refused any of them; whatever
    /// was attached by then is detached again.
    pub fn enable(&self, source: Rc<dyn InputSource>) -> Option<ListenerRegistration> {
        let mut kinds = vec![ListenerKind::Pointer, ListenerKind::Touch];
        if self.config().wheel_enabled() {
            kinds.push(ListenerKind::Wheel);
        }
        ListenerRegistration::attach(source, &kinds)
    }

    /// Mirrors the host's `open` flag. Closing this way fires no callback.
    pub fn set_open(&mut self, open: bool) {
        match (open, self.phase) {
            (true, DrawerPhase::Closed | DrawerPhase::Closing) => {
                self.controller.reset();
                self.transition(DrawerPhase::Opening {
                    frames_left: OPEN_SETTLE_FRAMES,
                });
            }
            (false, DrawerPhase::Closed | DrawerPhase::Closing) | (true, _) => {}
            (false, _) => {
                self.controller.cancel_session(&mut self.surface);
                self.transition(DrawerPhase::Closing);
            }
        }
    }

    /// Counts down the frames after mount. On the last one the panel's
    /// natural height is measured and the drawer settles open.
    pub fn on_animation_frame(&mut self) -> DrawerPhase {
        if let DrawerPhase::Opening { frames_left } = self.phase {
            if frames_left > 1 {
                self.phase = DrawerPhase::Opening {
                    frames_left: frames_left - 1,
                };
            } else {
                self.controller
                    .set_viewport_height(self.surface.viewport().height);
                if let Some(rect) = self.surface.panel_rect() {
                    if self.controller.side().is_vertical() {
                        self.controller.record_base_height(rect.height);
                    }
                }
                let settled = self.steady_phase();
                self.transition(settled);
            }
        }
        self.phase
    }

    /// Host signal that the closing transition finished.
    pub fn on_transition_end(&mut self) -> bool {
        if self.phase != DrawerPhase::Closing {
            return false;
        }
        self.controller.reset();
        self.transition(DrawerPhase::Closed);
        true
    }

    pub fn on_resize(&mut self) {
        self.controller
            .set_viewport_height(self.surface.viewport().height);
        if matches!(self.phase, DrawerPhase::OpenCompact | DrawerPhase::OpenExpanded) {
            self.phase = self.steady_phase();
        }
    }

    /// Explicit close action. Works from any open phase, docked included.
    pub fn request_close(&mut self) -> bool {
        if matches!(self.phase, DrawerPhase::Closed | DrawerPhase::Closing) {
            return false;
        }
        self.controller.cancel_session(&mut self.surface);
        DrawerCallbacks::fire(&mut self.callbacks.on_close);
        self.transition(DrawerPhase::Closing);
        true
    }

    pub fn on_backdrop_click(&mut self) -> bool {
        if !self.config().dismissible || !self.paint().backdrop_visible {
            return false;
        }
        self.request_close()
    }

    /// Leaves the docked state at compact height.
    pub fn restore(&mut self) -> bool {
        if self.phase != DrawerPhase::Docked {
            return false;
        }
        self.controller.undock();
        DrawerCallbacks::fire(&mut self.callbacks.on_restore);
        self.transition(DrawerPhase::OpenCompact);
        true
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> EventDisposition {
        if !self.phase.accepts_input() {
            return EventDisposition::Ignored;
        }
        match event.kind {
            PointerEventKind::Down => self.controller.on_down(event, &self.surface),
            PointerEventKind::Move => self.controller.on_move(event, &mut self.surface),
            PointerEventKind::Up => match self.controller.on_up(event, &mut self.surface) {
                Some(decision) => {
                    self.apply(decision);
                    EventDisposition::Consumed
                }
                None => EventDisposition::Ignored,
            },
            PointerEventKind::Cancel => {
                self.controller.on_cancel(event, &mut self.surface);
                EventDisposition::Ignored
            }
        }
    }

    pub fn handle_wheel(&mut self, event: &WheelEvent) -> EventDisposition {
        if !matches!(self.phase, DrawerPhase::OpenCompact | DrawerPhase::OpenExpanded) {
            return EventDisposition::Ignored;
        }
        let disposition = self.controller.on_wheel(event, &self.surface);
        if disposition.is_consumed() {
            self.phase = self.steady_phase();
        }
        disposition
    }

    pub fn paint(&self) -> PanelPaint {
        if self.phase == DrawerPhase::Closed {
            return PanelPaint::HIDDEN;
        }
        let state = self.controller.drag_state();
        let side = self.controller.side();
        let shift = side.closing_sign() * state.offset;
        let (translate_x, translate_y, scale_x, scale_y) = match side.axis() {
            Axis::Horizontal => (shift, 0.0, state.wrong_direction_scale, 1.0),
            Axis::Vertical => (0.0, shift, 1.0, state.wrong_direction_scale),
        };

        let sizes = self.controller.sizes();
        let height_px = (side.is_vertical() && (sizes.is_expansion_enabled() || sizes.is_docked()))
            .then(|| sizes.displayed_height_px());

        let backdrop_visible = self.config().backdrop
            && matches!(
                self.phase,
                DrawerPhase::Opening { .. } | DrawerPhase::OpenCompact | DrawerPhase::OpenExpanded
            );
        let backdrop_opacity = if !backdrop_visible {
            0.0
        } else if state.is_dragging {
            1.0 - state.progress.min(1.0)
        } else {
            1.0
        };

        PanelPaint {
            translate_x,
            translate_y,
            scale_x,
            scale_y,
            height_px,
            transitions_enabled: !state.is_dragging
                && !matches!(self.phase, DrawerPhase::Opening { .. }),
            backdrop_visible,
            backdrop_opacity,
            visible: true,
        }
    }

    fn apply(&mut self, decision: SnapDecision) {
        match decision {
            SnapDecision::Close => {
                DrawerCallbacks::fire(&mut self.callbacks.on_close);
                self.transition(DrawerPhase::Closing);
            }
            SnapDecision::Dock => {
                DrawerCallbacks::fire(&mut self.callbacks.on_minimize);
                self.transition(DrawerPhase::Docked);
            }
            SnapDecision::Restore => {
                DrawerCallbacks::fire(&mut self.callbacks.on_restore);
                self.transition(DrawerPhase::OpenCompact);
            }
            SnapDecision::SnapCompact | SnapDecision::SnapExpanded | SnapDecision::Return => {
                let settled = self.steady_phase();
                self.transition(settled);
            }
        }
    }

    fn steady_phase(&self) -> DrawerPhase {
        if self.controller.is_docked() {
            DrawerPhase::Docked
        } else if self.controller.sizes().is_at_max() {
            DrawerPhase::OpenExpanded
        } else {
            DrawerPhase::OpenCompact
        }
    }

    fn transition(&mut self, next: DrawerPhase) {
        if next != self.phase {
            log::debug!("drawer {}: {:?} -> {next:?}", self.ids.instance, self.phase);
            self.phase = next;
        }
    }
}

#[cfg(test)]
#[path = "tests/drawer_tests.rs"]
mod tests;
