//! Live drag output and its observers.

use indexmap::IndexMap;

/// Read-only snapshot of an in-flight drag, pushed to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub is_dragging: bool,
    /// Pixels travelled toward closed, beyond any height shrink.
    pub offset: f32,
    /// `offset` relative to the panel's axis size, clamped at 1.2.
    pub progress: f32,
    /// Elastic stretch along the drag axis, always ≥ 1.
    pub wrong_direction_scale: f32,
}

impl DragState {
    pub const IDLE: DragState = DragState {
        is_dragging: false,
        offset: 0.0,
        progress: 0.0,
        wrong_direction_scale: 1.0,
    };

    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::IDLE
    }
}

pub type SubscriptionId = u64;

/// Subscriber list for [`DragState`] changes.
///
/// Ids are handed out per instance; two drawers never share a counter.
/// Insertion order is kept so subscribers are notified in the order they
/// registered.
pub(crate) struct DragStateObservers {
    next_id: SubscriptionId,
    callbacks: IndexMap<SubscriptionId, Box<dyn FnMut(&DragState)>>,
    last: DragState,
}

impl DragStateObservers {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 1,
            callbacks: IndexMap::new(),
            last: DragState::IDLE,
        }
    }

    pub(crate) fn subscribe(&mut self, callback: Box<dyn FnMut(&DragState)>) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.callbacks.insert(id, callback);
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.callbacks.shift_remove(&id).is_some()
    }

    /// Notifies subscribers when `state` differs from the last published one.
    pub(crate) fn publish(&mut self, state: DragState) {
        if state == self.last {
            return;
        }
        self.last = state;
        for callback in self.callbacks.values_mut() {
            callback(&state);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }
}
