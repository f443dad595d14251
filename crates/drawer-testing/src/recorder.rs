//! Recorders for what the engine hands back to the host.

use drawer_core::{DrawerCallbacks, InputSource, ListenerId, ListenerKind};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostCallback {
    Close,
    Minimize,
    Restore,
}

/// Shared log of every host callback fired, in order.
#[derive(Clone, Default)]
pub struct CallbackLog {
    entries: Rc<RefCell<Vec<HostCallback>>>,
}

impl CallbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks that append to this log.
    pub fn callbacks(&self) -> DrawerCallbacks {
        let close = self.sink(HostCallback::Close);
        let minimize = self.sink(HostCallback::Minimize);
        let restore = self.sink(HostCallback::Restore);
        DrawerCallbacks::new()
            .on_close(close)
            .on_minimize(minimize)
            .on_restore(restore)
    }

    pub fn entries(&self) -> Vec<HostCallback> {
        self.entries.borrow().clone()
    }

    pub fn count(&self, kind: HostCallback) -> usize {
        self.entries.borrow().iter().filter(|entry| **entry == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn sink(&self, kind: HostCallback) -> impl FnMut() + 'static {
        let entries = Rc::clone(&self.entries);
        move || entries.borrow_mut().push(kind)
    }
}

/// Input source that tracks which listeners are attached.
#[derive(Default)]
pub struct FakeInputSource {
    next_id: RefCell<ListenerId>,
    live: RefCell<Vec<(ListenerId, ListenerKind)>>,
    refused: RefCell<Vec<ListenerKind>>,
}

impl FakeInputSource {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Makes later `attach` calls for `kind` fail.
    pub fn refuse(&self, kind: ListenerKind) {
        self.refused.borrow_mut().push(kind);
    }

    pub fn live_kinds(&self) -> Vec<ListenerKind> {
        self.live.borrow().iter().map(|(_, kind)| *kind).collect()
    }

    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }
}

impl InputSource for FakeInputSource {
    fn attach(&self, kind: ListenerKind) -> Option<ListenerId> {
        if self.refused.borrow().contains(&kind) {
            return None;
        }
        let mut next_id = self.next_id.borrow_mut();
        *next_id += 1;
        self.live.borrow_mut().push((*next_id, kind));
        Some(*next_id)
    }

    fn detach(&self, id: ListenerId) {
        self.live.borrow_mut().retain(|(live, _)| *live != id);
    }
}
