//! Scoped input listener attachment.

use smallvec::SmallVec;
use std::rc::Rc;

pub type ListenerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Pointer,
    Touch,
    Wheel,
}

/// Host-side event target the drawer listens on.
pub trait InputSource {
    /// Starts delivering events of `kind`. `None` when the host cannot.
    fn attach(&self, kind: ListenerKind) -> Option<ListenerId>;

    fn detach(&self, id: ListenerId);
}

/// Listeners attached for one enabled drawer.
///
/// Dropping the registration detaches every listener it holds, so a
/// partially attached set is cleaned up on early return as well.
pub struct ListenerRegistration {
    source: Rc<dyn InputSource>,
    ids: SmallVec<[ListenerId; 3]>,
}

impl ListenerRegistration {
    pub(crate) fn attach(source: Rc<dyn InputSource>, kinds: &[ListenerKind]) -> Option<Self> {
        let mut registration = Self {
            source,
            ids: SmallVec::new(),
        };
        for &kind in kinds {
            let Some(id) = registration.source.attach(kind) else {
                log::debug!("input source refused {kind:?} listener");
                return None;
            };
            registration.ids.push(id);
        }
        Some(registration)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn cancel(mut self) {
        self.detach_all();
    }

    fn detach_all(&mut self) {
        for id in self.ids.drain(..) {
            self.source.detach(id);
        }
    }
}

impl Drop for ListenerRegistration {
    fn drop(&mut self) {
        self.detach_all();
    }
}
