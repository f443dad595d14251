//! Element ids for the panel's title and description.

use std::cell::Cell;

/// Ids one drawer instance uses to label its dialog.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DrawerIds {
    pub instance: u32,
    pub title: String,
    pub description: String,
}

/// Hands out distinct [`DrawerIds`].
///
/// Each scope keeps its own counter; hosts create one per document.
#[derive(Debug)]
pub struct IdScope {
    prefix: String,
    next: Cell<u32>,
}

impl IdScope {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(1),
        }
    }

    pub fn next_ids(&self) -> DrawerIds {
        let instance = self.next.get();
        self.next.set(instance.wrapping_add(1));
        DrawerIds {
            instance,
            title: format!("{}-{instance}-title", self.prefix),
            description: format!("{}-{instance}-description", self.prefix),
        }
    }
}

impl Default for IdScope {
    fn default() -> Self {
        Self::new("drawer")
    }
}
