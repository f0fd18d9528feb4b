//! The committed shape list.
//!
//! Commit is the only way a shape becomes persistent: tools build items
//! privately during a drag and hand them over here on pointer-up. Erasing
//! toggles `hidden` instead of removing, which keeps the operation
//! invertible for the external undo collector.

use log::info;

use crate::item::{Item, ItemId, RenderItem};

#[derive(Debug, Default)]
pub struct Document {
    items: Vec<Item>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed item. Returns its id for undo bookkeeping.
    pub fn commit(&mut self, item: impl Into<Item>) -> ItemId {
        let item = item.into();
        let id = item.id();
        info!("commit {} item {:?}", item.kind(), id);
        self.items.push(item);
        id
    }

    /// Committed items, oldest first.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
