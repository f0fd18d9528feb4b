//! Transient command batches that make erase and move undoable as single
//! actions.
//!
//! Batches reference committed items by id rather than owning them; the
//! external undo collector stores the batch and replays the forward or
//! inverse operation against the document.

use egui::Vec2;
use log::debug;

use crate::document::Document;
use crate::item::{ItemId, RenderItem};

/// A set of items hidden together by one erase gesture.
#[derive(Debug, Default, Clone)]
pub struct ErasedItems {
    ids: Vec<ItemId>,
}

impl ErasedItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: ItemId) {
        self.ids.push(id);
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Forward operation: hide every item in the batch.
    pub fn erase(&self, document: &mut Document) {
        for &id in &self.ids {
            if let Some(item) = document.get_mut(id) {
                item.set_hidden(true);
            }
        }
        debug!("erased {} items", self.ids.len());
    }

    /// Inverse operation: reveal every item in the batch.
    pub fn restore(&self, document: &mut Document) {
        for &id in &self.ids {
            if let Some(item) = document.get_mut(id) {
                item.set_hidden(false);
            }
        }
    }
}

/// A set of items translated together by one move gesture.
///
/// During the gesture the move tool feeds deltas through [`MovedItems::drag_by`],
/// which mutates the items immediately; `apply`/`revert` then replay or undo
/// the accumulated offset as a whole.
#[derive(Debug, Clone)]
pub struct MovedItems {
    ids: Vec<ItemId>,
    offset: Vec2,
    moved: bool,
}

impl MovedItems {
    pub fn new(ids: Vec<ItemId>) -> Self {
        Self {
            ids,
            offset: Vec2::ZERO,
            moved: false,
        }
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Whether the gesture actually displaced anything.
    pub fn moved(&self) -> bool {
        self.moved
    }

    /// Accumulate a live drag delta, translating the items now.
    pub fn drag_by(&mut self, document: &mut Document, delta: Vec2) {
        self.moved = true;
        self.offset += delta;
        for &id in &self.ids {
            if let Some(item) = document.get_mut(id) {
                item.translate(delta);
            }
        }
    }

    /// Forward operation (redo): re-apply the accumulated offset.
    pub fn apply(&mut self, document: &mut Document) {
        if self.moved {
            return;
        }
        for &id in &self.ids {
            if let Some(item) = document.get_mut(id) {
                item.translate(self.offset);
            }
        }
        self.moved = true;
    }

    /// Inverse operation (undo): remove the accumulated offset.
    pub fn revert(&mut self, document: &mut Document) {
        if !self.moved {
            return;
        }
        for &id in &self.ids {
            if let Some(item) = document.get_mut(id) {
                item.translate(-self.offset);
            }
        }
        self.moved = false;
    }
}

/// What a tool hands to the external undo collector when a gesture
/// completes.
#[derive(Debug)]
pub enum Commit {
    /// A newly committed shape.
    Item(ItemId),
    Erased(ErasedItems),
    Moved(MovedItems),
}
