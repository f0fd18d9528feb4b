use egui::Pos2;

use super::{PointerEvent, Tool, ToolSettings};
use crate::command::{Commit, ErasedItems};
use crate::document::Document;
use crate::item::{Item, ItemId, RenderItem};

/// Eraser: every item dragged over is hidden immediately and collected into
/// one undoable batch. Images and frozen items are skipped unless the
/// override modifier (alt) is held.
#[derive(Debug, Default)]
pub struct EraserTool {
    pending: Option<ErasedItems>,
}

impl EraserTool {
    /// Topmost visible item within `radius` of `location`.
    fn query_intersected(
        document: &Document,
        location: Pos2,
        radius: f32,
        override_modifier: bool,
    ) -> Option<ItemId> {
        for item in document.items().iter().rev() {
            if item.hidden() || !item.bounding_rect().expand(radius).contains(location) {
                continue;
            }
            if matches!(item, Item::Image(_)) && !override_modifier {
                continue;
            }
            if item.frozen() && !override_modifier {
                continue;
            }
            if item.distance(location) <= radius {
                return Some(item.id());
            }
        }
        None
    }

    fn erase_at(
        &mut self,
        document: &mut Document,
        settings: &ToolSettings,
        event: &PointerEvent,
    ) {
        let radius = settings.eraser_width / 2.0;
        if let Some(id) =
            Self::query_intersected(document, event.location, radius, event.modifiers.alt)
        {
            if let Some(item) = document.get_mut(id) {
                item.set_hidden(true);
            }
            if let Some(pending) = &mut self.pending {
                pending.push(id);
            }
        }
    }
}

impl Tool for EraserTool {
    fn pointer_down(
        &mut self,
        document: &mut Document,
        settings: &ToolSettings,
        event: &PointerEvent,
    ) -> Option<Commit> {
        self.pending = Some(ErasedItems::new());
        self.erase_at(document, settings, event);
        None
    }

    fn pointer_dragged(
        &mut self,
        document: &mut Document,
        settings: &ToolSettings,
        event: &PointerEvent,
    ) {
        if self.pending.is_some() {
            self.erase_at(document, settings, event);
        }
    }

    fn pointer_up(
        &mut self,
        document: &mut Document,
        _settings: &ToolSettings,
        _event: &PointerEvent,
    ) -> Option<Commit> {
        self.commit_pending(document)
    }

    fn commit_pending(&mut self, _document: &mut Document) -> Option<Commit> {
        match self.pending.take() {
            Some(batch) if !batch.is_empty() => Some(Commit::Erased(batch)),
            _ => None,
        }
    }
}
