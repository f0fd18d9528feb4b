use super::{PointerEvent, Tool, ToolSettings};
use crate::command::Commit;
use crate::document::Document;
use crate::item::{Item, RectangleItem};

/// Rectangle drawing. Shift snaps to a square; alt makes the anchor the
/// center.
#[derive(Debug, Default)]
pub struct RectangleTool {
    pending: Option<Item>,
}

impl Tool for RectangleTool {
    fn pointer_down(
        &mut self,
        _document: &mut Document,
        settings: &ToolSettings,
        event: &PointerEvent,
    ) -> Option<Commit> {
        self.pending = Some(Item::Rectangle(RectangleItem::new(
            settings.stroke_style(),
            event.location,
        )));
        None
    }

    fn pointer_dragged(
        &mut self,
        _document: &mut Document,
        _settings: &ToolSettings,
        event: &PointerEvent,
    ) {
        if let Some(Item::Rectangle(item)) = &mut self.pending {
            item.set_square(event.modifiers.shift);
            item.set_center_mode(event.modifiers.alt);
            item.set_to(event.location);
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

    fn commit_pending(&mut self, document: &mut Document) -> Option<Commit> {
        self.pending
            .take()
            .map(|item| Commit::Item(document.commit(item)))
    }

    fn preview(&self) -> Option<&Item> {
        self.pending.as_ref()
    }
}
