use super::{PointerEvent, Tool, ToolSettings};
use crate::command::Commit;
use crate::document::Document;
use crate::item::{Item, LineItem};

/// Line drawing. Shift aligns the line to the nearest 45° direction; alt
/// makes the anchor the midpoint.
#[derive(Debug, Default)]
pub struct LineTool {
    pending: Option<Item>,
}

impl Tool for LineTool {
    fn pointer_down(
        &mut self,
        _document: &mut Document,
        settings: &ToolSettings,
        event: &PointerEvent,
    ) -> Option<Commit> {
        self.pending = Some(Item::Line(LineItem::new(
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
        if let Some(Item::Line(item)) = &mut self.pending {
            item.set_center_mode(event.modifiers.alt);
            item.set_aligning(event.modifiers.shift);
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
