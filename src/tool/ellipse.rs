use super::{PointerEvent, Tool, ToolSettings};
use crate::command::Commit;
use crate::document::Document;
use crate::item::{EllipseItem, Item};

/// Ellipse drawing. Shift snaps to a circle; alt makes the anchor the
/// center.
#[derive(Debug, Default)]
pub struct EllipseTool {
    pending: Option<Item>,
}

impl Tool for EllipseTool {
    fn pointer_down(
        &mut self,
        _document: &mut Document,
        settings: &ToolSettings,
        event: &PointerEvent,
    ) -> Option<Commit> {
        self.pending = Some(Item::Ellipse(EllipseItem::new(
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
        if let Some(Item::Ellipse(item)) = &mut self.pending {
            item.set_circle(event.modifiers.shift);
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
