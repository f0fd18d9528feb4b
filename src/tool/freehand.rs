use super::{PointerEvent, Tool, ToolSettings};
use crate::command::Commit;
use crate::document::Document;
use crate::item::{FreehandItem, Item};

/// Freehand drawing: every drag event appends a pressure sample.
#[derive(Debug, Default)]
pub struct FreehandTool {
    pending: Option<Item>,
}

impl Tool for FreehandTool {
    fn pointer_down(
        &mut self,
        _document: &mut Document,
        settings: &ToolSettings,
        event: &PointerEvent,
    ) -> Option<Commit> {
        let mut item = FreehandItem::new(settings.stroke_style());
        item.push_sample(event.location, event.pressure);
        self.pending = Some(Item::Freehand(item));
        None
    }

    fn pointer_dragged(
        &mut self,
        _document: &mut Document,
        _settings: &ToolSettings,
        event: &PointerEvent,
    ) {
        if let Some(Item::Freehand(item)) = &mut self.pending {
            // Skip duplicate samples from stationary drag events.
            if item.last_location() != Some(event.location) {
                item.push_sample(event.location, event.pressure);
            }
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
