use super::{PointerEvent, Tool, ToolSettings};
use crate::command::Commit;
use crate::document::Document;
use crate::item::{ImageItem, Item, RenderItem};

/// Image placement: a decoded image is parked as the pending item, dragged
/// into position and optionally rescaled/rotated before being committed.
#[derive(Debug, Default)]
pub struct ImageTool {
    pending: Option<Item>,
}

impl ImageTool {
    pub fn set_image(&mut self, item: ImageItem) {
        self.pending = Some(Item::Image(item));
    }

    pub fn set_scale(&mut self, scale: f32) {
        if let Some(Item::Image(item)) = &mut self.pending {
            item.set_scale(scale);
        }
    }

    /// Rotation in radians.
    pub fn set_rotation(&mut self, rotation: f32) {
        if let Some(Item::Image(item)) = &mut self.pending {
            item.set_rotation(rotation);
        }
    }
}

impl Tool for ImageTool {
    fn pointer_down(
        &mut self,
        _document: &mut Document,
        _settings: &ToolSettings,
        _event: &PointerEvent,
    ) -> Option<Commit> {
        None
    }

    fn pointer_dragged(
        &mut self,
        _document: &mut Document,
        _settings: &ToolSettings,
        event: &PointerEvent,
    ) {
        if let Some(item) = &mut self.pending {
            item.translate(event.delta);
        }
    }

    fn pointer_up(
        &mut self,
        _document: &mut Document,
        _settings: &ToolSettings,
        _event: &PointerEvent,
    ) -> Option<Commit> {
        None
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
