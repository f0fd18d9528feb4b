use egui::{Pos2, Rect, Rgba};

use super::{PointerEvent, Tool, ToolSettings};
use crate::command::{Commit, ErasedItems, MovedItems};
use crate::document::Document;
use crate::hit::PICK_TOLERANCE;
use crate::item::{Item, RectangleItem, RenderItem, StrokeStyle};

fn growing_style() -> StrokeStyle {
    StrokeStyle::new(Rgba::from_rgba_unmultiplied(0.0, 0.0, 0.0, 0.5), 1.0)
}

fn moving_style() -> StrokeStyle {
    StrokeStyle::new(Rgba::from_rgba_unmultiplied(0.2, 0.2, 1.0, 0.8), 1.0)
}

/// A rectangle item outlining `rect`, used as the selection indicator.
fn outline_item(style: StrokeStyle, rect: Rect) -> RectangleItem {
    let mut item = RectangleItem::new(style, Pos2::ZERO);
    item.set_to(Pos2::ZERO + rect.size());
    item.set_global_position(rect.min.to_vec2());
    item
}

#[derive(Debug, Default)]
enum CursorState {
    #[default]
    Idle,
    /// Rubber-band selection in progress; the rectangle item doubles as the
    /// visual indicator.
    Growing(Item),
    /// A selection being dragged around.
    Moving { batch: MovedItems, outline: Item },
}

/// Select and move. Click picks the topmost item under the pointer; dragging
/// an empty area grows a rubber band that selects fully contained items.
/// Frozen items are skipped unless alt is held.
#[derive(Debug, Default)]
pub struct CursorTool {
    state: CursorState,
}

impl Tool for CursorTool {
    fn pointer_down(
        &mut self,
        document: &mut Document,
        _settings: &ToolSettings,
        event: &PointerEvent,
    ) -> Option<Commit> {
        if let CursorState::Moving { outline, .. } = &self.state {
            if outline.bounding_rect().contains(event.location) {
                // The drag moves the current selection.
                return None;
            }
        }
        let finished = self.commit_pending(document);

        for item in document.items().iter().rev() {
            if item.hidden() || item.distance(event.location) >= PICK_TOLERANCE {
                continue;
            }
            if item.frozen() && !event.modifiers.alt {
                continue;
            }
            let bounding = item.bounding_rect();
            self.state = CursorState::Moving {
                batch: MovedItems::new(vec![item.id()]),
                outline: Item::Rectangle(outline_item(moving_style(), bounding)),
            };
            return finished;
        }

        self.state = CursorState::Growing(Item::Rectangle(RectangleItem::new(
            growing_style(),
            event.location,
        )));
        finished
    }

    fn pointer_dragged(
        &mut self,
        document: &mut Document,
        _settings: &ToolSettings,
        event: &PointerEvent,
    ) {
        match &mut self.state {
            CursorState::Idle => {}
            CursorState::Growing(Item::Rectangle(rect)) => {
                rect.set_to(event.location);
            }
            CursorState::Growing(_) => unreachable!("growing state holds a rectangle"),
            CursorState::Moving { batch, outline } => {
                batch.drag_by(document, event.delta);
                outline.translate(event.delta);
            }
        }
    }

    fn pointer_up(
        &mut self,
        document: &mut Document,
        _settings: &ToolSettings,
        event: &PointerEvent,
    ) -> Option<Commit> {
        if let CursorState::Growing(rubber_band) = &self.state {
            let selection_rect = rubber_band.bounding_rect();
            let mut selected = Vec::new();
            let mut outline_rect = Rect::NOTHING;
            for item in document.items() {
                let item_rect = item.bounding_rect();
                if item.hidden() || !selection_rect.contains_rect(item_rect) {
                    continue;
                }
                if item.frozen() && !event.modifiers.alt {
                    continue;
                }
                selected.push(item.id());
                outline_rect = outline_rect.union(item_rect);
            }
            self.state = if selected.is_empty() {
                CursorState::Idle
            } else {
                CursorState::Moving {
                    batch: MovedItems::new(selected),
                    outline: Item::Rectangle(outline_item(moving_style(), outline_rect)),
                }
            };
        }
        None
    }

    fn commit_pending(&mut self, _document: &mut Document) -> Option<Commit> {
        match std::mem::take(&mut self.state) {
            CursorState::Moving { batch, .. } if batch.moved() => Some(Commit::Moved(batch)),
            _ => None,
        }
    }

    /// Delete the current selection: the finished move (if any) followed by
    /// the erase batch.
    fn handle_delete(&mut self, document: &mut Document) -> Vec<Commit> {
        let CursorState::Moving { batch, .. } = std::mem::take(&mut self.state) else {
            return Vec::new();
        };
        let mut erased = ErasedItems::new();
        for &id in batch.ids() {
            erased.push(id);
        }
        erased.erase(document);

        let mut commits = Vec::new();
        if batch.moved() {
            commits.push(Commit::Moved(batch));
        }
        commits.push(Commit::Erased(erased));
        commits
    }

    fn preview(&self) -> Option<&Item> {
        match &self.state {
            CursorState::Idle => None,
            CursorState::Growing(rect) => Some(rect),
            CursorState::Moving { outline, .. } => Some(outline),
        }
    }
}
