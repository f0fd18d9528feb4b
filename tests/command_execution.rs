use egui::{Modifiers, Rgba, pos2, vec2};
use whiteboard_geom::command::{Commit, ErasedItems, MovedItems};
use whiteboard_geom::document::Document;
use whiteboard_geom::item::{FreehandItem, Item, RenderItem, StrokeStyle};
use whiteboard_geom::tool::{
    CursorTool, EraserTool, FreehandTool, PointerEvent, Tool, ToolSettings,
};

fn stroke(from: (f32, f32), to: (f32, f32), width: f32) -> FreehandItem {
    let mut item = FreehandItem::new(StrokeStyle::new(Rgba::BLACK, width));
    item.push_sample(pos2(from.0, from.1), 1.0);
    item.push_sample(pos2(to.0, to.1), 1.0);
    item
}

fn alt() -> Modifiers {
    Modifiers {
        alt: true,
        ..Default::default()
    }
}

#[test]
fn erase_and_restore_are_inverse() {
    let mut document = Document::new();
    let a = document.commit(stroke((0.0, 0.0), (10.0, 0.0), 2.0));
    let b = document.commit(stroke((0.0, 5.0), (10.0, 5.0), 2.0));

    let mut batch = ErasedItems::new();
    batch.push(a);
    batch.push(b);
    batch.erase(&mut document);
    assert!(document.get(a).unwrap().hidden());
    assert!(document.get(b).unwrap().hidden());

    batch.restore(&mut document);
    assert!(!document.get(a).unwrap().hidden());
    assert!(!document.get(b).unwrap().hidden());
}

#[test]
fn erase_ignores_ids_no_longer_in_the_document() {
    let mut document = Document::new();
    let id = document.commit(stroke((0.0, 0.0), (1.0, 0.0), 2.0));
    let mut other = Document::new();
    let mut batch = ErasedItems::new();
    batch.push(id);
    // Must not panic or touch anything else.
    batch.erase(&mut other);
    assert!(!document.get(id).unwrap().hidden());
}

#[test]
fn move_revert_apply_round_trips_positions() {
    let mut document = Document::new();
    let id = document.commit(stroke((0.0, 0.0), (10.0, 0.0), 2.0));
    let origin = document.get(id).unwrap().global_position();

    let mut batch = MovedItems::new(vec![id]);
    batch.drag_by(&mut document, vec2(3.0, 4.0));
    batch.drag_by(&mut document, vec2(1.0, -1.0));
    assert!(batch.moved());
    assert_eq!(batch.offset(), vec2(4.0, 3.0));
    assert_eq!(document.get(id).unwrap().global_position(), origin + vec2(4.0, 3.0));

    batch.revert(&mut document);
    assert!(!batch.moved());
    assert_eq!(document.get(id).unwrap().global_position(), origin);
    // A second revert is a no-op.
    batch.revert(&mut document);
    assert_eq!(document.get(id).unwrap().global_position(), origin);

    batch.apply(&mut document);
    assert_eq!(document.get(id).unwrap().global_position(), origin + vec2(4.0, 3.0));
    // A second apply is a no-op.
    batch.apply(&mut document);
    assert_eq!(document.get(id).unwrap().global_position(), origin + vec2(4.0, 3.0));
}

#[test]
fn freehand_tool_commits_on_release_and_dedupes_stationary_events() {
    let mut document = Document::new();
    let settings = ToolSettings::default();
    let mut tool = FreehandTool::default();

    assert!(tool.pointer_down(&mut document, &settings, &PointerEvent::at(pos2(0.0, 0.0))).is_none());
    tool.pointer_dragged(&mut document, &settings, &PointerEvent::at(pos2(1.0, 0.0)));
    tool.pointer_dragged(&mut document, &settings, &PointerEvent::at(pos2(1.0, 0.0)));
    tool.pointer_dragged(&mut document, &settings, &PointerEvent::at(pos2(2.0, 0.0)));

    let Some(Item::Freehand(pending)) = tool.preview() else {
        panic!("expected a freehand preview");
    };
    assert_eq!(pending.points().len(), 3);

    let commit = tool.pointer_up(&mut document, &settings, &PointerEvent::at(pos2(2.0, 0.0)));
    let Some(Commit::Item(id)) = commit else {
        panic!("expected an item commit");
    };
    assert!(document.get(id).is_some());
    assert!(tool.preview().is_none());
}

#[test]
fn eraser_collects_one_batch_per_gesture() {
    let mut document = Document::new();
    // Two strokes crossing at the origin; the eraser hits the topmost first.
    let bottom = document.commit(stroke((-10.0, 0.0), (10.0, 0.0), 2.0));
    let top = document.commit(stroke((0.0, -10.0), (0.0, 10.0), 2.0));

    let settings = ToolSettings::default();
    let mut tool = EraserTool::default();
    assert!(tool.pointer_down(&mut document, &settings, &PointerEvent::at(pos2(0.0, 0.0))).is_none());
    assert!(document.get(top).unwrap().hidden());
    assert!(!document.get(bottom).unwrap().hidden());

    // The second pass over the same spot reaches the stroke underneath.
    tool.pointer_dragged(&mut document, &settings, &PointerEvent::at(pos2(0.0, 0.0)));
    assert!(document.get(bottom).unwrap().hidden());

    let commit = tool.pointer_up(&mut document, &settings, &PointerEvent::at(pos2(0.0, 0.0)));
    let Some(Commit::Erased(batch)) = commit else {
        panic!("expected an erase commit");
    };
    assert_eq!(batch.ids(), [top, bottom]);
}

#[test]
fn eraser_without_hits_produces_no_commit() {
    let mut document = Document::new();
    document.commit(stroke((0.0, 0.0), (10.0, 0.0), 2.0));
    let settings = ToolSettings::default();
    let mut tool = EraserTool::default();
    tool.pointer_down(&mut document, &settings, &PointerEvent::at(pos2(100.0, 100.0)));
    let commit = tool.pointer_up(&mut document, &settings, &PointerEvent::at(pos2(100.0, 100.0)));
    assert!(commit.is_none());
}

#[test]
fn eraser_skips_frozen_items_unless_overridden() {
    let mut document = Document::new();
    let mut item = stroke((0.0, 0.0), (10.0, 0.0), 2.0);
    item.set_frozen(true);
    let id = document.commit(item);

    let settings = ToolSettings::default();
    let mut tool = EraserTool::default();
    tool.pointer_down(&mut document, &settings, &PointerEvent::at(pos2(5.0, 0.0)));
    tool.pointer_up(&mut document, &settings, &PointerEvent::at(pos2(5.0, 0.0)));
    assert!(!document.get(id).unwrap().hidden());

    let event = PointerEvent::at(pos2(5.0, 0.0)).with_modifiers(alt());
    tool.pointer_down(&mut document, &settings, &event);
    assert!(document.get(id).unwrap().hidden());
}

#[test]
fn cursor_picks_moves_and_commits_the_batch() {
    let mut document = Document::new();
    let id = document.commit(stroke((0.0, 0.0), (10.0, 0.0), 4.0));
    let origin = document.get(id).unwrap().global_position();

    let settings = ToolSettings::default();
    let mut tool = CursorTool::default();
    assert!(tool.pointer_down(&mut document, &settings, &PointerEvent::at(pos2(5.0, 0.0))).is_none());
    assert!(tool.preview().is_some(), "selection outline should be shown");

    let drag = PointerEvent::at(pos2(8.0, 2.0)).with_delta(vec2(3.0, 2.0));
    tool.pointer_dragged(&mut document, &settings, &drag);
    assert_eq!(document.get(id).unwrap().global_position(), origin + vec2(3.0, 2.0));

    tool.pointer_up(&mut document, &settings, &drag);
    let Some(Commit::Moved(batch)) = tool.commit_pending(&mut document) else {
        panic!("expected a move commit");
    };
    assert_eq!(batch.ids(), [id]);
    assert_eq!(batch.offset(), vec2(3.0, 2.0));
}

#[test]
fn cursor_click_without_drag_commits_nothing() {
    let mut document = Document::new();
    document.commit(stroke((0.0, 0.0), (10.0, 0.0), 4.0));
    let settings = ToolSettings::default();
    let mut tool = CursorTool::default();
    tool.pointer_down(&mut document, &settings, &PointerEvent::at(pos2(5.0, 0.0)));
    tool.pointer_up(&mut document, &settings, &PointerEvent::at(pos2(5.0, 0.0)));
    assert!(tool.commit_pending(&mut document).is_none());
}

#[test]
fn rubber_band_selects_fully_contained_items() {
    let mut document = Document::new();
    let inside = document.commit(stroke((10.0, 10.0), (20.0, 10.0), 2.0));
    let outside = document.commit(stroke((100.0, 100.0), (120.0, 100.0), 2.0));
    let straddling = document.commit(stroke((20.0, 20.0), (60.0, 20.0), 2.0));

    let settings = ToolSettings::default();
    let mut tool = CursorTool::default();
    // Start on empty canvas, drag a band around the first stroke.
    tool.pointer_down(&mut document, &settings, &PointerEvent::at(pos2(0.0, 0.0)));
    tool.pointer_dragged(&mut document, &settings, &PointerEvent::at(pos2(40.0, 15.0)));
    tool.pointer_up(&mut document, &settings, &PointerEvent::at(pos2(40.0, 15.0)));

    let drag = PointerEvent::at(pos2(15.0, 10.0)).with_delta(vec2(0.0, 5.0));
    tool.pointer_dragged(&mut document, &settings, &drag);
    let Some(Commit::Moved(batch)) = tool.commit_pending(&mut document) else {
        panic!("expected a move commit");
    };
    assert_eq!(batch.ids(), [inside]);
    assert_eq!(
        document.get(outside).unwrap().global_position(),
        egui::Vec2::ZERO
    );
    assert_eq!(
        document.get(straddling).unwrap().global_position(),
        egui::Vec2::ZERO
    );
}

#[test]
fn delete_erases_the_selection_and_reports_the_pending_move() {
    let mut document = Document::new();
    let id = document.commit(stroke((0.0, 0.0), (10.0, 0.0), 4.0));

    let settings = ToolSettings::default();
    let mut tool = CursorTool::default();
    tool.pointer_down(&mut document, &settings, &PointerEvent::at(pos2(5.0, 0.0)));
    let drag = PointerEvent::at(pos2(6.0, 0.0)).with_delta(vec2(1.0, 0.0));
    tool.pointer_dragged(&mut document, &settings, &drag);

    let commits = tool.handle_delete(&mut document);
    assert_eq!(commits.len(), 2);
    assert!(matches!(commits[0], Commit::Moved(_)));
    assert!(matches!(commits[1], Commit::Erased(_)));
    assert!(document.get(id).unwrap().hidden());
    assert!(tool.preview().is_none());
}

#[test]
fn delete_without_selection_does_nothing() {
    let mut document = Document::new();
    document.commit(stroke((0.0, 0.0), (10.0, 0.0), 4.0));
    let mut tool = CursorTool::default();
    assert!(tool.handle_delete(&mut document).is_empty());
}

#[test]
fn cursor_skips_frozen_items_unless_overridden() {
    let mut document = Document::new();
    let mut item = stroke((0.0, 0.0), (10.0, 0.0), 4.0);
    item.set_frozen(true);
    document.commit(item);

    let settings = ToolSettings::default();
    let mut tool = CursorTool::default();
    tool.pointer_down(&mut document, &settings, &PointerEvent::at(pos2(5.0, 0.0)));
    // Without alt the click starts a rubber band instead of a move.
    let drag = PointerEvent::at(pos2(6.0, 0.0)).with_delta(vec2(1.0, 0.0));
    tool.pointer_dragged(&mut document, &settings, &drag);
    assert!(tool.commit_pending(&mut document).is_none());

    let event = PointerEvent::at(pos2(5.0, 0.0)).with_modifiers(alt());
    tool.pointer_down(&mut document, &settings, &event);
    tool.pointer_dragged(&mut document, &settings, &drag);
    let Some(Commit::Moved(_)) = tool.commit_pending(&mut document) else {
        panic!("frozen item should be movable with the override modifier");
    };
}
