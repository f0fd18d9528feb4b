//! The input boundary: tools turn pointer events into shape mutations and
//! commits.
//!
//! A tool owns at most one pending item while a gesture is in flight; the
//! pending item is only visible through [`Tool::preview`] until the gesture
//! ends and the item is committed into the document. Modifier keys are read
//! per event to select the constrained variants (square/circle/align/center
//! mode).

use egui::{Modifiers, Pos2, Rgba, Vec2};

mod cursor;
mod ellipse;
mod eraser;
mod freehand;
mod image;
mod line;
mod rectangle;

pub use cursor::CursorTool;
pub use ellipse::EllipseTool;
pub use eraser::EraserTool;
pub use freehand::FreehandTool;
pub use image::ImageTool;
pub use line::LineTool;
pub use rectangle::RectangleTool;

use crate::command::Commit;
use crate::document::Document;
use crate::item::{Item, StrokeStyle};

/// A pointer event already converted into the shape coordinate space by the
/// view layer.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub location: Pos2,
    /// Displacement since the previous event of the drag.
    pub delta: Vec2,
    /// In `(0, 1]`; 1.0 when the device reports no pressure.
    pub pressure: f32,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn at(location: Pos2) -> Self {
        Self {
            location,
            delta: Vec2::ZERO,
            pressure: 1.0,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_delta(mut self, delta: Vec2) -> Self {
        self.delta = delta;
        self
    }

    pub fn with_pressure(mut self, pressure: f32) -> Self {
        self.pressure = pressure;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Stroke and eraser parameters shared by the tools, owned by the toolbar.
#[derive(Debug, Clone, Copy)]
pub struct ToolSettings {
    pub stroke_color: Rgba,
    pub stroke_width: f32,
    pub eraser_width: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            stroke_color: Rgba::BLACK,
            stroke_width: 2.0,
            eraser_width: 10.0,
        }
    }
}

impl ToolSettings {
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.stroke_color, self.stroke_width)
    }
}

pub trait Tool {
    fn pointer_down(
        &mut self,
        document: &mut Document,
        settings: &ToolSettings,
        event: &PointerEvent,
    ) -> Option<Commit>;

    fn pointer_dragged(
        &mut self,
        document: &mut Document,
        settings: &ToolSettings,
        event: &PointerEvent,
    );

    fn pointer_up(
        &mut self,
        document: &mut Document,
        settings: &ToolSettings,
        event: &PointerEvent,
    ) -> Option<Commit>;

    /// Finish whatever gesture is in flight, e.g. when the tool is switched
    /// away or the user presses Enter.
    fn commit_pending(&mut self, document: &mut Document) -> Option<Commit>;

    /// Delete-key handling; may produce several commits (a finished move
    /// followed by the erase).
    fn handle_delete(&mut self, _document: &mut Document) -> Vec<Commit> {
        Vec::new()
    }

    /// The uncommitted item to draw on top of the document, if any.
    fn preview(&self) -> Option<&Item> {
        None
    }
}
