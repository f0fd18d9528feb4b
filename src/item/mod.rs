//! The shape model: polymorphic render items, each producing a centerline
//! and a local bounding box with generation-cached derived geometry.

use egui::{Pos2, Rect, Vec2};

mod common;
mod ellipse;
mod freehand;
mod grid;
mod image;
mod line;
mod rectangle;

pub use common::{DrawingCore, ItemId, Sample, StrokeStyle};
pub use ellipse::EllipseItem;
pub use freehand::FreehandItem;
pub use grid::GridItem;
pub use image::ImageItem;
pub use line::LineItem;
pub use rectangle::RectangleItem;

use crate::compose::Primitive;

/// Common interface for everything the composer can put on screen.
///
/// `local_bounding_rect` and the draw primitive are derived lazily and cached
/// against the item's generation counter; `global_position` is deliberately
/// outside that contract so move tools can translate an item without
/// invalidating its geometry.
pub trait RenderItem {
    fn id(&self) -> ItemId;
    fn global_position(&self) -> Vec2;
    fn set_global_position(&mut self, position: Vec2);
    fn local_bounding_rect(&self) -> Rect;
    fn hidden(&self) -> bool;
    fn set_hidden(&mut self, hidden: bool);
    /// Frozen items are skipped by default hit-testing until the override
    /// modifier is held.
    fn frozen(&self) -> bool;
    fn set_frozen(&mut self, frozen: bool);
    fn is_opaque(&self) -> bool;
    /// Distance from a point in global coordinates to the item's rendered
    /// outline; negative inside, `INFINITY` for items that opt out of
    /// hit-testing.
    fn distance(&self, global_location: Pos2) -> f32;
    /// The draw primitive handed to the rendering backend, in local
    /// coordinates.
    fn primitive(&self) -> Primitive;

    fn bounding_rect(&self) -> Rect {
        self.local_bounding_rect().translate(self.global_position())
    }

    fn translate(&mut self, delta: Vec2) {
        self.set_global_position(self.global_position() + delta);
    }
}

/// Closed set of shape variants.
#[derive(Debug)]
pub enum Item {
    Freehand(FreehandItem),
    Line(LineItem),
    Rectangle(RectangleItem),
    Ellipse(EllipseItem),
    Image(ImageItem),
    Grid(GridItem),
}

impl Item {
    pub fn kind(&self) -> &'static str {
        match self {
            Item::Freehand(_) => "freehand",
            Item::Line(_) => "line",
            Item::Rectangle(_) => "rectangle",
            Item::Ellipse(_) => "ellipse",
            Item::Image(_) => "image",
            Item::Grid(_) => "grid",
        }
    }

    pub fn as_render_item(&self) -> &dyn RenderItem {
        match self {
            Item::Freehand(item) => item,
            Item::Line(item) => item,
            Item::Rectangle(item) => item,
            Item::Ellipse(item) => item,
            Item::Image(item) => item,
            Item::Grid(item) => item,
        }
    }

    pub fn as_render_item_mut(&mut self) -> &mut dyn RenderItem {
        match self {
            Item::Freehand(item) => item,
            Item::Line(item) => item,
            Item::Rectangle(item) => item,
            Item::Ellipse(item) => item,
            Item::Image(item) => item,
            Item::Grid(item) => item,
        }
    }
}

impl RenderItem for Item {
    fn id(&self) -> ItemId {
        self.as_render_item().id()
    }

    fn global_position(&self) -> Vec2 {
        self.as_render_item().global_position()
    }

    fn set_global_position(&mut self, position: Vec2) {
        self.as_render_item_mut().set_global_position(position);
    }

    fn local_bounding_rect(&self) -> Rect {
        self.as_render_item().local_bounding_rect()
    }

    fn hidden(&self) -> bool {
        self.as_render_item().hidden()
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.as_render_item_mut().set_hidden(hidden);
    }

    fn frozen(&self) -> bool {
        self.as_render_item().frozen()
    }

    fn set_frozen(&mut self, frozen: bool) {
        self.as_render_item_mut().set_frozen(frozen);
    }

    fn is_opaque(&self) -> bool {
        self.as_render_item().is_opaque()
    }

    fn distance(&self, global_location: Pos2) -> f32 {
        self.as_render_item().distance(global_location)
    }

    fn primitive(&self) -> Primitive {
        self.as_render_item().primitive()
    }
}

impl From<FreehandItem> for Item {
    fn from(item: FreehandItem) -> Self {
        Item::Freehand(item)
    }
}

impl From<LineItem> for Item {
    fn from(item: LineItem) -> Self {
        Item::Line(item)
    }
}

impl From<RectangleItem> for Item {
    fn from(item: RectangleItem) -> Self {
        Item::Rectangle(item)
    }
}

impl From<EllipseItem> for Item {
    fn from(item: EllipseItem) -> Self {
        Item::Ellipse(item)
    }
}

impl From<ImageItem> for Item {
    fn from(item: ImageItem) -> Self {
        Item::Image(item)
    }
}

impl From<GridItem> for Item {
    fn from(item: GridItem) -> Self {
        Item::Grid(item)
    }
}
