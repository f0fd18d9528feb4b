#![warn(clippy::all, rust_2018_idioms)]

//! Vector-shape geometry engine for an interactive whiteboard.
//!
//! Shapes are committed into a [`Document`], tessellated into flat triangle
//! meshes for a GPU backend, and composed into a depth-ordered render list
//! per frame. The windowing layer, GPU pipeline and undo collector are
//! external; this crate exposes their contracts (pointer events in, draw
//! lists and invertible command batches out) without implementing them.

pub mod cache;
pub mod command;
pub mod compose;
pub mod document;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod image;
pub mod item;
pub mod presets;
pub mod tessellate;
pub mod tool;

pub use cache::Cached;
pub use command::{Commit, ErasedItems, MovedItems};
pub use compose::{DrawCall, Primitive, RenderList, compose};
pub use document::Document;
pub use error::{DecodeError, PresetsError};
pub use image::ImageData;
pub use item::{
    EllipseItem, FreehandItem, GridItem, ImageItem, Item, ItemId, LineItem, RectangleItem,
    RenderItem, Sample, StrokeStyle,
};
pub use presets::{PresetId, Presets, StrokePreset};
pub use tool::{PointerEvent, Tool, ToolSettings};
