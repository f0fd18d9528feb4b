//! Per-frame render list composition: viewport culling, opaque/translucent
//! partitioning and back-to-front depth assignment. The resulting list is
//! handed to an external rasterizer; no draw calls are issued here.

use std::sync::Arc;

use egui::{Pos2, Rect, Rgba, Vec2};
use log::trace;

use crate::image::ImageData;
use crate::item::{Item, ItemId, RenderItem};

/// Backend-agnostic draw geometry in item-local coordinates.
#[derive(Debug, Clone)]
pub enum Primitive {
    /// Flat triangle list, three vertices per triangle.
    Triangles {
        vertices: Arc<[Pos2]>,
        color: Rgba,
    },
    /// Two-triangle textured quad; the backend resolves the pixel buffer to
    /// a texture keyed by item id.
    TexturedQuad {
        vertices: [Pos2; 6],
        uvs: [Pos2; 6],
        image: Arc<ImageData>,
    },
    /// Endpoint pairs for a line list.
    Lines {
        vertices: Arc<[Pos2]>,
        color: Rgba,
    },
}

/// One item's contribution to a frame.
#[derive(Debug, Clone)]
pub struct DrawCall {
    pub id: ItemId,
    /// In `(0, 1]`; later-committed items carry larger depth, so equal-alpha
    /// overlaps resolve by commit order under depth testing.
    pub depth: f32,
    /// Translation from local to global coordinates.
    pub position: Vec2,
    pub primitive: Primitive,
}

/// The composed frame. Opaque calls may be drawn in any order under depth
/// test; translucent calls are ordered back-to-front (ascending depth) and
/// must be blended in sequence with depth write but no depth rejection.
#[derive(Debug, Default)]
pub struct RenderList {
    pub opaque: Vec<DrawCall>,
    pub translucent: Vec<DrawCall>,
}

impl RenderList {
    pub fn len(&self) -> usize {
        self.opaque.len() + self.translucent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opaque.is_empty() && self.translucent.is_empty()
    }
}

/// Compose the frame's draw list from the committed items in order.
///
/// Hidden items and items whose bounding rect misses the viewport are
/// culled before depth assignment, so depth spacing adapts to what is
/// actually visible.
pub fn compose(items: &[Item], viewport: Rect) -> RenderList {
    let surviving: Vec<&Item> = items
        .iter()
        .filter(|item| !item.hidden() && viewport.intersects(item.bounding_rect()))
        .collect();
    let count = surviving.len();

    let mut list = RenderList::default();
    for (index, item) in surviving.into_iter().enumerate() {
        let call = DrawCall {
            id: item.id(),
            depth: (index + 1) as f32 / count as f32,
            position: item.global_position(),
            primitive: item.primitive(),
        };
        if item.is_opaque() {
            list.opaque.push(call);
        } else {
            list.translucent.push(call);
        }
    }
    trace!(
        "composed {} opaque + {} translucent of {} items",
        list.opaque.len(),
        list.translucent.len(),
        items.len()
    );
    list
}
