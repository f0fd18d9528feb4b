//! State shared by every stroked item variant.

use std::sync::Arc;

use egui::{Pos2, Rgba, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cache::Cached;
use crate::tessellate;

/// Opaque identity for a committed item. The rendering backend keys its GPU
/// resources on this instead of holding pointers into the shape model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// One centerline point with its input pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub location: Pos2,
    /// In `(0, 1]`; devices without pressure report 1.0.
    pub pressure: f32,
}

impl Sample {
    pub fn new(location: Pos2) -> Self {
        Self {
            location,
            pressure: 1.0,
        }
    }

    pub fn with_pressure(location: Pos2, pressure: f32) -> Self {
        Self { location, pressure }
    }

    /// Stroke-radius multiplier for this sample. Clamps the visible radius
    /// to 15% of nominal at zero pressure.
    pub fn scale_factor(&self) -> f32 {
        0.15 + 0.85 * self.pressure.sqrt()
    }
}

/// Stroke appearance shared by the drawn variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    /// Nominal stroke diameter in plane units.
    pub width: f32,
}

impl StrokeStyle {
    pub fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

/// Common attribute block embedded in each stroked variant: identity, style,
/// placement, visibility flags, the generation counter and the tessellated
/// mesh cache.
#[derive(Debug)]
pub struct DrawingCore {
    id: ItemId,
    pub(crate) style: StrokeStyle,
    pub(crate) global_position: Vec2,
    pub(crate) hidden: bool,
    pub(crate) frozen: bool,
    generation: u64,
    mesh: Cached<Arc<[Pos2]>>,
}

impl DrawingCore {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            id: ItemId::new(),
            style,
            global_position: Vec2::ZERO,
            hidden: false,
            frozen: false,
            generation: 1,
            mesh: Cached::new(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Invalidate all generation-keyed caches hanging off this item.
    pub fn mark_dirty(&mut self) {
        self.generation += 1;
    }

    /// The tessellated triangle list for the given centerline, cached per
    /// generation.
    pub fn mesh(&self, samples: &[Sample], closed: bool) -> Arc<[Pos2]> {
        self.mesh.get_or_compute(self.generation, || {
            tessellate::stroke_mesh(samples, closed, self.style.width).into()
        })
    }

    pub(crate) fn is_opaque(&self) -> bool {
        self.style.color.a() == 1.0
    }

    /// Stroke-edge distance for a query point in global coordinates.
    pub(crate) fn distance_along(
        &self,
        samples: &[Sample],
        closed: bool,
        global_location: Pos2,
    ) -> f32 {
        crate::hit::distance_to_path(
            samples,
            closed,
            self.style.width,
            global_location - self.global_position,
        )
    }

    pub(crate) fn triangles(&self, samples: &[Sample], closed: bool) -> crate::compose::Primitive {
        crate::compose::Primitive::Triangles {
            vertices: self.mesh(samples, closed),
            color: self.style.color,
        }
    }
}
