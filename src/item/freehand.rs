use std::sync::Arc;

use egui::{Pos2, Rect, Vec2, pos2};

use super::RenderItem;
use super::common::{DrawingCore, ItemId, Sample, StrokeStyle};
use crate::cache::Cached;
use crate::compose::Primitive;

/// Freehand polyline: an ordered, append-only list of pressure samples.
#[derive(Debug)]
pub struct FreehandItem {
    core: DrawingCore,
    samples: Vec<Sample>,
    points: Cached<Arc<[Sample]>>,
    bounds: Cached<Rect>,
}

impl FreehandItem {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            core: DrawingCore::new(style),
            samples: Vec::new(),
            points: Cached::new(),
            bounds: Cached::new(),
        }
    }

    pub fn push_sample(&mut self, location: Pos2, pressure: f32) {
        self.samples.push(Sample::with_pressure(location, pressure));
        self.core.mark_dirty();
    }

    pub fn last_location(&self) -> Option<Pos2> {
        self.samples.last().map(|sample| sample.location)
    }

    pub fn style(&self) -> StrokeStyle {
        self.core.style()
    }

    pub fn points(&self) -> Arc<[Sample]> {
        self.points
            .get_or_compute(self.core.generation(), || self.samples.clone().into())
    }
}

impl RenderItem for FreehandItem {
    fn id(&self) -> ItemId {
        self.core.id()
    }

    fn global_position(&self) -> Vec2 {
        self.core.global_position
    }

    fn set_global_position(&mut self, position: Vec2) {
        self.core.global_position = position;
    }

    fn local_bounding_rect(&self) -> Rect {
        self.bounds.get_or_compute(self.core.generation(), || {
            if self.samples.is_empty() {
                return Rect::NOTHING;
            }
            // Exact union of each sample's location inflated by half the
            // stroke width.
            let half = self.core.style().width / 2.0;
            let mut min = pos2(f32::INFINITY, f32::INFINITY);
            let mut max = pos2(f32::NEG_INFINITY, f32::NEG_INFINITY);
            for sample in &self.samples {
                min = min.min(sample.location - Vec2::splat(half));
                max = max.max(sample.location + Vec2::splat(half));
            }
            Rect::from_min_max(min, max)
        })
    }

    fn hidden(&self) -> bool {
        self.core.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.core.hidden = hidden;
    }

    fn frozen(&self) -> bool {
        self.core.frozen
    }

    fn set_frozen(&mut self, frozen: bool) {
        self.core.frozen = frozen;
    }

    fn is_opaque(&self) -> bool {
        self.core.is_opaque()
    }

    fn distance(&self, global_location: Pos2) -> f32 {
        self.core
            .distance_along(&self.points(), false, global_location)
    }

    fn primitive(&self) -> Primitive {
        self.core.triangles(&self.points(), false)
    }
}
