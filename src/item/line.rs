use std::sync::Arc;

use egui::{Pos2, Rect, Vec2};

use super::RenderItem;
use super::common::{DrawingCore, ItemId, Sample, StrokeStyle};
use crate::cache::Cached;
use crate::compose::Primitive;
use crate::geometry::HALF_SQRT_2;

/// The 8 compass directions used by align mode, anticlockwise from north.
const ALIGN_DIRS: [Vec2; 8] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(HALF_SQRT_2, HALF_SQRT_2),
    Vec2::new(1.0, 0.0),
    Vec2::new(HALF_SQRT_2, -HALF_SQRT_2),
    Vec2::new(0.0, -1.0),
    Vec2::new(-HALF_SQRT_2, -HALF_SQRT_2),
    Vec2::new(-1.0, 0.0),
    Vec2::new(-HALF_SQRT_2, HALF_SQRT_2),
];

/// Straight segment between two dragged points, with optional 45° alignment
/// and center mode (the anchor becomes the midpoint).
#[derive(Debug)]
pub struct LineItem {
    core: DrawingCore,
    from: Pos2,
    to: Pos2,
    center_mode: bool,
    aligning: bool,
    end_point: Cached<Pos2>,
    points: Cached<Arc<[Sample]>>,
    bounds: Cached<Rect>,
}

impl LineItem {
    pub fn new(style: StrokeStyle, from: Pos2) -> Self {
        Self {
            core: DrawingCore::new(style),
            from,
            to: from,
            center_mode: false,
            aligning: false,
            end_point: Cached::new(),
            points: Cached::new(),
            bounds: Cached::new(),
        }
    }

    pub fn set_from(&mut self, from: Pos2) {
        self.from = from;
        self.core.mark_dirty();
    }

    pub fn set_to(&mut self, to: Pos2) {
        self.to = to;
        self.core.mark_dirty();
    }

    pub fn set_center_mode(&mut self, center_mode: bool) {
        if self.center_mode != center_mode {
            self.center_mode = center_mode;
            self.core.mark_dirty();
        }
    }

    pub fn set_aligning(&mut self, aligning: bool) {
        if self.aligning != aligning {
            self.aligning = aligning;
            self.core.mark_dirty();
        }
    }

    pub fn style(&self) -> StrokeStyle {
        self.core.style()
    }

    /// The effective end point after 45° snapping, shared by the point list
    /// and the bounding rect so the two never disagree.
    fn end_point(&self) -> Pos2 {
        self.end_point.get_or_compute(self.core.generation(), || {
            if self.aligning {
                let v = self.to - self.from;
                let mut best_index = 0;
                let mut best_dot = ALIGN_DIRS[0].dot(v);
                for (index, dir) in ALIGN_DIRS.iter().enumerate().skip(1) {
                    let dot = dir.dot(v);
                    if dot > best_dot {
                        best_dot = dot;
                        best_index = index;
                    }
                }
                self.from + ALIGN_DIRS[best_index] * best_dot
            } else {
                self.to
            }
        })
    }

    pub fn points(&self) -> Arc<[Sample]> {
        self.points.get_or_compute(self.core.generation(), || {
            if self.from == self.to {
                return [Sample::new(self.from)].into();
            }
            let to = self.end_point();
            let from = if self.center_mode {
                self.from + (self.from - to)
            } else {
                self.from
            };
            [Sample::new(from), Sample::new(to)].into()
        })
    }
}

impl RenderItem for LineItem {
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
            let to = self.end_point();
            let half_stroke = self.core.style().width / 2.0;
            if self.center_mode {
                let half_dimens = (to - self.from).abs() + Vec2::splat(half_stroke);
                Rect::from_center_size(self.from, half_dimens * 2.0)
            } else {
                let center = self.from + (to - self.from) / 2.0;
                let dimens = (to - self.from).abs() + Vec2::splat(half_stroke * 2.0);
                Rect::from_center_size(center, dimens)
            }
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
