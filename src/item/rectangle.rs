use std::sync::Arc;

use egui::{Pos2, Rect, Vec2, pos2};

use super::RenderItem;
use super::common::{DrawingCore, ItemId, Sample, StrokeStyle};
use crate::cache::Cached;
use crate::compose::Primitive;

/// Axis-aligned rectangle dragged between two corners, with optional square
/// snapping and center mode.
///
/// Degenerates to a single point when `from == to` and to a 2-point line when
/// the corners collapse onto one axis; otherwise the centerline is a 4-point
/// closed polyline.
#[derive(Debug)]
pub struct RectangleItem {
    core: DrawingCore,
    from: Pos2,
    to: Pos2,
    center_mode: bool,
    square: bool,
    end_point: Cached<Pos2>,
    points: Cached<Arc<[Sample]>>,
    bounds: Cached<Rect>,
}

impl RectangleItem {
    pub fn new(style: StrokeStyle, from: Pos2) -> Self {
        Self {
            core: DrawingCore::new(style),
            from,
            to: from,
            center_mode: false,
            square: false,
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

    pub fn set_square(&mut self, square: bool) {
        if self.square != square {
            self.square = square;
            self.core.mark_dirty();
        }
    }

    pub fn style(&self) -> StrokeStyle {
        self.core.style()
    }

    pub fn is_closed_path(&self) -> bool {
        self.points().len() == 4
    }

    /// Effective opposite corner after square snapping; computed once per
    /// generation and shared between the point list and the bounding rect.
    fn end_point(&self) -> Pos2 {
        self.end_point.get_or_compute(self.core.generation(), || {
            if self.square {
                let diff = self.to - self.from;
                let length = diff.abs().max_elem();
                pos2(
                    self.from.x + if diff.x >= 0.0 { length } else { -length },
                    self.from.y + if diff.y >= 0.0 { length } else { -length },
                )
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
            if to.x == from.x || to.y == from.y {
                return [Sample::new(from), Sample::new(to)].into();
            }
            [
                Sample::new(from),
                Sample::new(pos2(from.x, to.y)),
                Sample::new(to),
                Sample::new(pos2(to.x, from.y)),
            ]
            .into()
        })
    }
}

impl RenderItem for RectangleItem {
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
            .distance_along(&self.points(), self.is_closed_path(), global_location)
    }

    fn primitive(&self) -> Primitive {
        self.core.triangles(&self.points(), self.is_closed_path())
    }
}
