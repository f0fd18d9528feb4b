use std::sync::Arc;

use egui::{Pos2, Rect, Vec2, vec2};

use super::RenderItem;
use super::common::{DrawingCore, ItemId, Sample, StrokeStyle};
use crate::cache::Cached;
use crate::compose::Primitive;

/// Axis-aligned ellipse dragged between two points, with optional circle
/// snapping and center mode.
#[derive(Debug)]
pub struct EllipseItem {
    core: DrawingCore,
    from: Pos2,
    to: Pos2,
    circle: bool,
    center_mode: bool,
    points: Cached<Arc<[Sample]>>,
    bounds: Cached<Rect>,
}

impl EllipseItem {
    pub fn new(style: StrokeStyle, from: Pos2) -> Self {
        Self {
            core: DrawingCore::new(style),
            from,
            to: from,
            circle: false,
            center_mode: false,
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

    pub fn set_circle(&mut self, circle: bool) {
        if self.circle != circle {
            self.circle = circle;
            self.core.mark_dirty();
        }
    }

    pub fn set_center_mode(&mut self, center_mode: bool) {
        if self.center_mode != center_mode {
            self.center_mode = center_mode;
            self.core.mark_dirty();
        }
    }

    pub fn style(&self) -> StrokeStyle {
        self.core.style()
    }

    pub fn is_closed_path(&self) -> bool {
        self.points().len() > 2
    }

    /// Resolve center and radii after circle snapping. The snap is applied
    /// here once so the point list and bounding rect always agree.
    fn center_rx_ry(&self) -> (Pos2, f32, f32) {
        if self.circle {
            if self.center_mode {
                let r = (self.to - self.from).abs().max_elem();
                (self.from, r, r)
            } else {
                let d = (self.to - self.from).abs().max_elem();
                let r = d / 2.0;
                let center = self.from
                    + vec2(
                        if self.to.x >= self.from.x { r } else { -r },
                        if self.to.y >= self.from.y { r } else { -r },
                    );
                (center, r, r)
            }
        } else {
            let center = if self.center_mode {
                self.from
            } else {
                self.from + (self.to - self.from) / 2.0
            };
            let uv = self.to - center;
            (center, uv.x.abs(), uv.y.abs())
        }
    }

    /// Adaptive quarter-arc walk mirrored across both axes.
    ///
    /// The angular step `min(4/d, π/32)` shrinks where the local radius `d`
    /// is large, keeping segment length roughly constant; the three seam
    /// points at 90°, 180° and 0° appear exactly once.
    pub fn points(&self) -> Arc<[Sample]> {
        self.points.get_or_compute(self.core.generation(), || {
            if self.from == self.to {
                return [Sample::new(self.from)].into();
            }
            let (center, rx, ry) = self.center_rx_ry();
            if rx == 0.0 || ry == 0.0 {
                return [
                    Sample::new(center - vec2(rx, ry)),
                    Sample::new(center + vec2(rx, ry)),
                ]
                .into();
            }
            let mut points: Vec<Vec2> = Vec::new();
            let rx_sqr = rx * rx;
            let ry_sqr = ry * ry;
            let quarter = std::f32::consts::FRAC_PI_2;
            let mut theta: f32 = 0.0;
            while theta < quarter {
                let (sin, cos) = theta.sin_cos();
                points.push(vec2(rx * cos, ry * sin));
                let d = (rx_sqr * sin * sin + ry_sqr * cos * cos).sqrt();
                theta += (4.0 / d).min(quarter / 16.0);
            }
            points.push(vec2(0.0, ry));
            // Mirror the quarter across the y axis (skipping the shared top
            // point), then the half across the x axis (skipping both ends).
            for i in (0..points.len() - 1).rev() {
                let p = points[i];
                points.push(vec2(-p.x, p.y));
            }
            for i in (1..points.len() - 1).rev() {
                let p = points[i];
                points.push(vec2(p.x, -p.y));
            }
            points
                .into_iter()
                .map(|p| Sample::new(center + p))
                .collect()
        })
    }
}

impl RenderItem for EllipseItem {
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
            let (center, rx, ry) = self.center_rx_ry();
            let half_stroke = self.core.style().width / 2.0;
            let rs = vec2(rx + half_stroke, ry + half_stroke);
            Rect::from_center_size(center, rs * 2.0)
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
