use std::sync::Arc;

use egui::{Pos2, Rect, Rgba, Vec2, pos2};

use super::RenderItem;
use super::common::ItemId;
use crate::cache::Cached;
use crate::compose::Primitive;

/// Non-interactive background guide. Generates a line list covering its
/// bounding rect with lines snapped to spacing multiples; never hit-tested
/// and always frozen.
#[derive(Debug)]
pub struct GridItem {
    id: ItemId,
    rect: Rect,
    color: Rgba,
    spacing: f32,
    hidden: bool,
    generation: u64,
    lines: Cached<Arc<[Pos2]>>,
}

impl GridItem {
    pub fn new(rect: Rect) -> Self {
        Self {
            id: ItemId::new(),
            rect,
            color: Rgba::from_rgba_unmultiplied(0.5, 0.5, 0.5, 1.0),
            spacing: 20.0,
            hidden: false,
            generation: 1,
            lines: Cached::new(),
        }
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
        self.generation += 1;
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        debug_assert!(spacing > 0.0);
        self.spacing = spacing.max(f32::MIN_POSITIVE);
        self.generation += 1;
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
        self.generation += 1;
    }

    /// Endpoint pairs for the grid lines: verticals at x = k·spacing inside
    /// the rect, then horizontals at y = k·spacing.
    pub fn line_vertices(&self) -> Arc<[Pos2]> {
        self.lines.get_or_compute(self.generation, || {
            let spacing = self.spacing;
            let v_count = (self.rect.width() / spacing) as usize + 1;
            let h_count = (self.rect.height() / spacing) as usize + 1;
            let v_start_x = (self.rect.min.x / spacing).ceil() * spacing;
            let h_start_y = (self.rect.min.y / spacing).ceil() * spacing;
            let mut vertices = Vec::with_capacity((v_count + h_count) * 2);
            for i in 0..v_count {
                let x = v_start_x + i as f32 * spacing;
                vertices.push(pos2(x, self.rect.min.y));
                vertices.push(pos2(x, self.rect.max.y));
            }
            for i in 0..h_count {
                let y = h_start_y + i as f32 * spacing;
                vertices.push(pos2(self.rect.min.x, y));
                vertices.push(pos2(self.rect.max.x, y));
            }
            vertices.into()
        })
    }
}

impl RenderItem for GridItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn global_position(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn set_global_position(&mut self, _position: Vec2) {
        debug_assert!(false, "grid items cannot be repositioned");
    }

    fn local_bounding_rect(&self) -> Rect {
        self.rect
    }

    fn hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn frozen(&self) -> bool {
        true
    }

    fn set_frozen(&mut self, _frozen: bool) {}

    fn is_opaque(&self) -> bool {
        true
    }

    fn distance(&self, _global_location: Pos2) -> f32 {
        f32::INFINITY
    }

    fn primitive(&self) -> Primitive {
        Primitive::Lines {
            vertices: self.line_vertices(),
            color: self.color,
        }
    }
}
