use std::sync::Arc;

use egui::{Pos2, Rect, Vec2, pos2};

use super::RenderItem;
use super::common::ItemId;
use crate::cache::Cached;
use crate::compose::Primitive;
use crate::geometry::Mat2;
use crate::hit::signed_distance_to_quad;
use crate::image::ImageData;

/// Texture coordinates for the two-triangle quad, flipped vertically to
/// match the pixel buffer's top-left origin.
const UVS: [Pos2; 6] = [
    pos2(0.0, 1.0),
    pos2(1.0, 0.0),
    pos2(0.0, 0.0),
    pos2(1.0, 0.0),
    pos2(0.0, 1.0),
    pos2(1.0, 1.0),
];

/// A placed image: an opaque pixel buffer with scale and rotation applied
/// around its center. No centerline; hit-testing runs against the rotated
/// quad instead.
#[derive(Debug)]
pub struct ImageItem {
    id: ItemId,
    image: Arc<ImageData>,
    size: Vec2,
    global_position: Vec2,
    scale: f32,
    rotation: f32,
    hidden: bool,
    frozen: bool,
    generation: u64,
    bounds: Cached<Rect>,
    vertices: Cached<[Pos2; 6]>,
}

impl ImageItem {
    pub fn new(image: ImageData, position: Vec2) -> Self {
        let size = image.size();
        Self {
            id: ItemId::new(),
            image: Arc::new(image),
            size,
            global_position: position,
            scale: 1.0,
            rotation: 0.0,
            hidden: false,
            frozen: false,
            generation: 1,
            bounds: Cached::new(),
            vertices: Cached::new(),
        }
    }

    pub fn image(&self) -> &Arc<ImageData> {
        &self.image
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.generation += 1;
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Rotation in radians, anticlockwise.
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
        self.generation += 1;
    }

    /// Half-diagonals of the transformed quad: `p1` points to the top-right
    /// corner, `p2` to the bottom-right.
    fn half_diagonals(&self) -> (Vec2, Vec2) {
        let matrix = Mat2::rotate_scale(self.rotation, self.scale);
        let p1 = matrix.mul_vec2(self.size * 0.5);
        let p2 = matrix.mul_vec2(Vec2::new(self.size.x * 0.5, self.size.y * -0.5));
        (p1, p2)
    }

    /// The transformed corners in winding order, in local coordinates.
    fn corners(&self) -> [Pos2; 4] {
        let (p1, p2) = self.half_diagonals();
        [
            Pos2::ZERO + p1,
            Pos2::ZERO + p2,
            Pos2::ZERO - p1,
            Pos2::ZERO - p2,
        ]
    }
}

impl RenderItem for ImageItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn global_position(&self) -> Vec2 {
        self.global_position
    }

    fn set_global_position(&mut self, position: Vec2) {
        self.global_position = position;
    }

    fn local_bounding_rect(&self) -> Rect {
        self.bounds.get_or_compute(self.generation, || {
            // Axis-aligned envelope of the rotated-and-scaled quad.
            let (p1, p2) = self.half_diagonals();
            let half_size = Vec2::new(p1.x.abs().max(p2.x.abs()), p1.y.abs().max(p2.y.abs()));
            Rect::from_center_size(Pos2::ZERO, half_size * 2.0)
        })
    }

    fn hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn frozen(&self) -> bool {
        self.frozen
    }

    fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    fn is_opaque(&self) -> bool {
        // Drawn with blending so decoded alpha edges composite correctly.
        false
    }

    fn distance(&self, global_location: Pos2) -> f32 {
        let local = global_location - self.global_position;
        signed_distance_to_quad(local, self.corners())
    }

    fn primitive(&self) -> Primitive {
        let vertices = self.vertices.get_or_compute(self.generation, || {
            let (p1, p2) = self.half_diagonals();
            let origin = Pos2::ZERO;
            [
                origin - p1,
                origin + p1,
                origin - p2,
                origin + p1,
                origin - p1,
                origin + p2,
            ]
        });
        Primitive::TexturedQuad {
            vertices,
            uvs: UVS,
            image: self.image.clone(),
        }
    }
}
