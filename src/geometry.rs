//! Kernel math shared by every shape variant: segment distance, triangle
//! containment, the rotation/scale matrix used by image items and the
//! memoized unit-circle divisions used by the stroke tessellator.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use egui::{Pos2, Vec2};
use parking_lot::Mutex;

pub const HALF_SQRT_2: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Distance from `point` to the segment `a`..`b`.
///
/// Returns the distance to the nearest endpoint when the projection of
/// `point` falls outside the segment, which also covers the degenerate
/// `a == b` case.
pub fn distance_to_segment(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let u1 = point - a;
    let v1 = b - a;
    if u1.dot(v1) <= 0.0 {
        return u1.length();
    }
    let u2 = point - b;
    let v2 = a - b;
    let dot = u2.dot(v2);
    if dot <= 0.0 {
        return u2.length();
    }
    let u2_length = u2.length();
    let cos_value = dot / u2_length / v2.length();
    let sin_value = (1.0 - cos_value * cos_value).max(0.0).sqrt();
    u2_length * sin_value
}

fn cross(o: Pos2, a: Pos2, b: Pos2) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Barycentric-sign containment test.
///
/// A degenerate (zero-area) triangle falls back to containment on the
/// segment spanned by the two farthest-apart corners; this is hit by
/// zero-size rectangles and ellipses.
pub fn point_in_triangle(point: Pos2, p1: Pos2, p2: Pos2, p3: Pos2) -> bool {
    if cross(p1, p2, p3) == 0.0 {
        let (a, b) = widest_pair(p1, p2, p3);
        return distance_to_segment(point, a, b) <= f32::EPSILON;
    }
    let d1 = cross(point, p1, p2);
    let d2 = cross(point, p2, p3);
    let d3 = cross(point, p3, p1);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

fn widest_pair(p1: Pos2, p2: Pos2, p3: Pos2) -> (Pos2, Pos2) {
    let d12 = (p2 - p1).length_sq();
    let d23 = (p3 - p2).length_sq();
    let d13 = (p3 - p1).length_sq();
    if d12 >= d23 && d12 >= d13 {
        (p1, p2)
    } else if d23 >= d13 {
        (p2, p3)
    } else {
        (p1, p3)
    }
}

/// Row-major 2x2 matrix, sufficient for the rotate-and-scale transforms
/// image items need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    rows: [[f32; 2]; 2],
}

impl Mat2 {
    pub fn rotate_scale(radians: f32, scale: f32) -> Self {
        let cos_value = radians.cos() * scale;
        let sin_value = radians.sin() * scale;
        Self {
            rows: [[cos_value, -sin_value], [sin_value, cos_value]],
        }
    }

    pub fn mul_vec2(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.rows[0][0] * v.x + self.rows[0][1] * v.y,
            self.rows[1][0] * v.x + self.rows[1][1] * v.y,
        )
    }
}

static UNIT_CIRCLES: LazyLock<Mutex<HashMap<usize, Arc<[Vec2]>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// `count` points evenly spaced on the unit circle starting at angle 0.
///
/// Results are memoized process-wide; entries are read-only once computed and
/// never invalidated.
pub fn unit_circle_points(count: usize) -> Arc<[Vec2]> {
    let mut cache = UNIT_CIRCLES.lock();
    cache
        .entry(count)
        .or_insert_with(|| {
            (0..count)
                .map(|i| {
                    let theta = i as f32 * std::f32::consts::TAU / count as f32;
                    Vec2::new(theta.cos(), theta.sin())
                })
                .collect()
        })
        .clone()
}
