//! Variable-width stroke tessellation.
//!
//! Converts a centerline (each sample carrying a pressure-derived radius)
//! into a flat triangle list: three consecutive positions per triangle, no
//! index buffer. Each sample contributes an n-gon cap; consecutive samples
//! are bridged by a four-triangle fan spanning the external tangent points
//! of their two radii and routed through both centers, and cap wedges facing
//! a neighbor are filtered out so the cap never overlaps the body.

use egui::{Pos2, Vec2};

use crate::geometry::unit_circle_points;
use crate::item::Sample;

fn rotated(v: Vec2, sin_theta: f32, cos_theta: f32) -> Vec2 {
    Vec2::new(
        cos_theta * v.x - sin_theta * v.y,
        sin_theta * v.x + cos_theta * v.y,
    )
}

/// Keep a cap wedge if either of its rim points faces away from the
/// tangent-corrected neighbor directions.
fn wedge_visible(rim: &[Vec2], i: usize, next: usize, v1: Vec2, v2: Vec2) -> bool {
    rim[i].dot(v1) > 0.0 || rim[next].dot(v1) > 0.0 || rim[i].dot(v2) > 0.0 || rim[next].dot(v2) > 0.0
}

/// Emit the cap and (toward the previous neighbor) body triangles for one
/// sample.
fn sample_triangles(
    sample: &Sample,
    previous: Option<&Sample>,
    next: Option<&Sample>,
    stroke_width: f32,
    out: &mut Vec<Pos2>,
) {
    let location = sample.location;
    let radius = sample.scale_factor() * stroke_width / 2.0;

    let rim_count = ((std::f32::consts::PI * radius).ceil() as usize).max(4);
    let rim = unit_circle_points(rim_count);
    let mut visible: Vec<usize> = (0..rim_count).collect();

    if let Some(next) = next {
        let next_radius = next.scale_factor() * stroke_width / 2.0;
        let v = location - next.location;
        let sin_theta = (next_radius - radius) / v.length();
        if sin_theta >= 1.0 {
            // This circle is enclosed by the neighbor's: no cap at all.
            visible.clear();
        } else if sin_theta > -1.0 {
            let cos_theta = (1.0 - sin_theta * sin_theta).sqrt();
            let v1 = rotated(v, sin_theta, cos_theta);
            let v2 = rotated(v, -sin_theta, cos_theta);
            visible.retain(|&i| wedge_visible(&rim, i, (i + 1) % rim_count, v1, v2));
        }
    }

    if let Some(previous) = previous {
        let previous_radius = previous.scale_factor() * stroke_width / 2.0;
        let v = location - previous.location;
        let sin_theta = (radius - previous_radius) / v.length();
        if sin_theta > -1.0 && sin_theta < 1.0 {
            let cos_theta = (1.0 - sin_theta * sin_theta).sqrt();
            let v1 = rotated(v, sin_theta, cos_theta);
            let v2 = rotated(v, -sin_theta, cos_theta);

            // Tangent points of the two circles on either side of the
            // segment. The body fan runs through both centers; with unequal
            // radii the tangent chords sit off-center, and the filtered caps
            // stop at them, so the centerline must be an edge of the fan or
            // the sliver between chord and center is covered by nothing.
            let u1 = Vec2::new(-v1.y, v1.x).normalized();
            let u2 = Vec2::new(v2.y, -v2.x).normalized();
            let p1 = previous.location + u1 * previous_radius;
            let p2 = previous.location + u2 * previous_radius;
            let p3 = location + u1 * radius;
            let p4 = location + u2 * radius;
            out.extend_from_slice(&[
                p1,
                previous.location,
                p3,
                p3,
                previous.location,
                location,
                previous.location,
                p2,
                location,
                location,
                p2,
                p4,
            ]);

            visible.retain(|&i| wedge_visible(&rim, i, (i + 1) % rim_count, v1, v2));
        }
        // |sin_theta| >= 1: one circle encloses the other, no body fan.
    }

    for i in visible {
        out.push(location);
        out.push(location + rim[i] * radius);
        out.push(location + rim[(i + 1) % rim_count] * radius);
    }
}

/// Tessellate a full centerline. For a closed path the last sample is the
/// first sample's previous neighbor and vice versa.
pub fn stroke_mesh(samples: &[Sample], closed: bool, stroke_width: f32) -> Vec<Pos2> {
    let mut out = Vec::new();
    for (i, sample) in samples.iter().enumerate() {
        let previous = if i == 0 {
            if closed { samples.last() } else { None }
        } else {
            samples.get(i - 1)
        };
        let next = if i + 1 < samples.len() {
            samples.get(i + 1)
        } else if closed {
            samples.first()
        } else {
            None
        };
        sample_triangles(sample, previous, next, stroke_width, &mut out);
    }
    out
}
