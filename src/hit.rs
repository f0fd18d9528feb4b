//! Distance queries used by the eraser and the selection tool.
//!
//! Stroked shapes measure distance to the stroke edge along their centerline;
//! rotated rectangular shapes (images) get a signed inside/outside result via
//! two triangle tests, which segment distance alone cannot provide under
//! rotation.

use egui::Pos2;

use crate::geometry::{distance_to_segment, point_in_triangle};
use crate::item::Sample;

/// Hit threshold for exact picks (selection click).
pub const PICK_TOLERANCE: f32 = 1e-2;

/// Distance from `local_point` to the edge of the stroke envelope around the
/// centerline. Negative inside the envelope. Closed paths wrap the final
/// segment back to the first sample.
pub fn distance_to_path(
    samples: &[Sample],
    closed: bool,
    stroke_width: f32,
    local_point: Pos2,
) -> f32 {
    if samples.is_empty() {
        return f32::INFINITY;
    }
    let half_stroke = stroke_width / 2.0;
    let mut previous = if closed {
        samples[samples.len() - 1]
    } else {
        samples[0]
    };
    let mut min_distance = f32::INFINITY;
    for sample in samples {
        let d = distance_to_segment(local_point, previous.location, sample.location) - half_stroke;
        min_distance = min_distance.min(d);
        previous = *sample;
    }
    min_distance
}

/// Signed distance from `local_point` to a convex quad given by its corners
/// in winding order: the unsigned distance to the nearest edge, negated when
/// the point lies inside.
pub fn signed_distance_to_quad(local_point: Pos2, corners: [Pos2; 4]) -> f32 {
    let inside = point_in_triangle(local_point, corners[0], corners[1], corners[2])
        || point_in_triangle(local_point, corners[2], corners[3], corners[0]);
    let mut edge_distance = f32::INFINITY;
    for i in 0..4 {
        let d = distance_to_segment(local_point, corners[i], corners[(i + 1) % 4]);
        edge_distance = edge_distance.min(d);
    }
    if inside { -edge_distance } else { edge_distance }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn path_distance_is_negative_inside_the_stroke() {
        let samples = [Sample::new(pos2(0.0, 0.0)), Sample::new(pos2(10.0, 0.0))];
        assert!(distance_to_path(&samples, false, 4.0, pos2(5.0, 1.0)) < 0.0);
        let outside = distance_to_path(&samples, false, 4.0, pos2(5.0, 5.0));
        assert!((outside - 3.0).abs() < 1e-5);
    }

    #[test]
    fn closed_path_wraps_the_final_segment() {
        // Three corners of a triangle; the wrap segment closes it.
        let samples = [
            Sample::new(pos2(0.0, 0.0)),
            Sample::new(pos2(10.0, 0.0)),
            Sample::new(pos2(0.0, 10.0)),
        ];
        let query = pos2(4.0, 6.0); // near the hypotenuse
        let closed = distance_to_path(&samples, true, 2.0, query);
        let open = distance_to_path(&samples, false, 2.0, query);
        assert!(closed < open);
    }

    #[test]
    fn quad_distance_sign_flips_at_the_edge() {
        let corners = [
            pos2(-1.0, -1.0),
            pos2(1.0, -1.0),
            pos2(1.0, 1.0),
            pos2(-1.0, 1.0),
        ];
        assert!(signed_distance_to_quad(pos2(0.0, 0.0), corners) < 0.0);
        assert!(signed_distance_to_quad(pos2(2.0, 0.0), corners) > 0.0);
    }
}
