use egui::{Pos2, pos2};
use whiteboard_geom::geometry::point_in_triangle;
use whiteboard_geom::item::Sample;
use whiteboard_geom::tessellate::stroke_mesh;

fn mesh_contains(mesh: &[Pos2], point: Pos2) -> bool {
    mesh.chunks_exact(3)
        .any(|tri| point_in_triangle(point, tri[0], tri[1], tri[2]))
}

#[test]
fn straight_segment_mesh_covers_both_sample_circles() {
    let width = 4.0;
    let radius = width / 2.0;
    let samples = [Sample::new(pos2(0.0, 0.0)), Sample::new(pos2(10.0, 0.0))];
    let mesh = stroke_mesh(&samples, false, width);
    assert!(!mesh.is_empty());
    assert_eq!(mesh.len() % 3, 0);

    // The cap is an inscribed n-gon, so probe slightly inside the circle.
    let probe_radius = radius - 0.25;
    for center in [pos2(0.0, 0.0), pos2(10.0, 0.0)] {
        for i in 0..360 {
            let theta = i as f32 * std::f32::consts::TAU / 360.0;
            let probe = pos2(
                center.x + probe_radius * theta.cos(),
                center.y + probe_radius * theta.sin(),
            );
            assert!(
                mesh_contains(&mesh, probe),
                "gap at {probe:?} around {center:?}"
            );
        }
    }

    // And along the body between the caps.
    for i in 0..=100 {
        let x = i as f32 / 10.0;
        assert!(mesh_contains(&mesh, pos2(x, probe_radius)));
        assert!(mesh_contains(&mesh, pos2(x, -probe_radius)));
        assert!(mesh_contains(&mesh, pos2(x, 0.0)));
    }
}

#[test]
fn straight_segment_mesh_edge_lengths_are_bounded() {
    let width = 4.0;
    let segment_length = 10.0;
    let samples = [Sample::new(pos2(0.0, 0.0)), Sample::new(pos2(10.0, 0.0))];
    let mesh = stroke_mesh(&samples, false, width);
    let bound = width + segment_length;
    for tri in mesh.chunks_exact(3) {
        for i in 0..3 {
            let edge = (tri[(i + 1) % 3] - tri[i]).length();
            assert!(edge <= bound, "edge of length {edge} exceeds {bound}");
        }
    }
}

#[test]
fn variable_radius_join_fills_the_taper() {
    let width = 10.0;
    let samples = [
        Sample::with_pressure(pos2(0.0, 0.0), 1.0),
        Sample::with_pressure(pos2(30.0, 0.0), 0.25),
    ];
    let mesh = stroke_mesh(&samples, false, width);
    // Radii: 5.0 at the start, (0.15 + 0.85 * 0.5) * 5 = 2.875 at the end.
    // The banked body must cover the centerline and interior points of the
    // taper on both sides, including right next to each sample where the
    // tangent chord sits off-center.
    for i in 0..=300 {
        let x = i as f32 / 10.0;
        assert!(mesh_contains(&mesh, pos2(x, 0.0)), "gap on centerline at x={x}");
    }
    let r0 = 5.0;
    let r1 = (0.15 + 0.85 * (0.25f32).sqrt()) * width / 2.0;
    for i in 0..=300 {
        let t = i as f32 / 300.0;
        let y = (r0 + (r1 - r0) * t) * 0.8;
        assert!(
            mesh_contains(&mesh, pos2(30.0 * t, y)),
            "gap inside taper at t={t}"
        );
        assert!(
            mesh_contains(&mesh, pos2(30.0 * t, -y)),
            "gap inside taper at t={t}"
        );
    }
}

#[test]
fn unequal_radius_joins_cover_the_chord_to_center_slivers() {
    // Pressure drops and recovers along a three-sample path, so every join
    // connects circles of different radii. With unequal radii the tangent
    // chord of each circle sits off its center; the region between chord and
    // center must still be covered once the neighbor-facing cap wedges are
    // filtered out.
    let width = 8.0;
    let samples = [
        Sample::with_pressure(pos2(0.0, 0.0), 1.0),
        Sample::with_pressure(pos2(12.0, 0.0), 0.6),
        Sample::with_pressure(pos2(24.0, 0.0), 1.0),
    ];
    let mesh = stroke_mesh(&samples, false, width);

    for i in 0..=240 {
        let x = i as f32 / 10.0;
        assert!(mesh_contains(&mesh, pos2(x, 0.0)), "gap on centerline at x={x}");
    }

    // Dense grid around each sample center, staying inside the smallest
    // inscribed cap polygon (radius ~3.1 at the middle sample).
    for center_x in [0.0f32, 12.0, 24.0] {
        for i in -6..=6 {
            let dx = i as f32 * 0.05;
            for j in -15..=15 {
                let dy = j as f32 * 0.2;
                if (dx * dx + dy * dy).sqrt() > 3.0 {
                    continue;
                }
                let probe = pos2(center_x + dx, dy);
                assert!(
                    mesh_contains(&mesh, probe),
                    "sliver gap at {probe:?} near sample x={center_x}"
                );
            }
        }
    }
}

#[test]
fn closed_path_has_no_end_caps_sticking_out() {
    // A closed square outline: every sample has two neighbors, so no sample
    // may emit a full endpoint cap. The mesh must stay inside the outline
    // inflated by the stroke radius.
    let width = 2.0;
    let samples = [
        Sample::new(pos2(0.0, 0.0)),
        Sample::new(pos2(0.0, 10.0)),
        Sample::new(pos2(10.0, 10.0)),
        Sample::new(pos2(10.0, 0.0)),
    ];
    let mesh = stroke_mesh(&samples, true, width);
    assert!(!mesh.is_empty());
    for vertex in &mesh {
        assert!(
            (-1.01..=11.01).contains(&vertex.x) && (-1.01..=11.01).contains(&vertex.y),
            "vertex {vertex:?} escapes the inflated outline"
        );
    }
    // Corners are covered by join geometry.
    for corner in [pos2(0.0, 0.0), pos2(0.0, 10.0), pos2(10.0, 10.0), pos2(10.0, 0.0)] {
        assert!(mesh_contains(&mesh, corner));
    }
}

#[test]
fn pressure_scales_the_cap_radius() {
    let width = 10.0;
    let soft = stroke_mesh(&[Sample::with_pressure(pos2(0.0, 0.0), 0.04)], false, width);
    // scale_factor(0.04) = 0.15 + 0.85 * 0.2 = 0.32, radius 1.6.
    let radius = 0.32 * width / 2.0;
    for vertex in &soft {
        assert!(vertex.distance(pos2(0.0, 0.0)) <= radius + 1e-4);
    }
    assert!(mesh_contains(&soft, pos2(0.0, 0.0)));
}
