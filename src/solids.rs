//! Triangle-soup generators for the primitive solids.
//!
//! Every generator returns a [`MeshData`] centered at the local origin and
//! wound counter-clockwise seen from outside, so the cross-product normals
//! point away from the shape. The outward-normal tests at the bottom of this
//! file pin that convention down.
//!
//! - [`cone`] / [`cylinder`] build from a discretized circle plus apex/cap
//!   centers (fans for the caps, quads for the cylinder wall)
//! - [`icosphere`] recursively subdivides four seed triangles, pushing the
//!   edge midpoints back onto the unit sphere
//! - [`cube`] uses 24 unshared vertices so each face keeps a flat normal and
//!   its own UV unwrap
//! - [`uv_sphere`] is the indexed latitude/longitude tessellation used for
//!   texturing

use glam::{Vec2, Vec3};

use crate::mesh::{MeshData, Vertex3d};

/// Midpoint chosen as `(a + b) / 2` rather than a directed lerp so the same
/// edge subdivided from either endpoint order yields bit-identical vertices
/// (no cracks between adjacent triangles).
fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b) * 0.5
}

/// A circle of `steps` points with radius 1 in the y = `height` plane.
fn circle_ring(steps: usize, height: f32) -> Vec<Vec3> {
    let phi = std::f32::consts::TAU / steps as f32;
    (0..steps)
        .map(|i| {
            let angle = i as f32 * phi;
            Vec3::new(angle.cos(), height, angle.sin())
        })
        .collect()
}

/// A cone with apex at (0, 1, 0) and a unit-radius base circle at y = -1.
///
/// Emits `2 · steps` triangles: a fan from the base ring to the apex and a
/// fan closing the bottom cap.
pub fn cone(steps: usize) -> MeshData {
    let apex = Vec3::new(0.0, 1.0, 0.0);
    let base_center = Vec3::new(0.0, -1.0, 0.0);
    let ring = circle_ring(steps, -1.0);

    let mut mesh = MeshData::new();
    let mut reversed = ring.clone();
    reversed.reverse();
    mesh.push_fan(&reversed, apex);
    mesh.push_fan(&ring, base_center);
    mesh
}

/// A cylinder of unit radius spanning y = -1 to y = 1.
///
/// The wall is `steps` quads (two triangles each); both caps are fans, so
/// the total is `4 · steps` triangles.
pub fn cylinder(steps: usize) -> MeshData {
    let top_center = Vec3::new(0.0, 1.0, 0.0);
    let bottom_center = Vec3::new(0.0, -1.0, 0.0);
    let top = circle_ring(steps, 1.0);
    let bottom = circle_ring(steps, -1.0);

    let mut mesh = MeshData::new();
    for i in 0..steps {
        let next = (i + 1) % steps;
        mesh.push_quad(bottom[next], bottom[i], top[i], top[next]);
    }
    let mut top_reversed = top;
    top_reversed.reverse();
    mesh.push_fan(&top_reversed, top_center);
    mesh.push_fan(&bottom, bottom_center);
    mesh
}

/// Unit sphere from recursive subdivision of four seed triangles.
///
/// Each level splits a triangle into four by its edge midpoints, projecting
/// the midpoints back onto the sphere (not left on the chord). The child
/// ordering preserves the parent corners, so triangles meeting along a
/// subdivided edge share exact vertices at every depth. Normals are flat
/// per-triangle for faceted shading.
///
/// Depth `d` yields `4 · 4^d` triangles.
pub fn icosphere(depth: u32) -> MeshData {
    let a = Vec3::new(0.0, 0.0, -1.0);
    let b = Vec3::new(0.0, 0.942809, 0.333333);
    let c = Vec3::new(-0.816497, -0.471405, 0.333333);
    let d = Vec3::new(0.816497, -0.471405, 0.333333);

    let mut mesh = MeshData::new();
    divide(&mut mesh, a, c, b, depth);
    divide(&mut mesh, d, b, c, depth);
    divide(&mut mesh, a, b, d, depth);
    divide(&mut mesh, a, d, c, depth);
    mesh
}

fn divide(mesh: &mut MeshData, a: Vec3, b: Vec3, c: Vec3, depth: u32) {
    if depth == 0 {
        mesh.push_triangle(a, b, c);
        return;
    }
    let ab = midpoint(a, b).normalize_or_zero();
    let ac = midpoint(a, c).normalize_or_zero();
    let bc = midpoint(b, c).normalize_or_zero();

    divide(mesh, a, ab, ac, depth - 1);
    divide(mesh, ab, b, bc, depth - 1);
    divide(mesh, bc, c, ac, depth - 1);
    divide(mesh, ab, bc, ac, depth - 1);
}

/// A unit cube centered at the origin (24 vertices, 12 indexed triangles).
///
/// Faces do not share vertices: each keeps its flat normal and maps the
/// full `[0, 1]` texture range independently.
pub fn cube() -> MeshData {
    #[rustfmt::skip]
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        // (outward normal, corners wound counter-clockwise from outside)
        (Vec3::Z, [
            Vec3::new(-0.5, -0.5,  0.5), Vec3::new( 0.5, -0.5,  0.5),
            Vec3::new( 0.5,  0.5,  0.5), Vec3::new(-0.5,  0.5,  0.5),
        ]),
        (Vec3::NEG_Z, [
            Vec3::new( 0.5, -0.5, -0.5), Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(-0.5,  0.5, -0.5), Vec3::new( 0.5,  0.5, -0.5),
        ]),
        (Vec3::Y, [
            Vec3::new(-0.5,  0.5,  0.5), Vec3::new( 0.5,  0.5,  0.5),
            Vec3::new( 0.5,  0.5, -0.5), Vec3::new(-0.5,  0.5, -0.5),
        ]),
        (Vec3::NEG_Y, [
            Vec3::new(-0.5, -0.5, -0.5), Vec3::new( 0.5, -0.5, -0.5),
            Vec3::new( 0.5, -0.5,  0.5), Vec3::new(-0.5, -0.5,  0.5),
        ]),
        (Vec3::X, [
            Vec3::new( 0.5, -0.5,  0.5), Vec3::new( 0.5, -0.5, -0.5),
            Vec3::new( 0.5,  0.5, -0.5), Vec3::new( 0.5,  0.5,  0.5),
        ]),
        (Vec3::NEG_X, [
            Vec3::new(-0.5, -0.5, -0.5), Vec3::new(-0.5, -0.5,  0.5),
            Vec3::new(-0.5,  0.5,  0.5), Vec3::new(-0.5,  0.5, -0.5),
        ]),
    ];
    let face_uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut mesh = MeshData::new();
    for (face, (normal, corners)) in faces.iter().enumerate() {
        for (corner, uv) in corners.iter().zip(face_uvs) {
            mesh.vertices
                .push(Vertex3d::new(corner.to_array(), normal.to_array(), uv));
        }
        let base = (face * 4) as u16;
        mesh.indices
            .extend([base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    mesh
}

/// Largest per-axis segment count for [`uv_sphere`]; a 255 × 255 vertex
/// grid is the biggest square one that still fits 16-bit indices.
const MAX_GRID_SEGMENTS: usize = 254;

/// An indexed latitude/longitude sphere of radius 0.5 with UVs.
///
/// The grid has `(lats + 1) × (longs + 1)` vertices; the seam column and the
/// pole rows are duplicated so UVs stay linear in the grid indices. Normals
/// are the unit position direction, which is exact for a sphere centered at
/// the origin. Each axis is clamped to `1..=254` segments so every index
/// fits the 16-bit index buffer.
pub fn uv_sphere(lats: usize, longs: usize) -> MeshData {
    let lats = lats.clamp(1, MAX_GRID_SEGMENTS);
    let longs = longs.clamp(1, MAX_GRID_SEGMENTS);
    let radius = 0.5;
    let mut mesh = MeshData::new();

    for lat in 0..=lats {
        let theta = lat as f32 * std::f32::consts::PI / lats as f32;
        for long in 0..=longs {
            let phi = long as f32 * std::f32::consts::TAU / longs as f32;
            let direction = Vec3::new(
                phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            );
            let uv = Vec2::new(long as f32 / longs as f32, lat as f32 / lats as f32);
            mesh.vertices.push(Vertex3d::new(
                (direction * radius).to_array(),
                direction.to_array(),
                uv.to_array(),
            ));
        }
    }

    for lat in 0..lats {
        for long in 0..longs {
            let first = lat * (longs + 1) + long;
            let second = first + longs + 1;
            mesh.indices
                .extend([first, first + 1, second].map(|i| i as u16));
            mesh.indices
                .extend([first + 1, second + 1, second].map(|i| i as u16));
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every non-degenerate face normal must point away from the centroid.
    fn assert_outward(mesh: &MeshData) {
        let center = mesh.centroid();
        for [a, b, c] in mesh.triangles() {
            let normal = (b - a).cross(c - a);
            if normal.length_squared() < 1e-12 {
                continue; // pole-collapsed quads in the UV sphere
            }
            let outward = (a + b + c) / 3.0 - center;
            assert!(
                normal.dot(outward) > 0.0,
                "inward-facing triangle at {:?}",
                (a, b, c)
            );
        }
    }

    fn assert_finite(mesh: &MeshData) {
        for v in &mesh.vertices {
            for x in v.position.iter().chain(v.normal.iter()) {
                assert!(x.is_finite());
            }
        }
    }

    #[test]
    fn cone_triangle_counts() {
        let mesh = cone(32);
        // 32 side triangles plus 32 cap triangles, 3 vertex slots each.
        assert_eq!(mesh.vertices.len(), 32 * 3 + 32 * 3);
        assert_finite(&mesh);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn cylinder_triangle_counts() {
        let mesh = cylinder(64);
        assert_eq!(mesh.triangle_count(), 4 * 64);
        assert_finite(&mesh);
    }

    #[test]
    fn icosphere_vertex_count_grows_4x_per_level() {
        for depth in 0..4 {
            let mesh = icosphere(depth);
            assert_eq!(mesh.vertices.len(), 4 * 4usize.pow(depth) * 3);
        }
    }

    #[test]
    fn icosphere_vertices_sit_on_the_unit_sphere() {
        let mesh = icosphere(3);
        for v in &mesh.vertices {
            let r = Vec3::from(v.position).length();
            assert!((r - 1.0).abs() < 1e-6, "off-sphere vertex, r = {}", r);
        }
    }

    #[test]
    fn icosphere_shared_edges_have_identical_vertices() {
        // Two triangles meeting along an edge traverse it in opposite
        // directions; the symmetric midpoint must still agree bitwise.
        let a = Vec3::new(0.1, 0.7, -0.3);
        let b = Vec3::new(-0.9, 0.2, 0.4);
        assert_eq!(
            midpoint(a, b).to_array().map(f32::to_bits),
            midpoint(b, a).to_array().map(f32::to_bits)
        );

        // The full mesh at depth 3 must contain each boundary vertex in
        // every triangle that touches it: no position may be unique to a
        // single triangle unless it is a triangle interior at depth 0.
        let mesh = icosphere(3);
        use std::collections::HashMap;
        let mut uses: HashMap<[u32; 3], usize> = HashMap::new();
        for v in &mesh.vertices {
            *uses.entry(v.position.map(f32::to_bits)).or_default() += 1;
        }
        // A closed triangulated surface touches every vertex at least three
        // times; a crack would leave a near-duplicate used fewer times.
        assert!(uses.values().all(|&n| n >= 3));
    }

    #[test]
    fn cube_has_24_vertices_and_12_triangles() {
        let mesh = cube();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn uv_sphere_grid_dimensions() {
        let mesh = uv_sphere(30, 30);
        assert_eq!(mesh.vertices.len(), 31 * 31);
        assert_eq!(mesh.triangle_count(), 30 * 30 * 2);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn uv_sphere_clamps_oversized_grids_to_16_bit_indices() {
        let mesh = uv_sphere(300, 300);
        assert_eq!(mesh.vertices.len(), 255 * 255);
        assert_eq!(mesh.triangle_count(), 254 * 254 * 2);
        // Every index must still resolve after the clamp.
        assert!(mesh.validate().is_ok());

        let degenerate = uv_sphere(0, 0);
        assert_eq!(degenerate.vertices.len(), 4);
        assert!(degenerate.validate().is_ok());
    }

    #[test]
    fn uv_sphere_normals_match_position_direction() {
        let mesh = uv_sphere(16, 16);
        for v in &mesh.vertices {
            let p = Vec3::from(v.position);
            let n = Vec3::from(v.normal);
            assert!((p - n * 0.5).length() < 1e-6);
            assert!((n.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn all_solids_face_outward() {
        assert_outward(&cone(32));
        assert_outward(&cylinder(32));
        assert_outward(&icosphere(2));
        assert_outward(&cube());
        assert_outward(&uv_sphere(12, 12));
    }
}
