//! Whole-mesh reshaping: sphere projection, triangulation, per-corner flattening

use tracing::debug;

use crate::index::{IndexTriple, Loop};
use crate::mesh::Mesh;
use crate::procedural::positive_extent;

impl Mesh {
    /// Project every position onto a sphere around the origin
    ///
    /// The normals array is replaced by the unit direction of each position
    /// and every corner's normal index is set to its position index, giving
    /// smooth shading. A position at the origin keeps a zero normal.
    pub fn cast_to_sphere(&mut self, radius: f32) {
        let radius = positive_extent("cast_to_sphere", "radius", radius);

        self.normals = self
            .positions
            .iter()
            .map(|p| p.normalize_or_zero())
            .collect();
        for (position, direction) in self.positions.iter_mut().zip(&self.normals) {
            *position = *direction * radius;
        }

        for face in &mut self.loops {
            for corner in face.iter_mut() {
                corner.normal = corner.position;
            }
        }
    }

    /// Split every face with more than three corners into a triangle fan
    /// from its first corner
    ///
    /// Attribute arrays are untouched; an n-gon becomes n - 2 triangles in place.
    pub fn triangulate(&mut self) {
        if self.is_triangulated() {
            return;
        }

        let faces = std::mem::take(&mut self.loops);
        let capacity = faces.iter().map(|face| face.len().saturating_sub(2)).sum();
        let mut triangles = Vec::with_capacity(capacity);
        for face in faces {
            if face.is_triangle() {
                triangles.push(face);
                continue;
            }
            let origin = face[0];
            let fan = face.windows(2).skip(1);
            triangles.extend(fan.map(|pair| Loop::triangle(origin, pair[0], pair[1])));
        }
        self.loops = triangles;

        debug!("triangulate: {} faces", self.loops.len());
    }

    /// Give every corner its own attribute entries
    ///
    /// Afterwards all three arrays have one entry per corner, in face order,
    /// and every triple is `(k, k, k)`. This is the layout a renderer with a
    /// single index buffer expects.
    pub fn uniform_data(&mut self) {
        let corners = self.corner_count();
        let mut positions = Vec::with_capacity(corners);
        let mut uvs = Vec::with_capacity(corners);
        let mut normals = Vec::with_capacity(corners);

        for face in &mut self.loops {
            for corner in face.iter_mut() {
                positions.push(self.positions[corner.position]);
                uvs.push(self.uvs[corner.uv]);
                normals.push(self.normals[corner.normal]);
                *corner = IndexTriple::uniform(positions.len() - 1);
            }
        }

        self.positions = positions;
        self.uvs = uvs;
        self.normals = normals;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::{
        UvSphereParams, generate_cube, generate_dodecahedron, generate_uv_sphere,
    };
    use glam::{Vec2, Vec3};

    #[test]
    fn test_cast_to_sphere_shares_position_and_normal_indices() {
        let mut mesh = generate_cube();
        mesh.cast_to_sphere(2.0);

        assert_eq!(mesh.normals.len(), mesh.positions.len());
        for p in &mesh.positions {
            assert!((p.length() - 2.0).abs() < 1e-5);
        }
        for face in &mesh.loops {
            for corner in face.iter() {
                assert_eq!(corner.normal, corner.position);
            }
        }
        assert_eq!(mesh.validate(), Ok(()));
    }

    #[test]
    fn test_cast_to_sphere_clamps_radius() {
        let mut mesh = generate_cube();
        mesh.cast_to_sphere(-1.0);
        assert!((mesh.positions[0].length() - crate::procedural::MIN_EXTENT).abs() < 1e-7);
    }

    #[test]
    fn test_cast_to_sphere_keeps_origin_at_origin() {
        let mut mesh = Mesh::new();
        let a = mesh.push_corner(Vec3::ZERO, Vec2::ZERO, Vec3::Y);
        let b = mesh.push_corner(Vec3::X, Vec2::X, Vec3::Y);
        let c = mesh.push_corner(Vec3::Y, Vec2::Y, Vec3::Y);
        mesh.loops.push(Loop::triangle(a, b, c));
        mesh.cast_to_sphere(1.0);

        assert_eq!(mesh.positions[0], Vec3::ZERO);
        assert_eq!(mesh.normals[0], Vec3::ZERO);
    }

    #[test]
    fn test_triangulate_fans_from_first_corner() {
        let mut mesh = generate_dodecahedron();
        let original = mesh.clone();
        mesh.triangulate();

        assert_eq!(mesh.face_count(), 12 * 3);
        assert!(mesh.is_triangulated());
        assert_eq!(mesh.positions, original.positions);

        let pentagon = &original.loops[0];
        assert_eq!(
            mesh.loops[0].corners(),
            &[pentagon[0], pentagon[1], pentagon[2]]
        );
        assert_eq!(
            mesh.loops[2].corners(),
            &[pentagon[0], pentagon[3], pentagon[4]]
        );

        let area = |m: &Mesh| (0..m.face_count()).map(|f| m.face_area(f)).sum::<f32>();
        assert!((area(&mesh) - area(&original)).abs() < 1e-5);
    }

    #[test]
    fn test_triangulate_leaves_triangles_alone() {
        let mut mesh = generate_uv_sphere(&UvSphereParams {
            longitudes: 6,
            latitudes: 3,
            ..Default::default()
        });
        let cap = mesh.loops[0].clone();
        mesh.triangulate();

        assert_eq!(mesh.loops[0], cap);
        assert_eq!(mesh.face_count(), 2 * 6 + 2 * 6 * 2);
    }

    #[test]
    fn test_uniform_data_one_entry_per_corner() {
        let mut mesh = generate_cube();
        let original = mesh.clone();
        mesh.uniform_data();

        assert_eq!(mesh.positions.len(), 24);
        assert_eq!(mesh.uvs.len(), 24);
        assert_eq!(mesh.normals.len(), 24);

        let mut k = 0;
        for (face, before) in mesh.loops.iter().zip(&original.loops) {
            for (corner, old) in face.iter().zip(before.iter()) {
                assert_eq!(*corner, IndexTriple::uniform(k));
                assert_eq!(mesh.position(*corner), original.position(*old));
                assert_eq!(mesh.uv(*corner), original.uv(*old));
                assert_eq!(mesh.normal(*corner), original.normal(*old));
                k += 1;
            }
        }
    }
}
