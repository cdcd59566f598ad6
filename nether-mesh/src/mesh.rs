//! The mesh aggregate
//!
//! Three independently sized attribute arrays plus the faces that index them.
//! Every public operation leaves the mesh well-formed: each corner of each
//! face addresses an existing entry in all three arrays.

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{Attribute, MeshError};
use crate::index::{IndexTriple, Loop};

/// Polygon mesh with separately indexed positions, texture coordinates and normals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Texture coordinates
    pub uvs: Vec<Vec2>,
    /// Unit normals
    pub normals: Vec<Vec3>,
    /// Faces, each a ring of corners into the arrays above
    pub loops: Vec<Loop>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position, returning its index
    pub fn push_position(&mut self, position: Vec3) -> usize {
        self.positions.push(position);
        self.positions.len() - 1
    }

    /// Append a texture coordinate, returning its index
    pub fn push_uv(&mut self, uv: Vec2) -> usize {
        self.uvs.push(uv);
        self.uvs.len() - 1
    }

    /// Append a normal, returning its index
    pub fn push_normal(&mut self, normal: Vec3) -> usize {
        self.normals.push(normal);
        self.normals.len() - 1
    }

    /// Append one entry to each array, returning the triple that addresses them
    pub fn push_corner(&mut self, position: Vec3, uv: Vec2, normal: Vec3) -> IndexTriple {
        IndexTriple::new(
            self.push_position(position),
            self.push_uv(uv),
            self.push_normal(normal),
        )
    }

    /// Position addressed by a corner
    #[inline]
    pub fn position(&self, corner: IndexTriple) -> Vec3 {
        debug_assert!(
            corner.position < self.positions.len(),
            "position index {} out of range",
            corner.position
        );
        self.positions[corner.position]
    }

    /// Texture coordinate addressed by a corner
    #[inline]
    pub fn uv(&self, corner: IndexTriple) -> Vec2 {
        debug_assert!(
            corner.uv < self.uvs.len(),
            "uv index {} out of range",
            corner.uv
        );
        self.uvs[corner.uv]
    }

    /// Normal addressed by a corner
    #[inline]
    pub fn normal(&self, corner: IndexTriple) -> Vec3 {
        debug_assert!(
            corner.normal < self.normals.len(),
            "normal index {} out of range",
            corner.normal
        );
        self.normals[corner.normal]
    }

    /// Number of faces
    pub fn face_count(&self) -> usize {
        self.loops.len()
    }

    /// Total number of face corners
    pub fn corner_count(&self) -> usize {
        self.loops.iter().map(|face| face.len()).sum()
    }

    /// Whether every face is a triangle
    pub fn is_triangulated(&self) -> bool {
        self.loops.iter().all(Loop::is_triangle)
    }

    /// Check that every face has at least three corners and every corner is in range
    pub fn validate(&self) -> Result<(), MeshError> {
        for (face, corners) in self.loops.iter().enumerate() {
            if corners.len() < 3 {
                return Err(MeshError::DegenerateFace {
                    face,
                    corners: corners.len(),
                });
            }

            for (corner, triple) in corners.iter().enumerate() {
                let checks = [
                    (Attribute::Position, triple.position, self.positions.len()),
                    (Attribute::TexCoord, triple.uv, self.uvs.len()),
                    (Attribute::Normal, triple.normal, self.normals.len()),
                ];
                for (attribute, index, len) in checks {
                    if index >= len {
                        return Err(MeshError::IndexOutOfRange {
                            face,
                            corner,
                            attribute,
                            index,
                            len,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Area-weighted normal of a face (Newell's method), not normalized
    ///
    /// The length is twice the area of the polygon when it is planar.
    pub fn face_normal(&self, face: usize) -> Vec3 {
        self.loops[face].edges().fold(Vec3::ZERO, |acc, (a, b)| {
            let (a, b) = (self.position(a), self.position(b));
            acc + Vec3::new(
                (a.y - b.y) * (a.z + b.z),
                (a.z - b.z) * (a.x + b.x),
                (a.x - b.x) * (a.y + b.y),
            )
        })
    }

    /// Area of a face, summed over a triangle fan from its first corner
    pub fn face_area(&self, face: usize) -> f32 {
        let corners = &self.loops[face];
        let origin = self.position(corners[0]);
        corners
            .windows(2)
            .skip(1)
            .map(|pair| {
                let b = self.position(pair[0]) - origin;
                let c = self.position(pair[1]) - origin;
                b.cross(c).length() * 0.5
            })
            .sum()
    }

    /// Transform positions by a matrix, normals by its inverse-transpose
    pub fn transform(&mut self, matrix: &Mat4) {
        let normal_matrix = matrix.inverse().transpose();

        for position in &mut self.positions {
            *position = matrix.transform_point3(*position);
        }

        for normal in &mut self.normals {
            *normal = normal_matrix.transform_vector3(*normal).normalize_or_zero();
        }
    }

    /// Reverse the winding of every face and flip every normal
    pub fn reverse_faces(&mut self) {
        for face in &mut self.loops {
            face.reverse();
        }
        for normal in &mut self.normals {
            *normal = -*normal;
        }
    }

    /// Append another mesh, offsetting its face indices past this mesh's arrays
    pub fn append(&mut self, other: &Mesh) {
        let base = IndexTriple::new(self.positions.len(), self.uvs.len(), self.normals.len());

        self.positions.extend_from_slice(&other.positions);
        self.uvs.extend_from_slice(&other.uvs);
        self.normals.extend_from_slice(&other.normals);
        let offset = |face: &Loop| face.iter().map(|c| c.offset(base)).collect::<Loop>();
        self.loops.extend(other.loops.iter().map(offset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::generate_cube;

    fn unit_square() -> Mesh {
        let mut mesh = Mesh::new();
        let n = mesh.push_normal(Vec3::Z);
        let corners: Vec<IndexTriple> = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
            .into_iter()
            .map(|(x, y)| {
                IndexTriple::new(
                    mesh.push_position(Vec3::new(x, y, 0.0)),
                    mesh.push_uv(Vec2::new(x, y)),
                    n,
                )
            })
            .collect();
        mesh.loops.push(Loop::new(corners));
        mesh
    }

    #[test]
    fn test_push_returns_prior_length() {
        let mut mesh = Mesh::new();
        assert_eq!(mesh.push_position(Vec3::ZERO), 0);
        assert_eq!(mesh.push_position(Vec3::ONE), 1);
        assert_eq!(mesh.push_uv(Vec2::ZERO), 0);
        assert_eq!(mesh.push_normal(Vec3::Y), 0);
    }

    #[test]
    fn test_validate_accepts_well_formed_mesh() {
        assert_eq!(unit_square().validate(), Ok(()));
        assert_eq!(Mesh::new().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_out_of_range_uv() {
        let mut mesh = unit_square();
        mesh.loops[0][2].uv = 17;
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexOutOfRange {
                face: 0,
                corner: 2,
                attribute: Attribute::TexCoord,
                index: 17,
                len: 4,
            })
        );
    }

    #[test]
    fn test_face_area_and_normal_of_square() {
        let mesh = unit_square();
        assert!((mesh.face_area(0) - 1.0).abs() < 1e-6);
        let normal = mesh.face_normal(0);
        assert!((normal - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-6);
    }

    #[test]
    fn test_transform_moves_positions_and_keeps_unit_normals() {
        let mut mesh = generate_cube();
        mesh.transform(&Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0)));

        let max_x = mesh.positions.iter().map(|p| p.x).fold(f32::MIN, f32::max);
        assert!((max_x - 1.0).abs() < 1e-6);
        for normal in &mesh.normals {
            assert!((normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_reverse_faces_flips_orientation() {
        let mut mesh = unit_square();
        mesh.reverse_faces();
        assert!(mesh.face_normal(0).z < 0.0);
        assert_eq!(mesh.normals[0], Vec3::NEG_Z);
    }

    #[test]
    fn test_append_offsets_indices() {
        let mut mesh = unit_square();
        let other = unit_square();
        mesh.append(&other);

        assert_eq!(mesh.positions.len(), 8);
        assert_eq!(mesh.normals.len(), 2);
        assert_eq!(mesh.loops[1][0], IndexTriple::new(4, 4, 1));
        assert_eq!(mesh.validate(), Ok(()));
    }
}
