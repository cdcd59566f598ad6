//! Planar meshes and their promotion to 3D

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::index::{IndexTriple, Loop};
use crate::mesh::Mesh;

/// Normal shared by every corner of a promoted planar mesh
pub const PLANAR_UP: Vec3 = Vec3::Z;

/// One corner of a planar face
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct IndexPair {
    /// Index into `Mesh2::positions`
    pub position: usize,
    /// Index into `Mesh2::uvs`
    pub uv: usize,
}

impl IndexPair {
    pub const fn new(position: usize, uv: usize) -> Self {
        Self { position, uv }
    }
}

/// Planar face in winding order
pub type Loop2 = SmallVec<[IndexPair; 4]>;

/// 2D mesh in the XY plane with positions and texture coordinates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh2 {
    pub positions: Vec<Vec2>,
    pub uvs: Vec<Vec2>,
    pub loops: Vec<Loop2>,
}

impl From<&Mesh2> for Mesh {
    /// Lift to 3D at z = 0 with a single shared [`PLANAR_UP`] normal
    fn from(planar: &Mesh2) -> Self {
        Mesh {
            positions: planar.positions.iter().map(|p| p.extend(0.0)).collect(),
            uvs: planar.uvs.clone(),
            normals: vec![PLANAR_UP],
            loops: planar
                .loops
                .iter()
                .map(|face| {
                    face.iter()
                        .map(|pair| IndexTriple::new(pair.position, pair.uv, 0))
                        .collect::<Loop>()
                })
                .collect(),
        }
    }
}

impl From<Mesh2> for Mesh {
    fn from(planar: Mesh2) -> Self {
        Mesh::from(&planar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_promotion_adds_zero_depth_and_shared_normal() {
        let planar = Mesh2 {
            positions: vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(2.0, 0.0),
                Vec2::new(0.0, 3.0)
            ],
            uvs: vec![Vec2::ZERO, Vec2::X, Vec2::Y],
            loops: vec![smallvec![
                IndexPair::new(0, 0),
                IndexPair::new(1, 1),
                IndexPair::new(2, 2)
            ]],
        };

        let mesh = Mesh::from(&planar);

        assert_eq!(mesh.positions[1], Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(mesh.positions[2], Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(mesh.normals, vec![PLANAR_UP]);
        assert_eq!(mesh.loops[0][1], IndexTriple::new(1, 1, 0));
        assert_eq!(mesh.validate(), Ok(()));
        // Counter-clockwise in XY faces the shared normal
        assert!(mesh.face_normal(0).dot(PLANAR_UP) > 0.0);
    }
}
