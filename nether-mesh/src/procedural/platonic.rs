//! Fixed polyhedra from hard-coded tables
//!
//! All solids are flat shaded: one normal per face. Every face maps the same
//! texture template (unit square, triangle or regular pentagon), so the UV
//! array holds one entry per template corner.

use glam::{Vec2, Vec3};

use crate::index::{IndexTriple, Loop};
use crate::mesh::Mesh;

/// Circumradius of the octahedron, icosahedron and dodecahedron
pub const SOLID_RADIUS: f32 = 0.5;

/// Half the edge length of the cube
pub const CUBE_HALF_EXTENT: f32 = 0.5;

const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

const TRIANGLE_UVS: [[f32; 2]; 3] = [[0.5, 1.0], [0.0, 0.0], [1.0, 0.0]];

const PENTAGON_UVS: [[f32; 2]; 5] = [
    [0.5, 1.0],
    [0.024_471_7, 0.654_508_5],
    [0.206_107_4, 0.095_491_5],
    [0.793_892_6, 0.095_491_5],
    [0.975_528_3, 0.654_508_5],
];

const CUBE_POSITIONS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

// +Z, -Z, +X, -X, +Y, -Y
const CUBE_FACES: [[usize; 4]; 6] = [
    [4, 5, 6, 7],
    [1, 0, 3, 2],
    [5, 1, 2, 6],
    [0, 4, 7, 3],
    [7, 6, 2, 3],
    [0, 1, 5, 4],
];

const OCTAHEDRON_POSITIONS: [[f32; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

const OCTAHEDRON_FACES: [[usize; 3]; 8] = [
    [2, 4, 0],
    [2, 0, 5],
    [2, 5, 1],
    [2, 1, 4],
    [3, 0, 4],
    [3, 5, 0],
    [3, 1, 5],
    [3, 4, 1],
];

// Unit circumradius: (±1, ±φ, 0) cyclic, normalized
const ICO_A: f32 = 0.525_731_1;
const ICO_B: f32 = 0.850_650_8;

const ICOSAHEDRON_POSITIONS: [[f32; 3]; 12] = [
    [-ICO_A, ICO_B, 0.0],
    [ICO_A, ICO_B, 0.0],
    [-ICO_A, -ICO_B, 0.0],
    [ICO_A, -ICO_B, 0.0],
    [0.0, -ICO_A, ICO_B],
    [0.0, ICO_A, ICO_B],
    [0.0, -ICO_A, -ICO_B],
    [0.0, ICO_A, -ICO_B],
    [ICO_B, 0.0, -ICO_A],
    [ICO_B, 0.0, ICO_A],
    [-ICO_B, 0.0, -ICO_A],
    [-ICO_B, 0.0, ICO_A],
];

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

// Unit circumradius: 1/√3, φ/√3, 1/(φ√3)
const DOD_C: f32 = 0.577_350_3;
const DOD_D: f32 = 0.934_172_4;
const DOD_E: f32 = 0.356_822_1;

const DODECAHEDRON_POSITIONS: [[f32; 3]; 20] = [
    [-DOD_C, DOD_C, DOD_C],
    [0.0, DOD_D, DOD_E],
    [0.0, DOD_D, -DOD_E],
    [-DOD_C, DOD_C, -DOD_C],
    [-DOD_D, DOD_E, 0.0],
    [DOD_C, DOD_C, DOD_C],
    [-DOD_E, 0.0, DOD_D],
    [-DOD_D, -DOD_E, 0.0],
    [-DOD_E, 0.0, -DOD_D],
    [DOD_C, DOD_C, -DOD_C],
    [DOD_C, -DOD_C, DOD_C],
    [0.0, -DOD_D, DOD_E],
    [0.0, -DOD_D, -DOD_E],
    [DOD_C, -DOD_C, -DOD_C],
    [DOD_D, -DOD_E, 0.0],
    [DOD_E, 0.0, DOD_D],
    [-DOD_C, -DOD_C, DOD_C],
    [-DOD_C, -DOD_C, -DOD_C],
    [DOD_E, 0.0, -DOD_D],
    [DOD_D, DOD_E, 0.0],
];

const DODECAHEDRON_FACES: [[usize; 5]; 12] = [
    [0, 1, 2, 3, 4],
    [1, 5, 19, 9, 2],
    [7, 17, 12, 11, 16],
    [10, 11, 12, 13, 14],
    [6, 16, 11, 10, 15],
    [0, 6, 15, 5, 1],
    [8, 18, 13, 12, 17],
    [2, 9, 18, 8, 3],
    [9, 19, 14, 13, 18],
    [5, 15, 10, 14, 19],
    [3, 8, 17, 7, 4],
    [0, 4, 7, 16, 6],
];

/// Build a flat-shaded solid from a position table and same-sized faces
///
/// Corner `k` of every face uses template texture coordinate `k`; face `f`
/// uses normal `f`, the direction of its centroid.
fn flat_solid<const N: usize>(
    positions: &[[f32; 3]],
    scale: f32,
    faces: &[[usize; N]],
    uvs: &[[f32; 2]; N],
) -> Mesh {
    let positions: Vec<Vec3> = positions.iter().map(|p| Vec3::from(*p) * scale).collect();

    let normals = faces
        .iter()
        .map(|face| {
            face.iter()
                .fold(Vec3::ZERO, |acc, &i| acc + positions[i])
                .normalize()
        })
        .collect();

    let loops = faces
        .iter()
        .enumerate()
        .map(|(f, face)| {
            face.iter()
                .enumerate()
                .map(|(k, &p)| IndexTriple::new(p, k, f))
                .collect::<Loop>()
        })
        .collect();

    Mesh {
        positions,
        uvs: uvs.iter().map(|uv| Vec2::from(*uv)).collect(),
        normals,
        loops,
    }
}

/// Generate an axis-aligned cube of six quads
///
/// # Returns
/// 8 positions, 4 texture coordinates, 6 normals, 6 quads
pub fn generate_cube() -> Mesh {
    flat_solid(&CUBE_POSITIONS, CUBE_HALF_EXTENT, &CUBE_FACES, &QUAD_UVS)
}

/// Generate an octahedron with vertices on the coordinate axes
///
/// # Returns
/// 6 positions, 3 texture coordinates, 8 normals, 8 triangles
pub fn generate_octahedron() -> Mesh {
    flat_solid(
        &OCTAHEDRON_POSITIONS,
        SOLID_RADIUS,
        &OCTAHEDRON_FACES,
        &TRIANGLE_UVS,
    )
}

/// Generate a regular icosahedron
///
/// # Returns
/// 12 positions, 3 texture coordinates, 20 normals, 20 triangles
pub fn generate_icosahedron() -> Mesh {
    flat_solid(
        &ICOSAHEDRON_POSITIONS,
        SOLID_RADIUS,
        &ICOSAHEDRON_FACES,
        &TRIANGLE_UVS,
    )
}

/// Generate a regular dodecahedron
///
/// # Returns
/// 20 positions, 5 texture coordinates, 12 normals, 12 pentagons
pub fn generate_dodecahedron() -> Mesh {
    flat_solid(
        &DODECAHEDRON_POSITIONS,
        SOLID_RADIUS,
        &DODECAHEDRON_FACES,
        &PENTAGON_UVS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_outward_and_flat(mesh: &Mesh) {
        for (f, face) in mesh.loops.iter().enumerate() {
            let normal = mesh.face_normal(f).normalize();
            assert!(
                (normal - mesh.normals[f]).length() < 1e-4,
                "face {f} normal mismatch"
            );
            for &corner in face.iter() {
                assert_eq!(corner.normal, f);
            }
        }
    }

    #[test]
    fn test_cube_counts() {
        let mesh = generate_cube();
        assert_eq!(mesh.positions.len(), 8);
        assert_eq!(mesh.uvs.len(), 4);
        assert_eq!(mesh.normals.len(), 6);
        assert_eq!(mesh.face_count(), 6);
        assert!(mesh.loops.iter().all(|face| face.len() == 4));
        assert_outward_and_flat(&mesh);
    }

    #[test]
    fn test_octahedron_counts() {
        let mesh = generate_octahedron();
        assert_eq!(mesh.positions.len(), 6);
        assert_eq!(mesh.face_count(), 8);
        assert!(mesh.is_triangulated());
        assert_outward_and_flat(&mesh);
    }

    #[test]
    fn test_icosahedron_counts() {
        let mesh = generate_icosahedron();
        assert_eq!(mesh.positions.len(), 12);
        assert_eq!(mesh.face_count(), 20);
        assert!(mesh.is_triangulated());
        assert_outward_and_flat(&mesh);
    }

    #[test]
    fn test_dodecahedron_counts() {
        let mesh = generate_dodecahedron();
        assert_eq!(mesh.positions.len(), 20);
        assert_eq!(mesh.uvs.len(), 5);
        assert_eq!(mesh.face_count(), 12);
        assert!(mesh.loops.iter().all(|face| face.len() == 5));
        assert_outward_and_flat(&mesh);
    }

    #[test]
    fn test_solids_lie_on_their_circumsphere() {
        for mesh in [
            generate_octahedron(),
            generate_icosahedron(),
            generate_dodecahedron(),
        ] {
            for p in &mesh.positions {
                assert!((p.length() - SOLID_RADIUS).abs() < 1e-5);
            }
        }
        for p in &generate_cube().positions {
            assert_eq!(p.abs(), Vec3::splat(CUBE_HALF_EXTENT));
        }
    }

    #[test]
    fn test_every_position_is_used_three_or_more_times() {
        for mesh in [
            generate_cube(),
            generate_octahedron(),
            generate_icosahedron(),
            generate_dodecahedron(),
        ] {
            let mut uses = vec![0; mesh.positions.len()];
            for face in &mesh.loops {
                for corner in face.iter() {
                    uses[corner.position] += 1;
                }
            }
            assert!(uses.iter().all(|&n| n >= 3));
        }
    }
}
