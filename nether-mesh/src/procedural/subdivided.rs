//! Spheres built by refining a solid and projecting it outward

use crate::mesh::Mesh;
use crate::subdivide::Subdivision;

use super::platonic::{generate_cube, generate_icosahedron};
use super::types::{MAX_SPHERE_ITERATIONS, clamp_count};

fn refine_and_cast(
    mut mesh: Mesh,
    name: &str,
    method: Subdivision,
    iterations: u32,
    radius: f32,
) -> Mesh {
    let iterations = clamp_count(name, "iterations", iterations, 0, MAX_SPHERE_ITERATIONS);
    mesh.subdivide(method, iterations);
    mesh.clean();
    mesh.cast_to_sphere(radius);
    mesh
}

/// Generate a sphere of quads by repeatedly center-splitting a cube
///
/// # Arguments
/// * `iterations` - Refinement passes (max 7)
/// * `radius` - Sphere radius (> 0.0)
///
/// # Returns
/// `6 * 4^n + 2` positions and smooth normals, `6 * 4^n` quads
pub fn generate_cube_sphere(iterations: u32, radius: f32) -> Mesh {
    refine_and_cast(
        generate_cube(),
        "generate_cube_sphere",
        Subdivision::Center,
        iterations,
        radius,
    )
}

/// Generate a geodesic sphere of triangles from an icosahedron
///
/// # Arguments
/// * `iterations` - Refinement passes (max 7)
/// * `radius` - Sphere radius (> 0.0)
///
/// # Returns
/// `10 * 4^n + 2` positions and smooth normals, `20 * 4^n` triangles
pub fn generate_icosphere(iterations: u32, radius: f32) -> Mesh {
    refine_and_cast(
        generate_icosahedron(),
        "generate_icosphere",
        Subdivision::Inscribe,
        iterations,
        radius,
    )
}
