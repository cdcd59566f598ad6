//! Torus around the Y axis

use glam::{Vec2, Vec3};
use tracing::warn;

use crate::mesh::Mesh;

use super::bands::{AngleTable, Ring, stitch_all};
use super::types::{MAX_RESOLUTION, TorusParams, clamp_count, positive_extent};

/// Generate a torus lying in the XZ plane
///
/// # Arguments
/// * `params.longitudes` - Segments around the main ring (min 3, max 1024)
/// * `params.latitudes` - Segments around the tube (min 3, max 1024)
/// * `params.radius` - Distance from the origin to the tube center (> 0.0)
/// * `params.thickness` - Tube radius as a fraction of `radius` (0.0, 1.0]
/// * `params.poly` - Quads, or two triangles per quad
///
/// # Returns
/// `longitudes * latitudes` positions and normals, `(longitudes + 1) * (latitudes + 1)`
/// texture coordinates. Both seams are closed in positions and open in UVs.
pub fn generate_torus(params: &TorusParams) -> Mesh {
    const NAME: &str = "generate_torus";

    let lons = clamp_count(NAME, "longitudes", params.longitudes, 3, MAX_RESOLUTION) as usize;
    let lats = clamp_count(NAME, "latitudes", params.latitudes, 3, MAX_RESOLUTION) as usize;
    let radius = positive_extent(NAME, "radius", params.radius);
    let thickness = positive_extent(NAME, "thickness", params.thickness);
    let thickness = if thickness > 1.0 {
        warn!("{NAME}: thickness {thickness} exceeds 1.0, clamping");
        1.0
    } else {
        thickness
    };
    let tube = radius * thickness;

    let major = AngleTable::new(lons);
    let minor = AngleTable::new(lats);

    let mut positions = Vec::with_capacity(lons * lats);
    let mut normals = Vec::with_capacity(lons * lats);
    for i in 0..lons {
        let center = Vec3::new(major.cos[i], 0.0, -major.sin[i]) * radius;
        for j in 0..lats {
            let normal = Vec3::new(
                minor.cos[j] * major.cos[i],
                minor.sin[j],
                -minor.cos[j] * major.sin[i],
            );
            positions.push(center + normal * tube);
            normals.push(normal);
        }
    }

    let grid_uv = |i: usize, j: usize| Vec2::new(i as f32 / lons as f32, j as f32 / lats as f32);
    let uvs = (0..=lons)
        .flat_map(|i| (0..=lats).map(move |j| grid_uv(i, j)))
        .collect();

    // The last ring reuses ring 0's positions with the U = 1.0 texture column
    let mut rings: Vec<Ring> = (0..lons)
        .map(|i| Ring::full(i * lats, i * (lats + 1), i * lats))
        .collect();
    rings.push(Ring::full(0, lons * (lats + 1), 0));

    let mut loops = Vec::with_capacity(lons * lats * 2);
    stitch_all(&mut loops, &rings, lats, params.poly);

    Mesh {
        positions,
        uvs,
        normals,
        loops,
    }
}
