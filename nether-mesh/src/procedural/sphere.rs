//! Latitude-longitude sphere

use glam::{Vec2, Vec3};
use std::f32::consts::PI;

use crate::mesh::Mesh;

use super::bands::{AngleTable, Ring, stitch_all};
use super::types::{MAX_RESOLUTION, UvSphereParams, clamp_count, positive_extent};

/// Generate a UV sphere with single-vertex poles and smooth normals
///
/// # Arguments
/// * `params.longitudes` - Vertices per ring (min 3, max 1024)
/// * `params.latitudes` - Rings between the poles (min 1, max 1024)
/// * `params.radius` - Sphere radius (> 0.0)
/// * `params.poly` - Quads, or two triangles per quad away from the poles
///
/// # Returns
/// `longitudes * latitudes + 2` positions and normals,
/// `(longitudes + 1) * latitudes + 2 * longitudes` texture coordinates.
///
/// # UV Mapping
/// - U wraps 0→1 around the Y axis; the seam column at U = 1.0 is its own entry
/// - V runs from 1.0 at the north pole to 0.0 at the south pole
/// - Each pole has one texture coordinate per adjacent triangle, centered on its column
pub fn generate_uv_sphere(params: &UvSphereParams) -> Mesh {
    const NAME: &str = "generate_uv_sphere";

    let lons = clamp_count(NAME, "longitudes", params.longitudes, 3, MAX_RESOLUTION) as usize;
    let lats = clamp_count(NAME, "latitudes", params.latitudes, 1, MAX_RESOLUTION) as usize;
    let radius = positive_extent(NAME, "radius", params.radius);

    let lonsp1 = lons + 1;
    let table = AngleTable::new(lons);

    // Offsets into each array: north pole, latitude rings, south pole
    let pos_rings = 1;
    let pos_south = pos_rings + lons * lats;
    let uv_rings = lons;
    let uv_south = uv_rings + lonsp1 * lats;

    let mut positions = Vec::with_capacity(pos_south + 1);
    let mut uvs = Vec::with_capacity(uv_south + lons);

    positions.push(Vec3::Y);
    uvs.extend((0..lons).map(|j| Vec2::new(table.pole_u(j), 1.0)));

    let mut rings = Vec::with_capacity(lats + 2);
    rings.push(Ring::pole(0, 0, 0));

    for i in 0..lats {
        let t = (i + 1) as f32 / (lats + 1) as f32;
        let (sin_phi, cos_phi) = (t * PI).sin_cos();

        positions.extend(table.ring(sin_phi, cos_phi));
        uvs.extend((0..lonsp1).map(|j| Vec2::new(table.u(j), 1.0 - t)));

        let pos = pos_rings + i * lons;
        rings.push(Ring::full(pos, uv_rings + i * lonsp1, pos));
    }

    positions.push(Vec3::NEG_Y);
    uvs.extend((0..lons).map(|j| Vec2::new(table.pole_u(j), 0.0)));
    rings.push(Ring::pole(pos_south, uv_south, pos_south));

    let mut loops = Vec::with_capacity(lons * (lats + 1) * 2);
    stitch_all(&mut loops, &rings, lons, params.poly);

    // Unit positions double as normals
    let normals = positions.clone();
    for position in &mut positions {
        *position *= radius;
    }

    Mesh {
        positions,
        uvs,
        normals,
        loops,
    }
}
