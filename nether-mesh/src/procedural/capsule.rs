//! Capsule: hemispherical caps joined by a cylinder

use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

use crate::mesh::Mesh;

use super::bands::{AngleTable, Ring, stitch_all};
use super::types::{CapsuleParams, MAX_RESOLUTION, clamp_count, positive_extent};

/// Generate a capsule along the Y axis
///
/// # Arguments
/// * `params.longitudes` - Vertices per ring (min 3, max 1024)
/// * `params.latitudes` - Latitude steps over both caps, rounded up to even (min 2, max 1024)
/// * `params.rings` - Rings inside the cylinder (max 1024); 0 joins the equators with one band
/// * `params.depth` - Cylinder length (> 0.0)
/// * `params.radius` - Cap and cylinder radius (> 0.0)
/// * `params.profile` - How V is split between the caps and the cylinder
/// * `params.poly` - Quads, or two triangles per quad away from the poles
///
/// # Returns
/// `longitudes * (latitudes + rings) + 2` positions. Both equators and every
/// cylinder ring share one ring of normals.
///
/// # UV Mapping
/// - U wraps 0→1 around the Y axis with an explicit seam column
/// - North cap spans V in `[1 - a, 1]`, south cap `[0, a]`, cylinder the rest,
///   where `a` is the profile's aspect ratio
pub fn generate_capsule(params: &CapsuleParams) -> Mesh {
    const NAME: &str = "generate_capsule";

    let lons = clamp_count(NAME, "longitudes", params.longitudes, 3, MAX_RESOLUTION) as usize;
    let latitudes = clamp_count(NAME, "latitudes", params.latitudes, 2, MAX_RESOLUTION);
    let latitudes = latitudes + latitudes % 2;
    let rings = clamp_count(NAME, "rings", params.rings, 0, MAX_RESOLUTION) as usize;
    let depth = positive_extent(NAME, "depth", params.depth);
    let radius = positive_extent(NAME, "radius", params.radius);

    let half_lats = latitudes as usize / 2;
    let half_latsn1 = half_lats - 1;
    let lonsp1 = lons + 1;
    let ringsp1 = rings + 1;
    let half_depth = depth * 0.5;

    let vt_aspect = params
        .profile
        .aspect_ratio(latitudes, rings as u32, depth, radius);
    let vt_north = 1.0 - vt_aspect;
    let vt_south = vt_aspect;

    // Position (and UV) offsets per band, top to bottom
    let pos_north_hemi = 1;
    let pos_north_equator = pos_north_hemi + lons * half_latsn1;
    let pos_cylinder = pos_north_equator + lons;
    let pos_south_equator = pos_cylinder + lons * rings;
    let pos_south_hemi = pos_south_equator + lons;
    let pos_south_pole = pos_south_hemi + lons * half_latsn1;

    let uv_north_hemi = lons;
    let uv_north_equator = uv_north_hemi + lonsp1 * half_latsn1;
    let uv_cylinder = uv_north_equator + lonsp1;
    let uv_south_equator = uv_cylinder + lonsp1 * rings;
    let uv_south_hemi = uv_south_equator + lonsp1;
    let uv_south_pole = uv_south_hemi + lonsp1 * half_latsn1;

    // One normal ring serves both equators and the cylinder
    let norm_north_hemi = 1;
    let norm_equator = norm_north_hemi + lons * half_latsn1;
    let norm_south_hemi = norm_equator + lons;
    let norm_south_pole = norm_south_hemi + lons * half_latsn1;

    let table = &AngleTable::new(lons);

    // Polar angle sampled once per latitude step, pole excluded, equator excluded
    let polar: Vec<(f32, f32)> = (1..half_lats)
        .map(|k| (k as f32 / half_lats as f32 * FRAC_PI_2).sin_cos())
        .collect();

    let mut positions = Vec::with_capacity(pos_south_pole + 1);
    let mut uvs = Vec::with_capacity(uv_south_pole + lons);
    let mut normals = Vec::with_capacity(norm_south_pole + 1);
    let mut band_rings = Vec::with_capacity(half_lats * 2 + rings + 2);

    let ring_uvs = move |v: f32| (0..lonsp1).map(move |j| Vec2::new(table.u(j), v));

    // North pole
    positions.push(Vec3::new(0.0, half_depth + radius, 0.0));
    normals.push(Vec3::Y);
    uvs.extend((0..lons).map(|j| Vec2::new(table.pole_u(j), 1.0)));
    band_rings.push(Ring::pole(0, 0, 0));

    // North cap, pole to equator
    for (k, &(sin_phi, cos_phi)) in polar.iter().enumerate() {
        let offset = Vec3::new(0.0, half_depth, 0.0);
        let start = normals.len();
        normals.extend(table.ring(sin_phi, cos_phi));
        positions.extend(normals[start..].iter().map(|n| offset + *n * radius));
        uvs.extend(ring_uvs(1.0 - vt_aspect * (k + 1) as f32 / half_lats as f32));
        band_rings.push(Ring::full(
            pos_north_hemi + k * lons,
            uv_north_hemi + k * lonsp1,
            norm_north_hemi + k * lons,
        ));
    }

    // Equator normals, shared by every cylinder ring
    normals.extend(table.ring(1.0, 0.0));
    let equator = &normals[norm_equator..norm_south_hemi];

    // North equator, cylinder rings, south equator
    for r in 0..=ringsp1 {
        let t = r as f32 / ringsp1 as f32;
        let y = half_depth - depth * t;
        let rim = |n: &Vec3| Vec3::new(n.x * radius, y, n.z * radius);
        positions.extend(equator.iter().map(rim));
        uvs.extend(ring_uvs(vt_north + (vt_south - vt_north) * t));
    }
    band_rings.push(Ring::full(pos_north_equator, uv_north_equator, norm_equator));
    for r in 0..rings {
        band_rings.push(Ring::full(
            pos_cylinder + r * lons,
            uv_cylinder + r * lonsp1,
            norm_equator,
        ));
    }
    band_rings.push(Ring::full(pos_south_equator, uv_south_equator, norm_equator));

    // South cap, equator to pole
    for (k, &(sin_phi, cos_phi)) in polar.iter().rev().enumerate() {
        let offset = Vec3::new(0.0, -half_depth, 0.0);
        let steps_from_pole = half_latsn1 - k;
        let start = normals.len();
        normals.extend(table.ring(sin_phi, -cos_phi));
        positions.extend(normals[start..].iter().map(|n| offset + *n * radius));
        uvs.extend(ring_uvs(vt_aspect * steps_from_pole as f32 / half_lats as f32));
        band_rings.push(Ring::full(
            pos_south_hemi + k * lons,
            uv_south_hemi + k * lonsp1,
            norm_south_hemi + k * lons,
        ));
    }

    // South pole
    positions.push(Vec3::new(0.0, -half_depth - radius, 0.0));
    normals.push(Vec3::NEG_Y);
    uvs.extend((0..lons).map(|j| Vec2::new(table.pole_u(j), 0.0)));
    band_rings.push(Ring::pole(pos_south_pole, uv_south_pole, norm_south_pole));

    debug_assert_eq!(positions.len(), pos_south_pole + 1);
    debug_assert_eq!(uvs.len(), uv_south_pole + lons);
    debug_assert_eq!(normals.len(), norm_south_pole + 1);

    let mut loops = Vec::with_capacity(lons * (latitudes as usize + ringsp1) * 2);
    stitch_all(&mut loops, &band_rings, lons, params.poly);

    Mesh {
        positions,
        uvs,
        normals,
        loops,
    }
}
