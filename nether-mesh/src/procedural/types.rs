//! Generator parameters
//!
//! Parameter structs deserialize with `#[serde(default)]`, so a partial
//! recipe fills the rest from `Default`.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Smallest radius, depth or thickness a generator will build with
pub const MIN_EXTENT: f32 = 0.001;

/// Largest longitude / latitude / ring count a generator will build with
pub const MAX_RESOLUTION: u32 = 1024;

/// Largest subdivision depth for the subdivided spheres
pub const MAX_SPHERE_ITERATIONS: u32 = 7;

/// Face type emitted by the parametric generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolyType {
    /// Two triangles per grid cell, split along a fixed diagonal
    Tris,
    /// One quad per grid cell
    #[default]
    Quads,
}

/// How a capsule divides the V axis between its hemispheres and cylinder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UvProfile {
    /// Each hemisphere and the cylinder get a third
    Fixed,
    /// Proportional to the radius against the total length
    #[default]
    Aspect,
    /// Proportional to ring counts, so every band has the same V height
    Uniform,
}

impl UvProfile {
    /// Share of the V range taken by one hemisphere
    pub fn aspect_ratio(self, latitudes: u32, rings: u32, depth: f32, radius: f32) -> f32 {
        match self {
            UvProfile::Fixed => 1.0 / 3.0,
            UvProfile::Aspect => radius / (depth + radius + radius),
            UvProfile::Uniform => (latitudes / 2) as f32 / (rings + 1 + latitudes) as f32,
        }
    }
}

/// UV sphere: poles plus `latitudes` rings of `longitudes` vertices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UvSphereParams {
    /// Vertices per ring (min 3)
    pub longitudes: u32,
    /// Rings between the poles (min 1)
    pub latitudes: u32,
    pub radius: f32,
    pub poly: PolyType,
}

impl Default for UvSphereParams {
    fn default() -> Self {
        Self {
            longitudes: 32,
            latitudes: 16,
            radius: 0.5,
            poly: PolyType::Quads,
        }
    }
}

/// Capsule: two hemispheres joined by a cylinder along Y
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapsuleParams {
    /// Vertices per ring (min 3)
    pub longitudes: u32,
    /// Latitude steps across both hemispheres; rounded up to even (min 2)
    pub latitudes: u32,
    /// Extra rings inside the cylinder; 0 joins the two equators directly
    pub rings: u32,
    /// Length of the cylinder
    pub depth: f32,
    pub radius: f32,
    pub profile: UvProfile,
    pub poly: PolyType,
}

impl Default for CapsuleParams {
    fn default() -> Self {
        Self {
            longitudes: 32,
            latitudes: 16,
            rings: 0,
            depth: 1.0,
            radius: 0.5,
            profile: UvProfile::Aspect,
            poly: PolyType::Quads,
        }
    }
}

/// Torus lying in the XZ plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusParams {
    /// Segments around the main ring (min 3)
    pub longitudes: u32,
    /// Segments around the tube (min 3)
    pub latitudes: u32,
    /// Distance from the center to the middle of the tube
    pub radius: f32,
    /// Tube radius as a fraction of `radius`, at most 1.0
    pub thickness: f32,
    pub poly: PolyType,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            longitudes: 32,
            latitudes: 24,
            radius: 0.5,
            thickness: 0.25,
            poly: PolyType::Quads,
        }
    }
}

/// Clamp a length that must be positive, warning when it was not
pub(crate) fn positive_extent(generator: &str, name: &str, value: f32) -> f32 {
    if value.is_nan() || value <= 0.0 {
        warn!("{generator}: {name} must be > 0.0, clamping to {MIN_EXTENT}");
        MIN_EXTENT
    } else {
        value
    }
}

/// Clamp a count into `min..=max`, warning when it moved
pub(crate) fn clamp_count(generator: &str, name: &str, value: u32, min: u32, max: u32) -> u32 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("{generator}: {name} {value} outside {min}..={max}, clamping to {clamped}");
    }
    clamped
}
