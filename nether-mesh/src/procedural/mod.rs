//! Procedural mesh generators
//!
//! Every generator is a pure function returning a fresh, well-formed [`Mesh`]
//! wound counter-clockwise when seen from outside. Out-of-range parameters are
//! clamped with a warning rather than rejected.
//!
//! [`Mesh`]: crate::Mesh

mod bands;
mod capsule;
mod platonic;
mod sphere;
mod subdivided;
mod torus;
mod types;

pub use capsule::generate_capsule;
pub use platonic::{
    CUBE_HALF_EXTENT, SOLID_RADIUS, generate_cube, generate_dodecahedron, generate_icosahedron,
    generate_octahedron,
};
pub use sphere::generate_uv_sphere;
pub use subdivided::{generate_cube_sphere, generate_icosphere};
pub use torus::generate_torus;
pub use types::{
    CapsuleParams, MAX_RESOLUTION, MAX_SPHERE_ITERATIONS, MIN_EXTENT, PolyType, TorusParams,
    UvProfile, UvSphereParams,
};

pub(crate) use types::positive_extent;
