//! Nether-Mesh: polygon mesh toolkit for Nethercore
//!
//! Meshes keep positions, texture coordinates and normals in three
//! independently sized arrays. Each face corner is an [`IndexTriple`] picking
//! one entry from each, so shared positions and hard normal edges coexist
//! without duplicating data.
//!
//! # What's here
//!
//! | Area | Entry points |
//! |------|--------------|
//! | Construction | [`Mesh::push_corner`], [`Mesh2`] promotion, [`Mesh::append`] |
//! | Welding | [`Mesh::clean`], [`Mesh::clean_with`] |
//! | Refinement | [`Mesh::subdivide`], [`Mesh::subdivide_face`] |
//! | Reshaping | [`Mesh::cast_to_sphere`], [`Mesh::triangulate`], [`Mesh::transform`] |
//! | Flattening | [`Mesh::uniform_data`] |
//! | Generators | [`procedural`] |
//! | Renderer hand-off | [`RenderMesh::from_mesh`] |
//!
//! # Usage
//!
//! ```
//! use nether_mesh::procedural::generate_cube;
//! use nether_mesh::{RenderMesh, Subdivision};
//!
//! let mut mesh = generate_cube();
//! mesh.subdivide(Subdivision::Center, 2);
//! mesh.clean();
//! mesh.cast_to_sphere(1.0);
//! assert_eq!(mesh.positions.len(), 6 * 16 + 2);
//!
//! mesh.triangulate();
//! let render = RenderMesh::from_mesh(&mesh).unwrap();
//! assert_eq!(render.triangle_count(), 6 * 16 * 2);
//! ```

mod clean;
mod error;
mod export;
mod index;
mod mesh;
mod mesh2;
mod ops;
pub mod procedural;
mod subdivide;

pub use clean::{CleanOptions, MAX_PRECISION_BITS, Quantized};
pub use error::{Attribute, ExportError, MeshError};
pub use export::{RenderMesh, RenderVertex};
pub use index::{IndexTriple, Loop};
pub use mesh::Mesh;
pub use mesh2::{IndexPair, Loop2, Mesh2, PLANAR_UP};
pub use subdivide::Subdivision;
