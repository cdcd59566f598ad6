//! Error types for mesh validation and export

use std::fmt;

/// Attribute array addressed by one component of an [`IndexTriple`](crate::IndexTriple)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Vertex positions
    Position,
    /// Texture coordinates
    TexCoord,
    /// Vertex normals
    Normal,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Position => write!(f, "position"),
            Attribute::TexCoord => write!(f, "texture coordinate"),
            Attribute::Normal => write!(f, "normal"),
        }
    }
}

/// Structural problem found by [`Mesh::validate`](crate::Mesh::validate)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// A face corner points past the end of an attribute array
    #[error("face {face}, corner {corner}: {attribute} index {index} out of range (len {len})")]
    IndexOutOfRange {
        face: usize,
        corner: usize,
        attribute: Attribute,
        index: usize,
        len: usize,
    },

    /// A face with fewer than three corners
    #[error("face {face} has {corners} corners (minimum 3)")]
    DegenerateFace { face: usize, corners: usize },
}

/// Failure converting a mesh for a host renderer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// Renderer input must be all triangles; run `triangulate` first
    #[error("face {face} has {corners} corners - triangulate the mesh before export")]
    NotTriangulated { face: usize, corners: usize },

    /// More corners than a 32-bit index buffer can address
    #[error("mesh has {corners} corners, more than a u32 index buffer can address")]
    TooManyCorners { corners: usize },

    /// The mesh failed structural validation
    #[error(transparent)]
    Invalid(#[from] MeshError),
}
