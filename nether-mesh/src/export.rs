//! Flattening a mesh into a single-index vertex buffer for a host renderer

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::mesh::Mesh;

/// One interleaved vertex (32 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct RenderVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
}

/// Triangle list with one vertex per face corner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderMesh {
    pub vertices: Vec<RenderVertex>,
    /// Three indices per triangle, in the source winding
    pub indices: Vec<u32>,
}

impl RenderMesh {
    /// Convert a triangulated mesh, leaving the source untouched
    ///
    /// Vertices are laid out exactly as [`Mesh::uniform_data`] would lay out
    /// the attribute arrays, so `indices` is simply `0..corners`.
    ///
    /// # Errors
    /// [`ExportError::Invalid`] if the mesh fails [`Mesh::validate`],
    /// [`ExportError::NotTriangulated`] for the first face that is not a triangle,
    /// [`ExportError::TooManyCorners`] if the corners overflow a `u32` index.
    pub fn from_mesh(mesh: &Mesh) -> Result<Self, ExportError> {
        mesh.validate()?;

        let mut faces = mesh.loops.iter().enumerate();
        if let Some((face, corners)) = faces.find(|(_, face)| !face.is_triangle()) {
            return Err(ExportError::NotTriangulated {
                face,
                corners: corners.len(),
            });
        }
        let count = index_count(mesh.corner_count())?;

        let vertices: Vec<RenderVertex> = mesh
            .loops
            .iter()
            .flat_map(|face| face.iter())
            .map(|&corner| RenderVertex {
                position: mesh.position(corner).to_array(),
                uv: mesh.uv(corner).to_array(),
                normal: mesh.normal(corner).to_array(),
            })
            .collect();
        let indices = (0..count).collect();

        Ok(Self { vertices, indices })
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex data as raw bytes for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes for upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

fn index_count(corners: usize) -> Result<u32, ExportError> {
    u32::try_from(corners).map_err(|_| ExportError::TooManyCorners { corners })
}

impl TryFrom<&Mesh> for RenderMesh {
    type Error = ExportError;

    fn try_from(mesh: &Mesh) -> Result<Self, Self::Error> {
        Self::from_mesh(mesh)
    }
}
