//! Printing a finished mesh

use anyhow::{Context, Result};
use nether_mesh::Mesh;
use serde::Serialize;

/// Summary of a mesh's sizes and shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshStats {
    pub positions: usize,
    pub uvs: usize,
    pub normals: usize,
    pub faces: usize,
    pub corners: usize,
    pub triangulated: bool,
    pub surface_area: f32,
}

impl MeshStats {
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            positions: mesh.positions.len(),
            uvs: mesh.uvs.len(),
            normals: mesh.normals.len(),
            faces: mesh.face_count(),
            corners: mesh.corner_count(),
            triangulated: mesh.is_triangulated(),
            surface_area: (0..mesh.face_count()).map(|f| mesh.face_area(f)).sum(),
        }
    }
}

/// Print statistics, or the whole mesh as JSON
pub fn print_mesh(name: &str, mesh: &Mesh, json: bool) -> Result<()> {
    mesh.validate()
        .with_context(|| format!("Generated mesh '{}' is malformed", name))?;

    if json {
        let text = serde_json::to_string_pretty(mesh).context("Failed to serialize mesh")?;
        println!("{}", text);
        return Ok(());
    }

    let stats = MeshStats::from_mesh(mesh);
    let triangulated = if stats.triangulated { "yes" } else { "no" };

    println!("{}:", name);
    println!("  Positions:    {}", stats.positions);
    println!("  UVs:          {}", stats.uvs);
    println!("  Normals:      {}", stats.normals);
    println!("  Faces:        {}", stats.faces);
    println!("  Corners:      {}", stats.corners);
    println!("  Triangulated: {}", triangulated);
    println!("  Surface area: {:.4}", stats.surface_area);
    Ok(())
}
