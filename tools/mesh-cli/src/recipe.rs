//! Mesh recipe parsing
//!
//! A recipe names one generator and an ordered list of operations to run on
//! its output. Generator fields left out fill from the generator defaults.

use anyhow::{Context, Result};
use nether_mesh::procedural::{
    CapsuleParams, TorusParams, UvSphereParams, generate_capsule, generate_cube,
    generate_cube_sphere, generate_dodecahedron, generate_icosahedron, generate_icosphere,
    generate_octahedron, generate_torus, generate_uv_sphere,
};
use nether_mesh::{CleanOptions, Mesh, Subdivision};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Recipe file structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeshRecipe {
    pub shape: Shape,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// Generator selection, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Cube,
    Octahedron,
    Icosahedron,
    Dodecahedron,
    UvSphere(UvSphereParams),
    Capsule(CapsuleParams),
    Torus(TorusParams),
    CubeSphere(SubdividedSphere),
    Icosphere(SubdividedSphere),
}

/// Parameters shared by the cube-sphere and icosphere
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubdividedSphere {
    pub iterations: u32,
    pub radius: f32,
}

impl Default for SubdividedSphere {
    fn default() -> Self {
        Self {
            iterations: 2,
            radius: 0.5,
        }
    }
}

/// One step applied to the generated mesh, tagged by `op`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Subdivide {
        method: Subdivision,
        #[serde(default = "default_iterations")]
        iterations: u32,
    },
    Clean(CleanOptions),
    CastToSphere {
        #[serde(default = "default_radius")]
        radius: f32,
    },
    Triangulate,
    UniformData,
    ReverseFaces,
}

fn default_iterations() -> u32 {
    1
}

fn default_radius() -> f32 {
    0.5
}

impl Shape {
    /// Run the generator
    pub fn generate(&self) -> Mesh {
        match self {
            Shape::Cube => generate_cube(),
            Shape::Octahedron => generate_octahedron(),
            Shape::Icosahedron => generate_icosahedron(),
            Shape::Dodecahedron => generate_dodecahedron(),
            Shape::UvSphere(params) => generate_uv_sphere(params),
            Shape::Capsule(params) => generate_capsule(params),
            Shape::Torus(params) => generate_torus(params),
            Shape::CubeSphere(sphere) => generate_cube_sphere(sphere.iterations, sphere.radius),
            Shape::Icosphere(sphere) => generate_icosphere(sphere.iterations, sphere.radius),
        }
    }
}

impl Operation {
    /// Apply this step in place
    pub fn apply(&self, mesh: &mut Mesh) {
        match self {
            Operation::Subdivide { method, iterations } => mesh.subdivide(*method, *iterations),
            Operation::Clean(options) => mesh.clean_with(options),
            Operation::CastToSphere { radius } => mesh.cast_to_sphere(*radius),
            Operation::Triangulate => mesh.triangulate(),
            Operation::UniformData => mesh.uniform_data(),
            Operation::ReverseFaces => mesh.reverse_faces(),
        }
    }
}

impl MeshRecipe {
    /// Load recipe from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid recipe: {}", path.display()))
    }

    /// Parse recipe from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse mesh recipe")
    }

    /// Generate the shape and run every operation in order
    pub fn build(&self) -> Mesh {
        let mut mesh = self.shape.generate();
        for operation in &self.operations {
            debug!("applying {:?}", operation);
            operation.apply(&mut mesh);
        }
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nether_mesh::procedural::{PolyType, UvProfile};
    use std::io::Write;

    #[test]
    fn test_recipe_minimal() {
        let recipe = MeshRecipe::parse(
            r#"
[shape]
kind = "cube"
"#,
        )
        .unwrap();

        assert_eq!(recipe.shape, Shape::Cube);
        assert!(recipe.operations.is_empty());
        assert_eq!(recipe.build(), generate_cube());
    }

    #[test]
    fn test_recipe_partial_params_fill_from_defaults() {
        let recipe = MeshRecipe::parse(
            r#"
[shape]
kind = "capsule"
longitudes = 24
rings = 2
profile = "uniform"
"#,
        )
        .unwrap();

        let Shape::Capsule(params) = recipe.shape else {
            panic!("expected capsule, got {:?}", recipe.shape);
        };
        assert_eq!(params.longitudes, 24);
        assert_eq!(params.rings, 2);
        assert_eq!(params.profile, UvProfile::Uniform);
        assert_eq!(params.latitudes, CapsuleParams::default().latitudes);
        assert_eq!(params.poly, PolyType::Quads);
    }

    #[test]
    fn test_recipe_operations_in_order() {
        let recipe = MeshRecipe::parse(
            r#"
[shape]
kind = "icosahedron"

[[operations]]
op = "subdivide"
method = "inscribe"
iterations = 2

[[operations]]
op = "clean"

[[operations]]
op = "cast_to_sphere"
radius = 2.0
"#,
        )
        .unwrap();

        assert_eq!(
            recipe.operations,
            vec![
                Operation::Subdivide {
                    method: Subdivision::Inscribe,
                    iterations: 2
                },
                Operation::Clean(CleanOptions::default()),
                Operation::CastToSphere { radius: 2.0 },
            ]
        );
        assert_eq!(recipe.build(), generate_icosphere(2, 2.0));
    }

    #[test]
    fn test_recipe_clean_precision() {
        let recipe = MeshRecipe::parse(
            r#"
[shape]
kind = "cube"

[[operations]]
op = "clean"
precision_bits = 8
"#,
        )
        .unwrap();

        assert_eq!(
            recipe.operations[0],
            Operation::Clean(CleanOptions { precision_bits: 8 })
        );
    }

    #[test]
    fn test_recipe_unknown_shape_is_an_error() {
        let result = MeshRecipe::parse(
            r#"
[shape]
kind = "teapot"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_recipe_unknown_method_is_an_error() {
        let result = MeshRecipe::parse(
            r#"
[shape]
kind = "cube"

[[operations]]
op = "subdivide"
method = "loop"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_recipe_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[shape]
kind = "torus"
longitudes = 6
latitudes = 4

[[operations]]
op = "triangulate"
"#
        )
        .unwrap();

        let mesh = MeshRecipe::load(file.path()).unwrap().build();
        assert_eq!(mesh.positions.len(), 24);
        assert_eq!(mesh.face_count(), 48);
        assert!(mesh.is_triangulated());
    }

    #[test]
    fn test_recipe_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MeshRecipe::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read recipe"));
    }
}
