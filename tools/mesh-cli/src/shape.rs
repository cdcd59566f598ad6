//! Shape command - generate a named shape with default parameters

use anyhow::Result;
use clap::{Args, ValueEnum};
use nether_mesh::procedural::{CapsuleParams, TorusParams, UvSphereParams};
use nether_mesh::{CleanOptions, Subdivision};
use tracing::info;

use crate::output::print_mesh;
use crate::recipe::{MeshRecipe, Operation, Shape, SubdividedSphere};

/// Generator names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeKind {
    Cube,
    Octahedron,
    Icosahedron,
    Dodecahedron,
    UvSphere,
    Capsule,
    Torus,
    CubeSphere,
    Icosphere,
}

/// Subdivision methods accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Fan,
    Center,
    Inscribe,
}

impl From<MethodArg> for Subdivision {
    fn from(method: MethodArg) -> Self {
        match method {
            MethodArg::Fan => Subdivision::Fan,
            MethodArg::Center => Subdivision::Center,
            MethodArg::Inscribe => Subdivision::Inscribe,
        }
    }
}

impl From<ShapeKind> for Shape {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Cube => Shape::Cube,
            ShapeKind::Octahedron => Shape::Octahedron,
            ShapeKind::Icosahedron => Shape::Icosahedron,
            ShapeKind::Dodecahedron => Shape::Dodecahedron,
            ShapeKind::UvSphere => Shape::UvSphere(UvSphereParams::default()),
            ShapeKind::Capsule => Shape::Capsule(CapsuleParams::default()),
            ShapeKind::Torus => Shape::Torus(TorusParams::default()),
            ShapeKind::CubeSphere => Shape::CubeSphere(SubdividedSphere::default()),
            ShapeKind::Icosphere => Shape::Icosphere(SubdividedSphere::default()),
        }
    }
}

/// Arguments for the shape command
#[derive(Args)]
pub struct ShapeArgs {
    /// Generator to run
    #[arg(value_enum)]
    pub kind: ShapeKind,

    /// Subdivide every face with this method
    #[arg(long, value_enum)]
    pub subdivide: Option<MethodArg>,

    /// Subdivision passes (used with --subdivide)
    #[arg(long, default_value_t = 1)]
    pub iterations: u32,

    /// Weld duplicate attribute entries after subdividing
    #[arg(long)]
    pub clean: bool,

    /// Split every face into triangles
    #[arg(long)]
    pub triangulate: bool,

    /// Print the mesh as JSON instead of statistics
    #[arg(long)]
    pub json: bool,
}

impl ShapeArgs {
    /// The equivalent recipe: generator, then subdivide, clean, triangulate
    pub fn to_recipe(&self) -> MeshRecipe {
        let mut operations = Vec::new();
        if let Some(method) = self.subdivide {
            operations.push(Operation::Subdivide {
                method: method.into(),
                iterations: self.iterations,
            });
        }
        if self.clean {
            operations.push(Operation::Clean(CleanOptions::default()));
        }
        if self.triangulate {
            operations.push(Operation::Triangulate);
        }

        MeshRecipe {
            shape: self.kind.into(),
            operations,
        }
    }
}

/// Execute the shape command
pub fn execute(args: ShapeArgs) -> Result<()> {
    let recipe = args.to_recipe();
    info!("Generating {:?}", args.kind);

    let mesh = recipe.build();
    print_mesh(&shape_name(args.kind), &mesh, args.json)
}

/// The name the shape is selected by on the command line
fn shape_name(kind: ShapeKind) -> String {
    match kind.to_possible_value() {
        Some(value) => value.get_name().to_string(),
        None => format!("{kind:?}"),
    }
}
