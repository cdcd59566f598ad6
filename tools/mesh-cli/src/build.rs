//! Build command - generate a mesh from a TOML recipe

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::output::print_mesh;
use crate::recipe::MeshRecipe;

/// Arguments for the build command
#[derive(Args)]
pub struct BuildArgs {
    /// Path to the recipe file
    pub recipe: PathBuf,

    /// Print the mesh as JSON instead of statistics
    #[arg(long)]
    pub json: bool,
}

/// Execute the build command
pub fn execute(args: BuildArgs) -> Result<()> {
    let recipe = MeshRecipe::load(&args.recipe)?;
    info!(
        "Building {:?} with {} operation(s)",
        recipe.shape,
        recipe.operations.len()
    );

    let mesh = recipe.build();
    let name = args
        .recipe
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mesh".to_string());
    print_mesh(&name, &mesh, args.json)
}
