//! Nether Mesh CLI - Build and inspect procedural meshes
//!
//! # Commands
//!
//! - `nether-mesh build <recipe.toml>` - Generate a mesh from a recipe file
//! - `nether-mesh shape <kind>` - Generate a named shape with default parameters
//!
//! Both print a statistics summary, or the full mesh as JSON with `--json`.
//!
//! # Recipe
//!
//! ```toml
//! [shape]
//! kind = "capsule"
//! longitudes = 24
//! rings = 2
//!
//! [[operations]]
//! op = "subdivide"
//! method = "center"
//! iterations = 1
//!
//! [[operations]]
//! op = "clean"
//! precision_bits = 16
//! ```

mod build;
mod output;
mod recipe;
mod shape;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Nether Mesh CLI - Build and inspect procedural meshes
#[derive(Parser)]
#[command(name = "nether-mesh")]
#[command(about = "Build and inspect procedural meshes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a mesh from a TOML recipe
    Build(build::BuildArgs),

    /// Generate a named shape with default parameters
    Shape(shape::ShapeArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build(args) => build::execute(args),
        Commands::Shape(args) => shape::execute(args),
    }
}
