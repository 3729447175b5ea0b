//! `diredge index`: triangle soup to indexed mesh.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use diredge_io::{load_tri, object_name, save_face};
use owo_colors::OwoColorize;
use tracing::info;

use super::output_path;

/// Arguments for `diredge index`.
#[derive(Args)]
pub struct IndexArgs {
    /// Input .tri file
    pub input: PathBuf,

    /// Output .face file (default: input with .face extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Weld the soup on exact positions and write the `.face` file.
pub fn execute(args: &IndexArgs) -> Result<()> {
    let soup = load_tri(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let mesh = soup.to_indexed();

    let output = output_path(&args.input, args.output.as_deref(), "", "face");
    save_face(&mesh, &object_name(&output), &output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(
        "Welded {} soup vertices into {}",
        soup.len() * 3,
        mesh.vertices.len()
    );
    println!(
        "{} {} ({} vertices, {} faces)",
        "wrote".green().bold(),
        output.display(),
        mesh.vertices.len(),
        mesh.faces.len()
    );
    Ok(())
}
