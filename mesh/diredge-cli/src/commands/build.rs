//! `diredge build`: indexed mesh to directed-edge mesh.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use diredge_io::{load_indexed, object_name, save_diredge};
use diredge_topology::{build_mesh, BuildParams};
use owo_colors::OwoColorize;

use super::{output_path, TwinMatchingArg};

/// Arguments for `diredge build`.
#[derive(Args)]
pub struct BuildArgs {
    /// Input .face file (a .tri soup is welded first)
    pub input: PathBuf,

    /// Output .diredge file (default: input with .diredge extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How twins are matched
    #[arg(long, value_enum, default_value_t = TwinMatchingArg::Indexed)]
    pub twin_matching: TwinMatchingArg,
}

/// Derive twins, degrees and first directed edges, then write the
/// `.diredge` file.
pub fn execute(args: &BuildArgs) -> Result<()> {
    let indexed = load_indexed(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let params = BuildParams::default().with_twin_matching(args.twin_matching.into());
    let mesh = build_mesh(&indexed, &params)
        .with_context(|| format!("invalid mesh in {}", args.input.display()))?;

    let output = output_path(&args.input, args.output.as_deref(), "", "diredge");
    save_diredge(&mesh.to_records(), &object_name(&output), &output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let boundary = mesh.boundary_edge_count();
    let status = if boundary == 0 {
        "closed".green().to_string()
    } else {
        format!("{boundary} boundary edges").yellow().to_string()
    };
    println!(
        "{} {} ({} vertices, {} faces, {} edges, {})",
        "wrote".green().bold(),
        output.display(),
        mesh.vertices.len(),
        mesh.faces.len(),
        mesh.edge_count(),
        status
    );
    Ok(())
}
