//! `diredge repair`: fill holes with centroid fans.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use diredge_io::{load_diredge, object_name, save_diredge};
use diredge_topology::{fill_holes, from_records, validate_mesh, RepairParams};
use owo_colors::OwoColorize;
use tracing::info;

use super::{output_path, TwinMatchingArg};

/// Arguments for `diredge repair`.
#[derive(Args)]
pub struct RepairArgs {
    /// Input .diredge file
    pub input: PathBuf,

    /// Output .diredge file (default: `<stem>_fixed.diredge` next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Leave holes with more boundary edges than this open
    #[arg(long)]
    pub max_hole_edges: Option<usize>,

    /// How the new edges are paired
    #[arg(long, value_enum, default_value_t = TwinMatchingArg::Indexed)]
    pub twin_matching: TwinMatchingArg,
}

/// Fill every hole and write the patched mesh.
pub fn execute(args: &RepairArgs) -> Result<()> {
    let records = load_diredge(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let mut mesh = from_records(&records)
        .with_context(|| format!("inconsistent records in {}", args.input.display()))?;

    let params = RepairParams {
        twin_matching: args.twin_matching.into(),
        max_hole_edges: args.max_hole_edges,
    };
    let summary = fill_holes(&mut mesh, &params)
        .with_context(|| format!("failed to repair {}", args.input.display()))?;

    let output = output_path(&args.input, args.output.as_deref(), "_fixed", "diredge");
    save_diredge(&mesh.to_records(), &object_name(&output), &output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let report = validate_mesh(&mesh);
    info!("Repaired mesh: {}", report.to_string().replace('\n', ", "));

    println!(
        "{} {} holes ({} vertices, {} faces added)",
        "filled".green().bold(),
        summary.holes_filled,
        summary.vertices_added,
        summary.faces_added
    );
    if !summary.skipped.is_empty() {
        println!(
            "{} {} holes larger than the limit: {:?} edges",
            "skipped".yellow().bold(),
            summary.skipped.len(),
            summary.skipped
        );
    }
    println!("{} {}", "wrote".green().bold(), output.display());
    Ok(())
}
