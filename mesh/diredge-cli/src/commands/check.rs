//! `diredge check`: batch manifold test.
//!
//! Every `.diredge` file gets one block in the results file:
//!
//! ```text
//! --------------------------
//! File: cube
//! Manifold: YES
//! Genus: 0
//! ```
//!
//! A file that cannot be read or linked gets an `Error:` line instead and
//! the batch moves on.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use diredge_io::{load_diredge, object_name, MeshFormat};
use diredge_topology::{validate_records_with_options, ManifoldReport, ValidationOptions};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, warn};

const SEPARATOR: &str = "--------------------------";

/// Results file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Plain text blocks
    #[default]
    Text,
    /// JSON array, one object per file
    Json,
}

/// Arguments for `diredge check`.
#[derive(Args)]
pub struct CheckArgs {
    /// Directory of .diredge files, or a single .diredge file
    pub input: PathBuf,

    /// Results file
    #[arg(short, long, default_value = "manifold_results.txt")]
    pub output: PathBuf,

    /// Results file format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Skip the genus computation
    #[arg(long)]
    pub no_genus: bool,
}

/// What checking one file produced.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The file was validated.
    Report(ManifoldReport),
    /// The file could not be read or linked.
    Error(String),
}

/// One line of the batch.
#[derive(Debug, Serialize)]
pub struct FileEntry {
    /// Object name of the file.
    pub file: String,
    /// What happened.
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Validate every input and write the results file.
pub fn execute(args: &CheckArgs) -> Result<()> {
    let inputs = collect_inputs(&args.input)?;
    let options = ValidationOptions::default().with_compute_genus(!args.no_genus);

    let entries: Vec<FileEntry> = inputs.iter().map(|p| check_file(p, &options)).collect();

    let text = match args.format {
        ReportFormat::Text => render_text(&entries),
        ReportFormat::Json => serde_json::to_string_pretty(&entries)?,
    };
    std::fs::write(&args.output, text)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    print_summary(&entries);
    println!("Results written to {}", args.output.display());
    Ok(())
}

/// The `.diredge` files to check, sorted by path.
///
/// Other files in a directory are skipped with a warning.
pub fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.is_dir() {
        if MeshFormat::from_path(input) != Some(MeshFormat::Diredge) {
            bail!("{} is not a .diredge file", input.display());
        }
        return Ok(vec![input.to_path_buf()]);
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(input)
        .with_context(|| format!("failed to list {}", input.display()))?
    {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if MeshFormat::from_path(&path) == Some(MeshFormat::Diredge) {
            paths.push(path);
        } else {
            warn!("Skipping {}: not a .diredge file", path.display());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Read, link and validate one file.
pub fn check_file(path: &Path, options: &ValidationOptions) -> FileEntry {
    let file = object_name(path);
    debug!("Checking {}", path.display());

    let outcome = match load_diredge(path) {
        Ok(records) => match validate_records_with_options(&records, options) {
            Ok(report) => Outcome::Report(report),
            Err(e) => Outcome::Error(e.to_string()),
        },
        Err(e) => Outcome::Error(e.to_string()),
    };

    if let Outcome::Error(message) = &outcome {
        warn!("{}: {}", path.display(), message);
    }
    FileEntry { file, outcome }
}

/// Render entries in the block format, closed by a final separator.
pub fn render_text(entries: &[FileEntry]) -> String {
    let mut text: String = entries
        .iter()
        .map(|entry| {
            let body = match &entry.outcome {
                Outcome::Report(report) => report.to_string(),
                Outcome::Error(message) => format!("Error: {message}"),
            };
            format!("{SEPARATOR}\nFile: {}\n{body}\n", entry.file)
        })
        .collect();
    text.push_str(SEPARATOR);
    text.push('\n');
    text
}

fn print_summary(entries: &[FileEntry]) {
    let (mut manifold, mut not_manifold, mut errors) = (0, 0, 0);

    for entry in entries {
        match &entry.outcome {
            Outcome::Report(report) if report.is_manifold() => {
                manifold += 1;
                let genus = report
                    .genus
                    .map_or_else(String::new, |g| format!(" (genus {g})"));
                println!("  {} {}{}", "✓".green(), entry.file, genus);
            }
            Outcome::Report(report) => {
                not_manifold += 1;
                if let Some(failure) = report.failure {
                    println!("  {} {}: {}", "✗".red(), entry.file, failure);
                }
            }
            Outcome::Error(message) => {
                errors += 1;
                println!("  {} {}: {}", "!".yellow().bold(), entry.file, message);
            }
        }
    }

    println!(
        "{} manifold, {} not manifold, {} errors",
        manifold.to_string().green().bold(),
        not_manifold.to_string().red().bold(),
        errors.to_string().yellow().bold()
    );
}
