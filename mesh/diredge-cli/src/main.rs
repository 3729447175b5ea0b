//! `diredge`: triangle soup to repaired directed-edge mesh.
//!
//! # Commands
//!
//! - `diredge index <file.tri>` - weld a soup into an indexed `.face` mesh
//! - `diredge build <file.face>` - derive twins and write a `.diredge` mesh
//! - `diredge check <dir-or-file>` - manifold test every `.diredge` file
//! - `diredge repair <file.diredge>` - fill holes, write `<stem>_fixed.diredge`

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Directed-edge mesh toolchain
#[derive(Parser)]
#[command(name = "diredge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build, validate and repair directed-edge triangle meshes", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a .tri triangle soup to an indexed .face mesh
    Index(commands::index::IndexArgs),
    /// Build a .diredge mesh from a .face (or .tri) mesh
    Build(commands::build::BuildArgs),
    /// Run the manifold test on a directory or a single .diredge file
    Check(commands::check::CheckArgs),
    /// Fill the holes of a .diredge mesh
    Repair(commands::repair::RepairArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Index(args) => commands::index::execute(&args),
        Commands::Build(args) => commands::build::execute(&args),
        Commands::Check(args) => commands::check::execute(&args),
        Commands::Repair(args) => commands::repair::execute(&args),
    }
}
