//! launchplist — build validated launchd property lists from job files.
//!
//! # Usage
//!
//! ```text
//! launchplist build <job.yaml> [--base existing.plist] [--output PATH | --agent]
//! launchplist check <job.yaml> [--json]
//! launchplist keys
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{build::BuildArgs, check::CheckArgs, keys::KeysArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "launchplist",
    version,
    about = "Build validated launchd property lists from YAML or JSON job files",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a job file as an XML plist, to stdout or to disk.
    Build(BuildArgs),

    /// Validate a job file without writing anything.
    Check(CheckArgs),

    /// List the keys a job file may contain.
    Keys(KeysArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Build(args) => args.run(),
        Commands::Check(args) => args.run(),
        Commands::Keys(args) => args.run(),
    }
}

/// Log to stderr so `build` output on stdout stays a clean plist.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
