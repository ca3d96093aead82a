//! Workspace checks for the injury crates.
//!
//! # Commands
//!
//! - `cargo xtask check` - Run every check and report the results
//! - `cargo xtask check --ci` - Same, but exit non-zero on any failure
//! - `cargo xtask ci` - The full CI sequence, step by step
//!
//! Checks: formatting, clippy with warnings denied, tests and docs with all
//! features, and a scan for `unwrap`/`expect` in library code.

mod check;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Workspace checks for the injury crates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks across the workspace
    Check {
        /// Fail with a non-zero exit code if any check fails
        #[arg(long)]
        ci: bool,
    },

    /// Run the full CI sequence
    Ci,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { ci } => check::run(ci),
        Commands::Ci => check::run_ci(),
    }
}
