//! CLI command definitions for the `fishstalker` binary.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Watch the stocking report and text you when it changes.
#[derive(Parser)]
#[command(name = "fishstalker", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one fetch-compare-notify cycle.
    Run,

    /// Check that the required environment configuration is present.
    Check,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
