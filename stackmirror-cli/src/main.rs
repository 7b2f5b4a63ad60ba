//! stackmirror — mirror remote docker stack definitions and archive their
//! images locally.
//!
//! # Usage
//!
//! ```text
//! stackmirror run [--dry-run] [--skip-images]
//! stackmirror sync [--dry-run]
//! stackmirror images
//! stackmirror status [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{images::ImagesArgs, run::RunArgs, status::StatusArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "stackmirror",
    version,
    about = "Mirror remote docker stack definitions and archive their images",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sync the stack mirror, then pull and archive stack images.
    Run(RunArgs),

    /// Sync the stack mirror from the remote revision feed.
    Sync(SyncArgs),

    /// Pull and archive images for every locally mirrored stack.
    Images(ImagesArgs),

    /// Show ledger and mirror state.
    Status(StatusArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => args.run(),
        Commands::Sync(args) => args.run(),
        Commands::Images(args) => args.run(),
        Commands::Status(args) => args.run(),
    }
}
