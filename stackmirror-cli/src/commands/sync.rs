//! `stackmirror sync` — hash-gated mirror synchronization.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use stackmirror_core::{paths, Config, RunLock};
use stackmirror_sync::{pipeline, PipelineOutcome, WriteResult};

/// Arguments for `stackmirror sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Show what would be written without touching the mirror.
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let home = super::home_dir()?;
        let config = Config::load_at(&home)?;
        let _lock = RunLock::acquire(&paths::lock_path(&home))?;

        let outcome = pipeline::run(&home, &config, self.dry_run).context("sync failed")?;
        print_outcome(&outcome, self.dry_run);
        Ok(())
    }
}

pub(crate) fn print_outcome(outcome: &PipelineOutcome, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    match outcome {
        PipelineOutcome::UpToDate => {
            println!("{prefix}✓ mirror up to date — nothing to do");
        }
        PipelineOutcome::Synced { revision, writes } => {
            let written = writes
                .iter()
                .filter(|w| {
                    matches!(
                        w,
                        WriteResult::Written { .. } | WriteResult::WouldWrite { .. }
                    )
                })
                .count();
            let unchanged = writes.len() - written;
            println!(
                "{prefix}✓ synced revision {} ({written} written, {unchanged} unchanged)",
                revision.hash.bold(),
            );
            for write in writes {
                match write {
                    WriteResult::Written { path } => println!("  ✎  {}", path.display()),
                    WriteResult::WouldWrite { path } => println!("  ~  {}", path.display()),
                    WriteResult::Unchanged { path } => println!("  ·  {}", path.display()),
                }
            }
        }
    }
}
