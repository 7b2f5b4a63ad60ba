//! `stackmirror images` — pull and archive images for every mirrored stack.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use stackmirror_core::{paths, Config, RunLock};
use stackmirror_images::{archive_stacks, ContainerRuntime, StackOutcome, StackReport};

/// Arguments for `stackmirror images`.
#[derive(Args, Debug)]
pub struct ImagesArgs {}

impl ImagesArgs {
    pub fn run(self) -> Result<()> {
        let home = super::home_dir()?;
        let config = Config::load_at(&home)?;
        let _lock = RunLock::acquire(&paths::lock_path(&home))?;

        let runtime = ContainerRuntime::new(config.runtime.clone());
        let reports = archive_stacks(&paths::stacks_dir(&home), &paths::tars_dir(&home), &runtime)
            .context("image orchestration failed")?;
        print_reports(&reports);
        Ok(())
    }
}

pub(crate) fn print_reports(reports: &[StackReport]) {
    if reports.is_empty() {
        println!("No stacks mirrored yet. Run `stackmirror sync` first.");
        return;
    }
    for report in reports {
        match &report.outcome {
            StackOutcome::Saved { tar } => {
                println!("  {} {} → {}", "✓".green(), report.stack, tar.display());
            }
            StackOutcome::SaveFailed { tar } => {
                println!(
                    "  {} {} — save failed ({})",
                    "✗".red(),
                    report.stack,
                    tar.display()
                );
            }
            StackOutcome::PullFailed => {
                println!("  {} {} — pull failed, save skipped", "✗".red(), report.stack);
            }
            StackOutcome::NoImages => {
                println!(
                    "  {} {} — no images declared",
                    "·".bright_black(),
                    report.stack
                );
            }
            StackOutcome::Skipped { reason } => {
                println!("  {} {} — skipped: {reason}", "!".yellow(), report.stack);
            }
        }
    }
}
