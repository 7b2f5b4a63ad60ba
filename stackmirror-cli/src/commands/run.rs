//! `stackmirror run` — full pipeline: sync the mirror, then pull and
//! archive images for every locally stored stack.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;

use stackmirror_core::{paths, Config, RunLock};
use stackmirror_images::{archive_stacks, ContainerRuntime};
use stackmirror_sync::pipeline;

/// Arguments for `stackmirror run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Show what sync would write without touching the mirror.
    /// Implies --skip-images.
    #[arg(long)]
    pub dry_run: bool,

    /// Stop after the sync phase.
    #[arg(long)]
    pub skip_images: bool,
}

impl RunArgs {
    pub fn run(self) -> Result<()> {
        let started = Instant::now();
        let home = super::home_dir()?;
        let config = Config::load_at(&home)?;
        let _lock = RunLock::acquire(&paths::lock_path(&home))?;

        let outcome = pipeline::run(&home, &config, self.dry_run).context("sync failed")?;
        super::sync::print_outcome(&outcome, self.dry_run);

        // The image phase covers every stack on disk, not just this run's
        // delta, so it runs even when the revision was up to date.
        if self.skip_images || self.dry_run {
            println!("Image phase skipped.");
        } else {
            let runtime = ContainerRuntime::new(config.runtime.clone());
            let reports =
                archive_stacks(&paths::stacks_dir(&home), &paths::tars_dir(&home), &runtime)
                    .context("image orchestration failed")?;
            super::images::print_reports(&reports);
        }

        println!("Completed in {}ms.", started.elapsed().as_millis());
        Ok(())
    }
}
