//! End-to-end sync pipeline: revision check → conditional download →
//! extract → hash-gated writes → single ledger save.
//!
//! This is the canonical entrypoint for `stackmirror run` and
//! `stackmirror sync`. The image orchestration phase lives in
//! `stackmirror-images` and is composed by the CLI, since it operates on
//! the full local stack set rather than this run's delta.

use std::path::Path;

use stackmirror_core::{paths, Config};
use stackmirror_fetch::{locate, Client, FetchError, RevisionCheck, RevisionPointer};

use crate::ledger::{self, ZIP_HASH_KEY};
use crate::writer::{self, WriteResult};
use crate::SyncError;

/// Source of remote bytes. Implemented by the HTTP [`Client`]; tests
/// substitute an in-memory fake.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl Fetch for Client {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        Client::get(self, url)
    }
}

/// Outcome of a pipeline run.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// The remote revision hash matches the ledger — nothing downloaded,
    /// nothing written, ledger untouched on disk.
    UpToDate,
    /// A new revision was synced.
    Synced {
        revision: RevisionPointer,
        writes: Vec<WriteResult>,
    },
}

/// Run the sync pipeline rooted at `home` using a fresh HTTP client.
pub fn run(home: &Path, config: &Config, dry_run: bool) -> Result<PipelineOutcome, SyncError> {
    let client = Client::new(config.referer());
    run_with(&client, home, config, dry_run)
}

/// Run the sync pipeline with an explicit fetcher.
pub fn run_with(
    fetcher: &impl Fetch,
    home: &Path,
    config: &Config,
    dry_run: bool,
) -> Result<PipelineOutcome, SyncError> {
    let ledger_path = paths::ledger_path(home);
    let mut ledger = ledger::load(&ledger_path)?;

    let page = fetcher.get(&config.revision_url())?;
    let page = String::from_utf8_lossy(&page);
    let known_hash = ledger.get(ZIP_HASH_KEY).cloned().unwrap_or_default();

    let pointer = match locate(&page, &config.repo_path, &known_hash)? {
        RevisionCheck::Unchanged => {
            tracing::info!("revision {known_hash} unchanged; nothing to sync");
            return Ok(PipelineOutcome::UpToDate);
        }
        RevisionCheck::Updated(pointer) => pointer,
    };
    tracing::info!("new revision {}", pointer.hash);
    ledger.insert(ZIP_HASH_KEY.to_string(), pointer.hash.clone());

    let archive_bytes = fetcher.get(&config.archive_url(&pointer.archive_path))?;

    // A mid-archive failure does not discard the ledger: whatever synced
    // before the failure is still recorded and saved below.
    let stacks_dir = paths::stacks_dir(home);
    let writes = match writer::sync_archive(
        archive_bytes,
        &config.stack_marker,
        &stacks_dir,
        &mut ledger,
        dry_run,
    ) {
        Ok(writes) => writes,
        Err(err) => {
            tracing::error!("stack sync failed: {err}");
            Vec::new()
        }
    };

    if !dry_run {
        ledger::save(&ledger_path, &ledger)?;
    }

    Ok(PipelineOutcome::Synced {
        revision: pointer,
        writes,
    })
}
