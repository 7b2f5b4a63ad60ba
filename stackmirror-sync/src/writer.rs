//! Hash-gated stack file writer.
//!
//! For every archive entry carrying the stack marker:
//!
//! 1. SHA-224 the entry bytes.
//! 2. Derive the stack filename (last path segment of the entry name).
//! 3. Compare with the ledger digest for that filename → skip if identical.
//! 4. Otherwise update the ledger in memory and write the bytes verbatim
//!    to `<stacks-dir>/<filename>` via `.tmp` + rename.
//!
//! The ledger is saved by the caller after all entries are processed.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha224};

use crate::archive::{self, ArchiveEntry};
use crate::error::{io_err, SyncError};
use crate::ledger::Ledger;

/// Outcome of an individual stack file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or was never seen before).
    Written { path: PathBuf },
    /// File was skipped — content matches the ledger digest.
    Unchanged { path: PathBuf },
    /// Dry-run mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

/// Hex-encoded SHA-224 digest of `content`.
pub fn digest(content: &[u8]) -> String {
    let mut hasher = Sha224::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Last `/`-separated segment of an archive entry name.
pub fn stack_file_name(entry_name: &str) -> &str {
    entry_name.rsplit('/').next().unwrap_or(entry_name)
}

/// Write a single archive entry into `stacks_dir`, gated on the ledger.
pub(crate) fn sync_entry(
    entry: &ArchiveEntry,
    stacks_dir: &Path,
    ledger: &mut Ledger,
    dry_run: bool,
) -> Result<WriteResult, SyncError> {
    let name = stack_file_name(&entry.name);
    let path = stacks_dir.join(name);
    let digest = digest(&entry.content);

    if ledger.get(name) == Some(&digest) {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(WriteResult::Unchanged { path });
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite { path });
    }

    std::fs::create_dir_all(stacks_dir).map_err(|e| io_err(stacks_dir, e))?;

    let tmp = PathBuf::from(format!("{}.mirror.tmp", path.display()));
    std::fs::write(&tmp, &entry.content).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, &path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(&path, e));
    }

    ledger.insert(name.to_string(), digest);
    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written { path })
}

/// Extract `bytes` and sync every entry whose name contains `marker`.
///
/// An entry that cannot be read out of the archive is logged and skipped;
/// the remaining entries are still processed.
pub fn sync_archive(
    bytes: Vec<u8>,
    marker: &str,
    stacks_dir: &Path,
    ledger: &mut Ledger,
    dry_run: bool,
) -> Result<Vec<WriteResult>, SyncError> {
    let mut writes = Vec::new();
    for entry in archive::entries(bytes)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping unreadable archive entry: {err}");
                continue;
            }
        };
        if !entry.name.contains(marker) {
            continue;
        }
        writes.push(sync_entry(&entry, stacks_dir, ledger, dry_run)?);
    }
    Ok(writes)
}
