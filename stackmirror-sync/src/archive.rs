//! In-memory ZIP extraction.
//!
//! The downloaded archive is read entirely from a byte buffer, never a
//! temporary file. Entries come out in archive-internal order with their
//! content fully materialized, so memory use is bounded by archive size.

use std::io::{Cursor, Read};
use std::path::PathBuf;

use zip::ZipArchive;

use crate::error::SyncError;

/// One file inside the downloaded archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Full path of the entry within the archive.
    pub name: String,
    pub content: Vec<u8>,
}

/// Finite, single-pass iterator over the files of a ZIP archive.
///
/// Directories are skipped. Not restartable — call [`entries`] again on the
/// same bytes for a fresh pass.
#[derive(Debug)]
pub struct Entries {
    archive: ZipArchive<Cursor<Vec<u8>>>,
    index: usize,
}

/// Open `bytes` as a ZIP archive and iterate its file entries.
pub fn entries(bytes: Vec<u8>) -> Result<Entries, SyncError> {
    Ok(Entries {
        archive: ZipArchive::new(Cursor::new(bytes))?,
        index: 0,
    })
}

impl Iterator for Entries {
    type Item = Result<ArchiveEntry, SyncError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.archive.len() {
            let index = self.index;
            self.index += 1;

            let mut file = match self.archive.by_index(index) {
                Ok(file) => file,
                Err(err) => return Some(Err(err.into())),
            };
            if file.is_dir() {
                continue;
            }

            let name = file.name().to_string();
            let mut content = Vec::with_capacity(file.size() as usize);
            if let Err(err) = file.read_to_end(&mut content) {
                return Some(Err(SyncError::Io {
                    path: PathBuf::from(&name),
                    source: err,
                }));
            }
            return Some(Ok(ArchiveEntry { name, content }));
        }
        None
    }
}
