//! Revision discovery over the remote revision page.
//!
//! The page embeds the current archive path as
//! `<repo-path>/archive/<hash>.zip`; the hash doubles as the content
//! identifier of the published bundle. Comparing it against the last hash
//! recorded in the ledger is the core short-circuit that avoids downloading
//! an unchanged archive.

use regex::Regex;

use crate::error::FetchError;

/// The current remote archive: its URL path and embedded content hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionPointer {
    pub archive_path: String,
    pub hash: String,
}

/// Outcome of comparing the located revision against the last-seen hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionCheck {
    /// The published hash equals the one already in the ledger — the caller
    /// must not download the archive.
    Unchanged,
    /// A new revision was published.
    Updated(RevisionPointer),
}

/// Scan `page` for the archive pointer of `repo_path`.
///
/// Returns [`FetchError::RevisionNotFound`] when the pattern matches
/// nothing — a page-format change upstream is fatal, not a silent
/// "no update".
pub fn locate(page: &str, repo_path: &str, known_hash: &str) -> Result<RevisionCheck, FetchError> {
    let pattern = Regex::new(&format!(
        r"{}/archive/(?P<hash>[\w]+)\.zip",
        regex::escape(repo_path)
    ))?;

    let Some(captures) = pattern.captures(page) else {
        return Err(FetchError::RevisionNotFound);
    };

    let hash = captures["hash"].to_string();
    if hash == known_hash {
        log::debug!("revision {hash} unchanged");
        return Ok(RevisionCheck::Unchanged);
    }

    Ok(RevisionCheck::Updated(RevisionPointer {
        archive_path: captures[0].to_string(),
        hash,
    }))
}
