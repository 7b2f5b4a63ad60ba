//! Error types for stackmirror-sync.

use std::path::PathBuf;

use thiserror::Error;

use stackmirror_fetch::FetchError;

/// All errors that can arise from sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A fetch-stage error (transport, bad status, revision miss).
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error (ledger file).
    #[error("ledger JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The downloaded archive could not be read.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
