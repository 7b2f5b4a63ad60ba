//! Error types for stackmirror-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from configuration and lock handling.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Underlying I/O failure, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on config load — includes file path and line context
    /// from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.stackmirror/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// The run-lock marker already exists — another instance is running (or
    /// a previous run was killed before releasing the lock).
    #[error("another stackmirror instance is running (lock held at {path})")]
    AlreadyRunning { path: PathBuf },
}

/// Convenience constructor for [`CoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> CoreError {
    CoreError::Io {
        path: path.into(),
        source,
    }
}
