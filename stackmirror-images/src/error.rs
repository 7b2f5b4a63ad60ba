//! Error types for stackmirror-images.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from stack parsing and runtime invocation.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Underlying I/O failure, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on a stack file — recoverable per stack.
    #[error("failed to parse stack file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The container runtime binary could not be spawned at all.
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`ImageError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ImageError {
    ImageError::Io {
        path: path.into(),
        source,
    }
}
