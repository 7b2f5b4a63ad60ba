//! Error types for stackmirror-fetch.

use thiserror::Error;

/// All errors that can arise from fetching and revision discovery.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, connection reset, ...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// The server answered with a status other than 200.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    /// The response body could not be read to completion.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// The revision pattern matched nothing — the upstream page format
    /// changed or the gist is gone. Fatal and clearly reported, never
    /// treated as "no update".
    #[error("no archive revision found on the revision page")]
    RevisionNotFound,

    /// The configured repo path produced an invalid pattern.
    #[error("invalid revision pattern: {0}")]
    Pattern(#[from] regex::Error),
}
