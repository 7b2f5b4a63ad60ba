//! # stackmirror-fetch
//!
//! Fail-fast HTTP fetching with a fixed browser-like header profile, and
//! the regex-based revision locator that decides whether the remote archive
//! changed since the last run.

pub mod client;
pub mod error;
pub mod revision;

pub use client::Client;
pub use error::FetchError;
pub use revision::{locate, RevisionCheck, RevisionPointer};
