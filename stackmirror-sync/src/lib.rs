//! # stackmirror-sync
//!
//! Hash-gated mirror synchronization.
//!
//! Call [`pipeline::run`] to poll the remote revision page, download the
//! stack archive when (and only when) its content hash changed, and write
//! the stack files whose content actually differs from the last synced
//! state. The ledger in `<home>/.stackmirror/ledger.json` is the single
//! source of truth for "have we seen this content before".

pub mod archive;
pub mod error;
pub mod ledger;
pub mod pipeline;
pub mod writer;

pub use error::SyncError;
pub use pipeline::{run, PipelineOutcome};
pub use writer::WriteResult;
