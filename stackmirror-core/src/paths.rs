//! Filesystem layout under `<home>/.stackmirror/`.
//!
//! ```text
//! ~/.stackmirror/
//!   config.yaml           (optional operator overrides)
//!   ledger.json           (content-hash ledger)
//!   stacks/               (mirrored stack files)
//!   tars/                 (saved image archives)
//!   run/stackmirror.pid   (single-instance lock marker)
//! ```
//!
//! Every helper takes the home root explicitly so tests can point at a
//! `TempDir` instead of the real home directory.

use std::path::{Path, PathBuf};

pub const LEDGER_FILE: &str = "ledger.json";
pub const CONFIG_FILE: &str = "config.yaml";
pub const LOCK_FILE: &str = "stackmirror.pid";

pub fn mirror_root(home: &Path) -> PathBuf {
    home.join(".stackmirror")
}

pub fn stacks_dir(home: &Path) -> PathBuf {
    mirror_root(home).join("stacks")
}

pub fn tars_dir(home: &Path) -> PathBuf {
    mirror_root(home).join("tars")
}

pub fn run_dir(home: &Path) -> PathBuf {
    mirror_root(home).join("run")
}

pub fn ledger_path(home: &Path) -> PathBuf {
    mirror_root(home).join(LEDGER_FILE)
}

pub fn config_path(home: &Path) -> PathBuf {
    mirror_root(home).join(CONFIG_FILE)
}

pub fn lock_path(home: &Path) -> PathBuf {
    run_dir(home).join(LOCK_FILE)
}
