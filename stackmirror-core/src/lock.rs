//! Single-instance run lock.
//!
//! A marker file under `<home>/.stackmirror/run/`. Acquiring fails when the
//! marker already exists; the marker is removed when the guard drops on a
//! clean exit. A marker left behind by a killed process is not recovered
//! automatically — the operator removes the file by hand.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{io_err, CoreError};

/// Guard holding the run-lock marker file for the lifetime of a run.
#[derive(Debug)]
pub struct RunLock {
    path: PathBuf,
}

impl RunLock {
    /// Acquire the lock at `path`, creating parent directories as needed.
    ///
    /// The marker records the acquiring PID. Returns
    /// [`CoreError::AlreadyRunning`] if the marker is already present.
    pub fn acquire(path: &Path) -> Result<RunLock, CoreError> {
        if path.exists() {
            return Err(CoreError::AlreadyRunning {
                path: path.to_path_buf(),
            });
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
        fs::write(path, format!("{}\n", std::process::id())).map_err(|e| io_err(path, e))?;
        log::debug!("acquired run lock at {}", path.display());
        Ok(RunLock {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            log::warn!(
                "failed to remove run lock {}: {err}",
                self.path.display()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn acquire_writes_pid_marker() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("run").join("stackmirror.pid");
        let lock = RunLock::acquire(&path).unwrap();
        assert!(path.exists());
        let contents = fs::read_to_string(lock.path()).unwrap();
        assert_eq!(contents.trim(), std::process::id().to_string());
    }

    #[test]
    fn second_acquire_fails_while_held() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("stackmirror.pid");
        let _lock = RunLock::acquire(&path).unwrap();
        let err = RunLock::acquire(&path).unwrap_err();
        assert!(matches!(err, CoreError::AlreadyRunning { .. }));
    }

    #[test]
    fn drop_releases_and_allows_reacquire() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("stackmirror.pid");
        {
            let _lock = RunLock::acquire(&path).unwrap();
            assert!(path.exists());
        }
        assert!(!path.exists(), "marker should be removed on drop");
        let _again = RunLock::acquire(&path).unwrap();
    }
}
