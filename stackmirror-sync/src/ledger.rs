//! Hash ledger — the persisted map from logical key to last-seen digest.
//!
//! Keys are either [`ZIP_HASH_KEY`] (the archive revision hash) or a stack
//! filename. Persisted as a flat JSON object, pretty-printed with 2-space
//! indent. Writes use the same `.tmp` + rename pattern as the stack writer.
//!
//! The ledger is loaded once per run, mutated in memory, and saved exactly
//! once — no matter how many files were updated.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{io_err, SyncError};

/// Ledger key under which the archive revision hash is recorded.
pub const ZIP_HASH_KEY: &str = "zip_hash";

/// In-memory ledger: logical key to hex digest.
pub type Ledger = BTreeMap<String, String>;

/// Load the ledger at `path`.
///
/// Returns an empty ledger if the file does not yet exist. A file that
/// exists but fails to parse is a fatal error — there is no
/// corruption-tolerant fallback.
pub fn load(path: &Path) -> Result<Ledger, SyncError> {
    if !path.exists() {
        return Ok(Ledger::new());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save the ledger to `path` atomically.
///
/// Writes pretty JSON to `<path>.tmp` then renames to `<path>`, creating
/// parent directories as needed.
pub fn save(path: &Path, ledger: &Ledger) -> Result<(), SyncError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }

    let json = serde_json::to_string_pretty(ledger)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &json).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| io_err(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_ledger_when_file_missing() {
        let tmp = TempDir::new().unwrap();
        let ledger = load(&tmp.path().join("ledger.json")).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn roundtrip_save_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ledger.json");
        let mut ledger = Ledger::new();
        ledger.insert(ZIP_HASH_KEY.to_string(), "abc123".to_string());
        ledger.insert("docker-stack-web.yml".to_string(), "deadbeef".to_string());

        save(&path, &ledger).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, ledger);
    }

    #[test]
    fn saved_file_is_pretty_printed_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ledger.json");
        let mut ledger = Ledger::new();
        ledger.insert(ZIP_HASH_KEY.to_string(), "abc123".to_string());

        save(&path, &ledger).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("  \"zip_hash\": \"abc123\""));
    }

    #[test]
    fn tmp_file_cleaned_up_after_save() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ledger.json");
        save(&path, &Ledger::new()).unwrap();
        assert!(
            !path.with_extension("json.tmp").exists(),
            "tmp file should be removed after atomic rename"
        );
    }

    #[test]
    fn corrupt_ledger_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ledger.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, SyncError::Json(_)));
    }
}
