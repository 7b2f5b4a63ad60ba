//! Pipeline configuration.
//!
//! Loaded from `<home>/.stackmirror/config.yaml` when the file exists;
//! every field has a default matching the built-in endpoint profile, so a
//! fresh install needs no config at all. Filesystem paths are derived from
//! the home root via [`crate::paths`] and are not part of the document.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CoreError;
use crate::paths;

/// Operator-tunable settings for a mirror run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL that the revision page and archive paths are joined onto.
    pub gist_url: String,

    /// `<owner>/<gist-id>` path segment identifying the mirrored gist.
    pub repo_path: String,

    /// Substring that marks an archive entry as a stack file.
    pub stack_marker: String,

    /// Container runtime executable driven by the image orchestrator.
    pub runtime: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gist_url: "https://gist.github.com/".to_string(),
            repo_path: "cqr-cryeye/4f0210d3752eb01b8e3e1ec3cc28ec4e".to_string(),
            stack_marker: "docker-stack".to_string(),
            runtime: "docker".to_string(),
        }
    }
}

impl Config {
    /// Load the config rooted at `home`.
    ///
    /// Returns defaults if `<home>/.stackmirror/config.yaml` does not exist.
    /// A malformed file is a [`CoreError::Parse`] with path context — never
    /// silently replaced by defaults.
    pub fn load_at(home: &Path) -> Result<Config, CoreError> {
        let path = paths::config_path(home);
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents =
            std::fs::read_to_string(&path).map_err(|e| crate::error::io_err(&path, e))?;
        serde_yaml::from_str(&contents).map_err(|e| CoreError::Parse { path, source: e })
    }

    /// `load_at` convenience wrapper — uses `dirs::home_dir()`.
    pub fn load() -> Result<Config, CoreError> {
        Config::load_at(&home()?)
    }

    /// URL of the revision page scanned for the current archive pointer.
    pub fn revision_url(&self) -> String {
        format!("{}{}/", self.gist_url, self.repo_path)
    }

    /// URL for an archive path captured from the revision page.
    pub fn archive_url(&self, archive_path: &str) -> String {
        format!("{}{}", self.gist_url, archive_path)
    }

    /// Referer header value sent with every request.
    pub fn referer(&self) -> String {
        format!("{}{}/revisions", self.gist_url, self.repo_path)
    }
}

fn home() -> Result<PathBuf, CoreError> {
    dirs::home_dir().ok_or(CoreError::HomeNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_config_file_missing() {
        let home = TempDir::new().unwrap();
        let config = Config::load_at(home.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.runtime, "docker");
        assert_eq!(config.stack_marker, "docker-stack");
    }

    #[test]
    fn yaml_overrides_are_honored() {
        let home = TempDir::new().unwrap();
        let root = paths::mirror_root(home.path());
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(
            paths::config_path(home.path()),
            "runtime: podman\nstack_marker: compose-stack\n",
        )
        .unwrap();

        let config = Config::load_at(home.path()).unwrap();
        assert_eq!(config.runtime, "podman");
        assert_eq!(config.stack_marker, "compose-stack");
        // Untouched fields keep their defaults.
        assert_eq!(config.gist_url, "https://gist.github.com/");
    }

    #[test]
    fn malformed_config_is_a_parse_error_with_path() {
        let home = TempDir::new().unwrap();
        let root = paths::mirror_root(home.path());
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(paths::config_path(home.path()), "runtime: [unclosed").unwrap();

        let err = Config::load_at(home.path()).unwrap_err();
        match err {
            CoreError::Parse { path, .. } => {
                assert_eq!(path, paths::config_path(home.path()));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn derived_urls_join_onto_gist_base() {
        let config = Config::default();
        assert_eq!(
            config.revision_url(),
            "https://gist.github.com/cqr-cryeye/4f0210d3752eb01b8e3e1ec3cc28ec4e/"
        );
        assert_eq!(
            config.archive_url("owner/id/archive/abc123.zip"),
            "https://gist.github.com/owner/id/archive/abc123.zip"
        );
        assert!(config.referer().ends_with("/revisions"));
    }
}
