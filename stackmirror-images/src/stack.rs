//! Stack file parsing.
//!
//! A stack file is a compose-style YAML document mapping service names to
//! service definitions. Only the `image` field matters here; everything
//! else in a service definition is ignored.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{io_err, ImageError};

/// A parsed stack document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StackDefinition {
    #[serde(default)]
    pub services: BTreeMap<String, Service>,
}

/// A single service within a stack. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub image: Option<String>,
}

/// Load and parse the stack file at `path`.
pub fn load_stack(path: &Path) -> Result<StackDefinition, ImageError> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    serde_yaml::from_str(&contents).map_err(|e| ImageError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Image references declared by the stack at `path`.
///
/// Services without an `image` field are skipped, never null-appended.
pub fn stack_images(path: &Path) -> Result<Vec<String>, ImageError> {
    let stack = load_stack(path)?;
    Ok(stack
        .services
        .into_values()
        .filter_map(|service| service.image)
        .collect())
}
