//! Thin wrapper over the container runtime command line.
//!
//! The runtime is an opaque external command: `<program> pull <image>` and
//! `<program> save --output <tar> <image...>`, judged only by exit status.
//! Stdout/stderr are inherited so pull progress reaches the operator.

use std::path::Path;
use std::process::Command;

use crate::error::ImageError;

/// Handle to the configured container runtime executable.
#[derive(Debug, Clone)]
pub struct ContainerRuntime {
    program: String,
}

impl ContainerRuntime {
    pub fn new(program: impl Into<String>) -> ContainerRuntime {
        ContainerRuntime {
            program: program.into(),
        }
    }

    /// Pull a single image. `Ok(true)` means exit status zero.
    pub fn pull(&self, image: &str) -> Result<bool, ImageError> {
        log::info!("pulling {image}");
        let status = Command::new(&self.program)
            .arg("pull")
            .arg(image)
            .status()
            .map_err(|e| self.spawn_err(e))?;
        Ok(status.success())
    }

    /// Pull every image, aggregating success.
    ///
    /// All images are attempted even after a failure. `Ok(true)` iff every
    /// pull exited zero.
    pub fn pull_all(&self, images: &[String]) -> Result<bool, ImageError> {
        let mut all_ok = true;
        for image in images {
            if !self.pull(image)? {
                log::warn!("pull failed for '{image}'");
                all_ok = false;
            }
        }
        Ok(all_ok)
    }

    /// Export `images` into a single tar archive at `output`.
    pub fn save(&self, output: &Path, images: &[String]) -> Result<bool, ImageError> {
        log::info!("saving {} image(s) to {}", images.len(), output.display());
        let status = Command::new(&self.program)
            .arg("save")
            .arg("--output")
            .arg(output)
            .args(images)
            .status()
            .map_err(|e| self.spawn_err(e))?;
        Ok(status.success())
    }

    fn spawn_err(&self, source: std::io::Error) -> ImageError {
        ImageError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}
