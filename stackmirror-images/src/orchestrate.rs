//! Image orchestration over the full local stack directory.
//!
//! Every stack currently on disk is processed, not just the ones updated
//! this run — the orchestrator converges the archived image set with the
//! whole local state. A stack that fails to parse or pull is reported and
//! skipped; the loop always continues to the next stack.

use std::path::{Path, PathBuf};

use crate::error::{io_err, ImageError};
use crate::runtime::ContainerRuntime;
use crate::stack;

/// What happened to a single stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackOutcome {
    /// All pulls succeeded and the image set was exported.
    Saved { tar: PathBuf },
    /// All pulls succeeded but the save command exited non-zero.
    SaveFailed { tar: PathBuf },
    /// At least one pull exited non-zero; save was suppressed.
    PullFailed,
    /// The stack declares no images.
    NoImages,
    /// The stack file could not be parsed.
    Skipped { reason: String },
}

/// Per-stack orchestration report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackReport {
    pub stack: String,
    pub images: Vec<String>,
    pub outcome: StackOutcome,
}

/// Pull and archive the images of every stack file in `stacks_dir`.
///
/// Tar artifacts land in `tars_dir`, named `<stack-file-name>.tar`. Only a
/// runtime spawn failure (binary missing) aborts the whole orchestrator;
/// per-stack failures are reported in the returned list.
pub fn archive_stacks(
    stacks_dir: &Path,
    tars_dir: &Path,
    runtime: &ContainerRuntime,
) -> Result<Vec<StackReport>, ImageError> {
    if !stacks_dir.exists() {
        return Ok(Vec::new());
    }

    let mut stack_paths: Vec<PathBuf> = std::fs::read_dir(stacks_dir)
        .map_err(|e| io_err(stacks_dir, e))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    stack_paths.sort();

    let mut reports = Vec::new();
    for path in stack_paths {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        let images = match stack::stack_images(&path) {
            Ok(images) => images,
            Err(err) => {
                log::warn!("skipping '{}': {err}", path.display());
                reports.push(StackReport {
                    stack: name,
                    images: Vec::new(),
                    outcome: StackOutcome::Skipped {
                        reason: err.to_string(),
                    },
                });
                continue;
            }
        };

        if images.is_empty() {
            reports.push(StackReport {
                stack: name,
                images,
                outcome: StackOutcome::NoImages,
            });
            continue;
        }

        if !runtime.pull_all(&images)? {
            reports.push(StackReport {
                stack: name,
                images,
                outcome: StackOutcome::PullFailed,
            });
            continue;
        }

        std::fs::create_dir_all(tars_dir).map_err(|e| io_err(tars_dir, e))?;
        let tar = tars_dir.join(format!("{name}.tar"));
        let outcome = if runtime.save(&tar, &images)? {
            StackOutcome::Saved { tar }
        } else {
            StackOutcome::SaveFailed { tar }
        };
        reports.push(StackReport {
            stack: name,
            images,
            outcome,
        });
    }

    Ok(reports)
}
