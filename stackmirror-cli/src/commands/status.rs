//! `stackmirror status` — ledger and mirror visibility.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use stackmirror_core::paths;
use stackmirror_sync::ledger::{self, ZIP_HASH_KEY};

/// Arguments for `stackmirror status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize)]
struct StackStatus {
    name: String,
    digest: Option<String>,
    state: &'static str,
}

#[derive(Serialize)]
struct StatusJson {
    revision: Option<String>,
    stacks: Vec<StackStatus>,
}

#[derive(Tabled)]
struct StatusTableRow {
    #[tabled(rename = "stack")]
    stack: String,
    #[tabled(rename = "digest")]
    digest: String,
    #[tabled(rename = "state")]
    state: String,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let home = super::home_dir()?;
        let ledger = ledger::load(&paths::ledger_path(&home))
            .context("failed to load ledger — remove it to start fresh")?;
        let revision = ledger.get(ZIP_HASH_KEY).cloned();

        // Files on disk that the ledger does not know about show up as
        // untracked; ledger entries without a file show up as missing.
        let stacks_dir = paths::stacks_dir(&home);
        let mut on_disk = BTreeSet::new();
        if stacks_dir.exists() {
            for entry in
                std::fs::read_dir(&stacks_dir).context("failed to read stacks directory")?
            {
                let entry = entry.context("failed to read stacks directory entry")?;
                if entry.path().is_file() {
                    on_disk.insert(entry.file_name().to_string_lossy().into_owned());
                }
            }
        }

        let mut rows = Vec::new();
        for (key, digest) in &ledger {
            if key == ZIP_HASH_KEY {
                continue;
            }
            let state = if on_disk.remove(key) {
                "present"
            } else {
                "missing"
            };
            rows.push(StackStatus {
                name: key.clone(),
                digest: Some(digest.clone()),
                state,
            });
        }
        for name in on_disk {
            rows.push(StackStatus {
                name,
                digest: None,
                state: "untracked",
            });
        }

        if self.json {
            let payload = StatusJson {
                revision,
                stacks: rows,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload)
                    .context("failed to serialize status JSON")?
            );
            return Ok(());
        }

        println!(
            "stackmirror v{} | revision {} | {} stack(s) tracked",
            env!("CARGO_PKG_VERSION"),
            revision.as_deref().unwrap_or("never synced"),
            rows.iter().filter(|row| row.digest.is_some()).count(),
        );
        if rows.is_empty() {
            println!("No stacks mirrored yet. Run `stackmirror sync` first.");
            return Ok(());
        }

        let table_rows: Vec<StatusTableRow> = rows
            .into_iter()
            .map(|row| StatusTableRow {
                stack: row.name,
                digest: row
                    .digest
                    .map(|digest| short_digest(&digest))
                    .unwrap_or_else(|| "-".to_string()),
                state: state_label(row.state),
            })
            .collect();
        let mut table = Table::new(table_rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}

fn short_digest(digest: &str) -> String {
    digest.chars().take(12).collect()
}

fn state_label(state: &str) -> String {
    match state {
        "present" => "present".green().to_string(),
        "missing" => "missing".red().to_string(),
        _ => "untracked".yellow().to_string(),
    }
}
