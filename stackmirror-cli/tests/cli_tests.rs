use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

use stackmirror_core::paths;

fn stackmirror_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stackmirror"));
    cmd.env("HOME", home).env("USERPROFILE", home);
    cmd
}

#[test]
fn status_on_fresh_home_reports_empty_mirror() {
    let home = TempDir::new().expect("home");
    stackmirror_cmd(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(contains("never synced"))
        .stdout(contains("No stacks mirrored yet"));
}

#[test]
fn status_json_reflects_seeded_ledger() {
    let home = TempDir::new().expect("home");
    fs::create_dir_all(paths::mirror_root(home.path())).expect("mirror root");
    fs::write(
        paths::ledger_path(home.path()),
        r#"{
  "docker-stack-web.yml": "0b78e1f28d9ecd4d8d3823e5b2bd502be6e9a842a2c6c2a88c0cd35c",
  "zip_hash": "abc123"
}"#,
    )
    .expect("seed ledger");

    stackmirror_cmd(home.path())
        .args(["status", "--json"])
        .assert()
        .success()
        .stdout(contains("\"revision\": \"abc123\""))
        .stdout(contains("docker-stack-web.yml"))
        .stdout(contains("\"state\": \"missing\""));
}

#[test]
fn status_marks_untracked_files_on_disk() {
    let home = TempDir::new().expect("home");
    let stacks = paths::stacks_dir(home.path());
    fs::create_dir_all(&stacks).expect("stacks dir");
    fs::write(stacks.join("docker-stack-manual.yml"), "services: {}\n").expect("stack");

    stackmirror_cmd(home.path())
        .args(["status", "--json"])
        .assert()
        .success()
        .stdout(contains("docker-stack-manual.yml"))
        .stdout(contains("\"state\": \"untracked\""));
}

#[test]
fn held_lock_blocks_a_second_run() {
    let home = TempDir::new().expect("home");
    let lock = paths::lock_path(home.path());
    fs::create_dir_all(lock.parent().expect("run dir")).expect("mkdir");
    fs::write(&lock, "1\n").expect("seed lock");

    stackmirror_cmd(home.path())
        .args(["sync", "--dry-run"])
        .assert()
        .failure()
        .stderr(contains("another stackmirror instance is running"));
}

#[test]
fn corrupt_ledger_fails_status_with_context() {
    let home = TempDir::new().expect("home");
    fs::create_dir_all(paths::mirror_root(home.path())).expect("mirror root");
    fs::write(paths::ledger_path(home.path()), "{not json").expect("seed ledger");

    stackmirror_cmd(home.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(contains("failed to load ledger"));
}
