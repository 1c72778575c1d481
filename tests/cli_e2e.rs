//! End-to-end CLI tests for the litwatch binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    let mut cmd = Command::cargo_bin("litwatch").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Watch a literature folder"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    let mut cmd = Command::cargo_bin("litwatch").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("litwatch"));
}

/// Test that a missing positional directory causes non-zero exit.
#[test]
fn test_binary_without_source_dir_returns_error() {
    let mut cmd = Command::cargo_bin("litwatch").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test that a nonexistent watch root exits non-zero with a message.
#[test]
fn test_binary_invalid_root_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let mut cmd = Command::cargo_bin("litwatch").unwrap();
    cmd.arg(&missing)
        .arg("--once")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist or is not a directory"));
}

/// Test that a file passed as the watch root is rejected like a missing one.
#[test]
fn test_binary_file_as_root_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("not-a-dir.txt");
    fs::write(&file, "x").unwrap();

    let mut cmd = Command::cargo_bin("litwatch").unwrap();
    cmd.arg(&file).arg("--once").assert().failure();
}

/// Test that --once scans, writes the artifact, and exits 0.
#[test]
fn test_binary_once_mode_writes_artifact_and_exits() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("2024_Smith_Transformer Survey.pdf"),
        b"%PDF-1.4",
    )
    .unwrap();
    fs::write(dir.path().join("notes.md"), "关键词：A, B\n").unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("nested").join("table.html");

    let mut cmd = Command::cargo_bin("litwatch").unwrap();
    cmd.arg(dir.path())
        .arg("--once")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("文献动态表格"));
    assert!(html.contains("Transformer Survey"));
    assert!(html.contains("A, B"));
}

/// Test that --once on an empty folder still publishes an empty table.
#[test]
fn test_binary_once_mode_empty_folder_publishes_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("table.html");

    let mut cmd = Command::cargo_bin("litwatch").unwrap();
    cmd.arg(dir.path())
        .arg("--once")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(output.exists());
}

/// Test that -q suppresses the per-iteration progress lines.
#[test]
fn test_binary_quiet_flag_suppresses_progress() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("litwatch").unwrap();
    cmd.arg(dir.path())
        .arg("--once")
        .arg("-q")
        .arg("--output")
        .arg(out_dir.path().join("t.html"))
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("table updated").not());
}
