//! CLI integration tests
//!
//! Exercises the sheetroute binary end to end with assert_cmd.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_deliveries_csv(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("deliveries.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "Address,Post Code,Name").unwrap();
    writeln!(file, "12 High St,BA1 1AA,Sam").unwrap();
    writeln!(file, ",BA1 2BB,Alex").unwrap();
    writeln!(file, "14 High St,BA1 1AA,Jo").unwrap();
    path
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheetroute"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheetroute"));
}

// ═══════════════════════════════════════════════════════════════════════════
// MAP COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_map_prints_route_url() {
    let dir = TempDir::new().unwrap();
    let csv = write_deliveries_csv(&dir);

    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("map")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://www.google.com/maps/dir/?api=1",
        ))
        .stdout(predicate::str::contains("travelmode=bicycling"))
        .stdout(predicate::str::contains("12%20High%20St%2C%20BA1%201AA"));
}

#[test]
fn test_map_respects_row_selection() {
    let dir = TempDir::new().unwrap();
    let csv = write_deliveries_csv(&dir);

    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("map")
        .arg(&csv)
        .args(["--rows", "3:3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14%20High%20St"))
        .stdout(predicate::str::contains("12%20High%20St").not());
}

#[test]
fn test_map_custom_origin() {
    let dir = TempDir::new().unwrap();
    let csv = write_deliveries_csv(&dir);

    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("map")
        .arg(&csv)
        .args(["--origin", "Bath Abbey"])
        .assert()
        .success()
        .stdout(predicate::str::contains("origin=Bath%20Abbey"));
}

#[test]
fn test_map_verbose_reports_skipped_rows() {
    let dir = TempDir::new().unwrap();
    let csv = write_deliveries_csv(&dir);

    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("map")
        .arg(&csv)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("missing address"));
}

#[test]
fn test_map_rejects_row_zero() {
    let dir = TempDir::new().unwrap();
    let csv = write_deliveries_csv(&dir);

    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("map")
        .arg(&csv)
        .args(["--rows", "0:2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("row numbers start at 1"));
}

#[test]
fn test_map_nonexistent_file_fails() {
    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("map").arg("nonexistent.csv").assert().failure();
}

#[test]
fn test_map_unsupported_extension_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deliveries.pdf");
    std::fs::write(&path, "not a sheet").unwrap();

    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("map")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file type"));
}

// ═══════════════════════════════════════════════════════════════════════════
// LIST COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_list_shows_entries() {
    let dir = TempDir::new().unwrap();
    let csv = write_deliveries_csv(&dir);

    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("list")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("12 High St, BA1 1AA"))
        .stdout(predicate::str::contains("name: Sam"));
}

#[test]
fn test_list_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    let csv = write_deliveries_csv(&dir);

    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    let output = cmd.arg("list").arg(&csv).arg("--json").output().unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["address"], "12 High St");
    assert_eq!(entries[0]["postCode"], "BA1 1AA");
    assert_eq!(entries[1]["name"], "Jo");
}

#[test]
fn test_list_empty_selection() {
    let dir = TempDir::new().unwrap();
    let csv = write_deliveries_csv(&dir);

    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("list")
        .arg(&csv)
        .args(["--rows", "5:2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries"));
}

// ═══════════════════════════════════════════════════════════════════════════
// INSTRUCTIONS COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_instructions_to_stdout() {
    let dir = TempDir::new().unwrap();
    let csv = write_deliveries_csv(&dir);

    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("instructions")
        .arg(&csv)
        .args(["--message", "Ring the bell"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("Ring the bell"))
        .stdout(predicate::str::contains("12 High St, BA1 1AA"));
}

#[test]
fn test_instructions_stdout_verbose_goes_to_stderr() {
    // Diagnostics must not contaminate the piped document
    let dir = TempDir::new().unwrap();
    let csv = write_deliveries_csv(&dir);

    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("instructions")
        .arg(&csv)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("missing address").not())
        .stderr(predicate::str::contains("missing address"));
}

#[test]
fn test_instructions_to_file() {
    let dir = TempDir::new().unwrap();
    let csv = write_deliveries_csv(&dir);
    let out = dir.path().join("run.html");

    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("instructions")
        .arg(&csv)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("<title>Instructions</title>"));
    assert!(html.contains("14 High St, BA1 1AA"));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEND COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_send_queues_eml_in_outbox() {
    let dir = TempDir::new().unwrap();
    let csv = write_deliveries_csv(&dir);
    let outbox = dir.path().join("outbox");

    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("send")
        .arg(&csv)
        .args(["--to", "driver@example.org", "--subject", "Tuesday run"])
        .arg("--outbox")
        .arg(&outbox)
        .assert()
        .success()
        .stdout(predicate::str::contains("Queued"));

    let queued: Vec<_> = std::fs::read_dir(&outbox).unwrap().collect();
    assert_eq!(queued.len(), 1);
    let contents = std::fs::read_to_string(queued[0].as_ref().unwrap().path()).unwrap();
    assert!(contents.contains("To: driver@example.org"));
    assert!(contents.contains("Subject: Tuesday run"));
    assert!(contents.contains("12 High St, BA1 1AA"));
}

#[test]
fn test_send_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let csv = write_deliveries_csv(&dir);
    let outbox = dir.path().join("outbox");

    let mut cmd = Command::cargo_bin("sheetroute").unwrap();
    cmd.arg("send")
        .arg(&csv)
        .args(["--to", "driver@example.org", "--subject", "Tuesday run"])
        .arg("--outbox")
        .arg(&outbox)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"));

    assert!(!outbox.exists());
}
