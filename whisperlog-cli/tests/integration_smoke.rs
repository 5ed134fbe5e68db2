//! Smoke tests for the CLI surface

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("whisperlog").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Recordings base directory"))
        .stdout(predicate::str::contains("Print matching recordings"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("whisperlog").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("whisperlog"));
}

#[test]
fn test_list_missing_dir_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nope");

    let mut cmd = Command::cargo_bin("whisperlog").unwrap();
    cmd.arg("--list").arg("--recordings-dir").arg(&missing);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Recordings directory not found"));
}

#[test]
fn test_list_prints_filtered_recordings() {
    let tmp = tempfile::tempdir().unwrap();

    let dir = tmp.path().join("1712320496000");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("meta.json"),
        r#"{"rawResult":"hello world","llmResult":"Hello, World!"}"#,
    )
    .unwrap();

    let dir = tmp.path().join("1712320497000");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("meta.json"), r#"{"rawResult":"something else"}"#).unwrap();

    // Unfiltered: both entries, primary text resolved per recording
    let mut cmd = Command::cargo_bin("whisperlog").unwrap();
    cmd.arg("--list").arg("--recordings-dir").arg(tmp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Hello, World!"))
        .stdout(predicate::str::contains("something else"));

    // Filtered: substring match against the raw text, case-insensitive
    let mut cmd = Command::cargo_bin("whisperlog").unwrap();
    cmd.arg("--list")
        .arg("--recordings-dir")
        .arg(tmp.path())
        .arg("--query")
        .arg("WORLD");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Hello, World!"))
        .stdout(predicate::str::contains("something else").not());
}
