//! End-to-end tests for the `tasksmith` binary
//!
//! Each test runs the real executable against files in a temporary
//! directory and checks the exit status orchestrators would see.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn tasksmith(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tasksmith").expect("binary should be built");
    cmd.arg("--working-dir").arg(dir.path());
    cmd.env("TASKSMITH_LOG", "info");
    cmd
}

fn project(dir: &TempDir) {
    fs::write(
        dir.path().join("project.json"),
        r#"{"version": "1.0.0.0", "name": "sample"}"#,
    )
    .expect("write fixture");
}

fn read(dir: &TempDir, name: &str) -> Value {
    let content = fs::read_to_string(dir.path().join(name)).expect("read output");
    serde_json::from_str(&content).expect("output is valid JSON")
}

#[test]
fn test_update_json_success() {
    let dir = TempDir::new().unwrap();
    project(&dir);

    tasksmith(&dir)
        .args(["update-json", "project.json", "--set", "version=2.0.0.0"])
        .args(["--output", "project.json.new"])
        .assert()
        .success();

    assert_eq!(
        read(&dir, "project.json.new"),
        json!({"version": "2.0.0.0", "name": "sample"})
    );
    assert_eq!(read(&dir, "project.json")["version"], json!("1.0.0.0"));
}

#[test]
fn test_update_json_missing_file_exits_with_1() {
    let dir = TempDir::new().unwrap();

    tasksmith(&dir)
        .args(["update-json", "nonext.json", "--set", "version=2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON file nonext.json not found!"));
}

#[test]
fn test_update_json_without_updates_exits_with_2() {
    let dir = TempDir::new().unwrap();
    project(&dir);

    tasksmith(&dir)
        .args(["update-json", "project.json"])
        .assert()
        .code(2);
}

#[test]
fn test_update_json_missing_property_exits_with_3() {
    let dir = TempDir::new().unwrap();
    project(&dir);

    tasksmith(&dir)
        .args(["update-json", "project.json", "--set", "notfound=1"])
        .assert()
        .code(3);

    tasksmith(&dir)
        .args(["update-json", "project.json", "--allow-missing"])
        .args(["--set", "notfound=1", "--set", "name=renamed"])
        .assert()
        .code(3);
    assert_eq!(read(&dir, "project.json")["name"], json!("renamed"));
}

#[test]
fn test_update_json_type_mismatch() {
    let dir = TempDir::new().unwrap();
    project(&dir);

    tasksmith(&dir)
        .args(["update-json", "project.json", "--fail-on-type-mismatch"])
        .args(["--set", "version=2", "-o", "strict.json"])
        .assert()
        .code(4);
    assert!(!dir.path().join("strict.json").exists());

    tasksmith(&dir)
        .args(["json", "project.json", "-s", "version=2", "-o", "lenient.json"])
        .assert()
        .success();
    assert_eq!(read(&dir, "lenient.json")["version"], json!(2));
}

#[test]
fn test_update_json_rejects_malformed_assignment() {
    let dir = TempDir::new().unwrap();
    project(&dir);

    tasksmith(&dir)
        .args(["update-json", "project.json", "--set", "version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected PATH=VALUE"));
}

#[cfg(unix)]
#[test]
fn test_dotnet_test_surfaces_process_exit_code() {
    let dir = TempDir::new().unwrap();

    // `false` ignores its arguments and exits with 1
    tasksmith(&dir)
        .args(["dotnet-test", "--no-build", "--dotnet-path", "false"])
        .assert()
        .code(1);
}
