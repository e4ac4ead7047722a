//! Integration tests for `wxo config`.
//!
//! Each test gets its own config file via WXO_CONFIG, passed to the
//! spawned binary's environment, so tests stay independent.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wxo(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wxo"));
    cmd.env("NO_COLOR", "1");
    cmd.env("WXO_CONFIG", dir.path().join("config.yaml"));
    cmd
}

#[test]
fn test_config_show_without_file_shows_defaults() {
    let dir = TempDir::new().expect("temp dir");

    wxo(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "api.us-south.watson-orchestrate.cloud.ibm.com",
        ));
}

#[test]
fn test_config_set_then_show_roundtrips() {
    let dir = TempDir::new().expect("temp dir");

    wxo(&dir)
        .args(["config", "set", "service.url", "https://wxo.example.test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("service.url"));

    wxo(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://wxo.example.test"));
}

#[test]
fn test_config_set_instance_roundtrips() {
    let dir = TempDir::new().expect("temp dir");

    wxo(&dir)
        .args(["config", "set", "service.instance", "99a74687"])
        .assert()
        .success();

    wxo(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("99a74687"));
}

#[test]
fn test_config_set_unknown_key_exits_one() {
    let dir = TempDir::new().expect("temp dir");

    wxo(&dir)
        .args(["config", "set", "service.region", "us-south"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown setting"));
}

#[test]
fn test_config_set_invalid_url_exits_one() {
    let dir = TempDir::new().expect("temp dir");

    wxo(&dir)
        .args(["config", "set", "service.url", "not-a-url"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid value"));
}

#[test]
fn test_config_show_json_is_valid_json() {
    let dir = TempDir::new().expect("temp dir");

    let output = wxo(&dir)
        .args(["config", "show", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("config show --json emits valid JSON");
    assert!(value["path"].as_str().expect("path").ends_with("config.yaml"));
}
