//! Integration tests for `wxo import` failure paths.
//!
//! Only paths that never leave the local machine are exercised here: the
//! credential and document guards fire before any request is built, and
//! the unreachable-identity test points WXO_IAM_URL at a closed local
//! port.

#![allow(clippy::expect_used)]

use std::io::Write as _;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with a hermetic environment: no ambient credentials, no user
/// config file.
fn wxo(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wxo"));
    cmd.env("NO_COLOR", "1");
    cmd.env("WXO_CONFIG", dir.path().join("config.yaml"));
    cmd.env_remove("WXO_API_KEY");
    cmd.env_remove("WXO_SERVICE_URL");
    cmd.env_remove("WXO_INSTANCE_ID");
    cmd.env_remove("WXO_IAM_URL");
    cmd
}

fn write_agent_yaml(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("agent.yaml");
    let mut file = std::fs::File::create(&path).expect("create agent.yaml");
    writeln!(file, "name: numeri-financial-agent").expect("write");
    writeln!(file, "kind: native").expect("write");
    path
}

#[test]
fn test_import_without_api_key_exits_one_with_hint() {
    let dir = TempDir::new().expect("temp dir");
    let agent = write_agent_yaml(&dir);

    wxo(&dir)
        .arg("import")
        .arg(agent)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("WXO_API_KEY"));
}

#[test]
fn test_import_missing_document_exits_one_before_any_auth() {
    let dir = TempDir::new().expect("temp dir");

    // An API key is present, but the document check fires first — no
    // network involved.
    wxo(&dir)
        .arg("import")
        .arg(dir.path().join("no-such-agent.yaml"))
        .env("WXO_API_KEY", "dummy")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Document not found"));
}

#[test]
fn test_import_unreachable_identity_endpoint_exits_one() {
    let dir = TempDir::new().expect("temp dir");
    let agent = write_agent_yaml(&dir);

    // Port 9 (discard) is closed on any sane test host, so the exchange
    // fails at the transport level without leaving the machine.
    wxo(&dir)
        .arg("import")
        .arg(agent)
        .env("WXO_API_KEY", "dummy")
        .env("WXO_IAM_URL", "http://127.0.0.1:9/identity/token")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_token_without_api_key_exits_one() {
    let dir = TempDir::new().expect("temp dir");

    wxo(&dir)
        .arg("token")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("WXO_API_KEY"));
}
