//! CLI surface tests for the `bust-cache` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn test_help_lists_both_positionals() {
    Command::cargo_bin("bust-cache")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("APP_NAME"))
        .stdout(predicate::str::contains("EDGERC"));
}

#[test]
fn test_missing_app_name_is_a_usage_error() {
    Command::cargo_bin("bust-cache")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("APP_NAME"));
}

#[test]
fn test_missing_credential_file_fails_with_friendly_error() {
    Command::cargo_bin("bust-cache")
        .unwrap()
        .args(["insights", "/definitely/not/here/.edgerc"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("credential file not found"))
        .stderr(predicate::str::contains("suggestion"));
}

#[test]
fn test_incomplete_credential_file_names_the_missing_key() {
    let mut edgerc = tempfile::NamedTempFile::new().unwrap();
    // host is present but the tokens are not
    writeln!(edgerc, "[default]\nhost = akaa-host.luna.akamaiapis.net").unwrap();

    Command::cargo_bin("bust-cache")
        .unwrap()
        .args(["insights", edgerc.path().to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("client_token"));
}
