//! Integration tests for the top-level CLI surface.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_help_lists_commands() {
    cargo_bin_cmd!("beescore")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("signup"))
        .stdout(predicate::str::contains("logout"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_config_path_respects_home() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!("beescore")
        .env("BEESCORE_HOME", home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(home.path().to_str().unwrap()));
}

#[test]
fn test_login_requires_credentials() {
    cargo_bin_cmd!("beescore").arg("login").assert().failure();
}
