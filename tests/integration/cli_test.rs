//! Integration tests for general CLI behavior

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_exits_0_and_shows_subcommands() {
    Command::cargo_bin("vsp")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("ls"));
}

#[test]
fn version_shows_package_version() {
    Command::cargo_bin("vsp")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_generate_for_bash() {
    Command::cargo_bin("vsp")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vsp"));
}

#[test]
fn config_show_prints_defaults() {
    let home = tempfile::TempDir::new().unwrap();
    Command::cargo_bin("vsp")
        .unwrap()
        .args(["config", "show"])
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .assert()
        .success()
        .stdout(predicate::str::contains("seek_step_secs"))
        .stdout(predicate::str::contains("tick_rate_ms"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("vsp")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure();
}
