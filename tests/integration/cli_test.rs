//! CLI tests for the demotape binary.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::{sample_script_toml, temp_script};

fn demotape() -> Command {
    Command::cargo_bin("demotape").expect("binary builds")
}

#[test]
fn help_describes_the_player() {
    demotape()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--transcript"));
}

#[test]
fn version_reports_the_crate_version() {
    demotape()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn transcript_prints_the_script_contents_in_order() {
    let (dir, path) = temp_script(sample_script_toml());

    demotape()
        .arg(&path)
        .arg("--transcript")
        .assert()
        .success()
        .stdout("$ \nls\nfile_a  file_b\n");

    drop(dir);
}

#[test]
fn transcript_of_the_builtin_demo_mentions_the_player() {
    demotape()
        .arg("--transcript")
        .assert()
        .success()
        .stdout(predicate::str::contains("demotape --version"));
}

#[test]
fn check_accepts_a_valid_script() {
    let (dir, path) = temp_script(sample_script_toml());

    demotape()
        .arg(&path)
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok (3 lines)"));

    drop(dir);
}

#[test]
fn check_rejects_a_malformed_script() {
    let (dir, path) = temp_script("[[lines]]\nkind = \"sideways\"\n");

    demotape()
        .arg(&path)
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));

    drop(dir);
}

#[test]
fn unknown_theme_is_rejected() {
    demotape()
        .args(["--theme", "neon", "--transcript"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"));
}

#[test]
fn completions_cover_the_flags() {
    demotape()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--transcript"));
}
