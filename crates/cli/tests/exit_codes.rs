// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Setup failures exit with code 2 and an `Error:` line on stderr.

#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

mod common;

use assert_cmd::Command;
use common::{twinshell, working_dir, write_config, write_raw_config};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_missing_directory() {
    let config = write_config(&["pwd"], 1000);
    let parent = TempDir::new().unwrap();
    let missing = parent.path().join("missing");

    Command::cargo_bin("twinshell")
        .unwrap()
        .arg("--config")
        .arg(config.path())
        .arg(&missing)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: No such directory"));
}

#[test]
fn test_empty_directory() {
    let config = write_config(&["pwd"], 1000);
    let dir = TempDir::new().unwrap();

    twinshell(&config, &dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "There are no files in the directory",
        ));
}

#[test]
fn test_unknown_config_field() {
    let dir = working_dir();
    let config = write_raw_config("grace = 5\n");

    twinshell(&config, &dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: Invalid config"))
        .stderr(predicate::str::contains("grace"));
}

#[test]
fn test_zero_grace_rejected() {
    let dir = working_dir();
    let config = write_config(&["pwd"], 1000);

    twinshell(&config, &dir)
        .args(["--grace-ms", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("grace_ms must be greater than zero"));
}

#[test]
fn test_unlaunchable_reference() {
    let dir = working_dir();
    let config = write_raw_config(
        r#"
        commands = ["pwd"]

        [reference]
        program = "no-such-reference-twinshell"

        [build]
        enabled = false
        "#,
    );

    twinshell(&config, &dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Failed to start reference process `no-such-reference-twinshell`",
        ));
}

#[test]
fn test_build_failure() {
    let dir = working_dir();
    let config = write_raw_config(
        r#"
        commands = ["pwd"]

        [reference]
        program = "sh"
        args = []

        [build]
        compiler = "false"
        "#,
    );

    twinshell(&config, &dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Compiling"))
        .stderr(predicate::str::contains("Jsh.java"));
}

#[test]
fn test_grace_from_environment() {
    let dir = working_dir();
    let config = write_config(&["pwd"], 1000);

    twinshell(&config, &dir)
        .env("TWINSHELL_GRACE_MS", "0")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("grace_ms must be greater than zero"));
}
