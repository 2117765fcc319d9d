// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end verdicts: equivalent outputs pass, differing outputs fail with
//! a diagnostic block, and hung candidates are reclaimed.

mod common;

use common::{twinshell, working_dir, write_config};
use predicates::prelude::*;
use std::time::{Duration, Instant};

#[test]
fn test_equivalent_commands_pass() {
    let dir = working_dir();
    let config = write_config(&["pwd", "ls", "echo hello world"], 1000);

    twinshell(&config, &dir)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Testing 'pwd': Passed"))
        .stdout(predicate::str::contains("Testing 'ls': Passed"))
        .stdout(predicate::str::contains("3 of 3 commands passed"))
        .stdout(predicate::str::contains("Compile Successful.").not());
}

#[test]
fn test_differing_output_fails_with_diagnostics() {
    let dir = working_dir();
    // The shell strips the quotes; direct execution keeps them
    let config = write_config(&["echo 'a b'", "pwd"], 1000);

    twinshell(&config, &dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Testing 'echo 'a b'': Failed"))
        .stdout(predicate::str::contains("Reference output: a b"))
        .stdout(predicate::str::contains("Candidate output: 'a b'"))
        .stdout(predicate::str::contains("  - 'a b'"))
        .stdout(predicate::str::contains("Testing 'pwd'").not())
        .stdout(predicate::str::contains("0 of 2 commands passed"));
}

#[test]
fn test_missing_candidate_fails() {
    let dir = working_dir();
    let config = write_config(&["no-such-candidate-twinshell"], 1000);

    twinshell(&config, &dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failed"))
        .stdout(predicate::str::contains("Candidate output: \n"));
}

#[test]
fn test_hanging_processes_are_reclaimed() {
    let dir = working_dir();
    let config = write_config(&["sleep 30"], 100);

    let started = Instant::now();
    twinshell(&config, &dir)
        .timeout(Duration::from_secs(20))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Testing 'sleep 30': Passed"));
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[test]
fn test_build_step_runs_configured_compiler() {
    let dir = working_dir();
    std::fs::write(dir.path().join("Stale.class"), "").unwrap();
    let config = common::write_raw_config(
        r#"
        commands = ["ls"]

        [reference]
        program = "sh"
        args = []

        [build]
        compiler = "true"
        "#,
    );

    twinshell(&config, &dir)
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("Compile Successful.\n"))
        .stdout(predicate::str::contains("Testing 'ls': Passed"));
    assert!(!dir.path().join("Stale.class").exists());
}

#[test]
fn test_no_build_flag_skips_compiler() {
    let dir = working_dir();
    let config = common::write_raw_config(
        r#"
        commands = ["ls"]

        [reference]
        program = "sh"
        args = []

        [build]
        compiler = "false"
        "#,
    );

    twinshell(&config, &dir)
        .arg("--no-build")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Compile Successful.").not());
}
