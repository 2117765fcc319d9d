// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for end-to-end tests of the twinshell binary.
//!
//! Tests use `sh` as the reference process and skip the build step, so they
//! run anywhere a POSIX shell is available.

#![allow(dead_code)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// Write a config file using `sh` as the reference with the build disabled.
pub fn write_config(commands: &[&str], grace_ms: u64) -> NamedTempFile {
    let commands = commands
        .iter()
        .map(|c| format!("{c:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    write_raw_config(&format!(
        r#"
        grace_ms = {grace_ms}
        commands = [{commands}]

        [reference]
        program = "sh"
        args = []

        [build]
        enabled = false
        "#
    ))
}

/// Write `content` verbatim to a `.toml` temp file.
pub fn write_raw_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// A working directory holding one placeholder file.
pub fn working_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Jsh.java"), "class Jsh {}\n").unwrap();
    dir
}

/// The binary pointed at `config` and `dir`, with the environment cleared of
/// twinshell overrides.
pub fn twinshell(config: &NamedTempFile, dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("twinshell").unwrap();
    cmd.env_remove("TWINSHELL_CONFIG")
        .env_remove("TWINSHELL_GRACE_MS")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config.path())
        .arg(dir.path());
    cmd
}
