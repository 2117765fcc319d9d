// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! How each role's process is started.

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use twinshell_capture::ProcessRole;

/// A ready-to-spawn process description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Text written to stdin before it is closed; stdin is null when `None`
    pub script: Option<String>,
}

impl LaunchSpec {
    /// Build the tokio command, run in `working_dir` with piped output.
    pub fn to_command(&self, working_dir: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .current_dir(working_dir)
            .stdin(if self.script.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

/// Launch strategy for one role.
pub trait Launch: Send + Sync + 'static {
    fn role(&self) -> ProcessRole;

    /// Describe the process for `command`, or `None` if there is nothing to run.
    fn spec(&self, command: &str) -> Option<LaunchSpec>;

    /// Whether a spawn failure aborts the whole run.
    fn spawn_failure_is_fatal(&self) -> bool;
}

/// Starts the fixed interactive program and scripts the command on its stdin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceLaunch {
    program: String,
    args: Vec<String>,
}

impl ReferenceLaunch {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Launch for ReferenceLaunch {
    fn role(&self) -> ProcessRole {
        ProcessRole::Reference
    }

    fn spec(&self, command: &str) -> Option<LaunchSpec> {
        Some(LaunchSpec {
            program: self.program.clone(),
            args: self.args.clone(),
            script: Some(command.to_string()),
        })
    }

    fn spawn_failure_is_fatal(&self) -> bool {
        true
    }
}

/// Runs the command's own words as an executable invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CandidateLaunch;

impl Launch for CandidateLaunch {
    fn role(&self) -> ProcessRole {
        ProcessRole::Candidate
    }

    fn spec(&self, command: &str) -> Option<LaunchSpec> {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(LaunchSpec {
            program,
            args: words.collect(),
            script: None,
        })
    }

    fn spawn_failure_is_fatal(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "launch_tests.rs"]
mod tests;
