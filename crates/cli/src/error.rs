// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal setup errors.
//!
//! Anything here aborts the whole run. Misbehaving candidates never produce
//! a `HarnessError`; they produce a failed comparison instead.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Process exit codes.
pub mod exit_codes {
    /// Every command matched
    pub const SUCCESS: i32 = 0;
    /// A command's outputs did not match
    pub const FAILED: i32 = 1;
    /// The run could not be set up
    pub const SETUP_FAILURE: i32 = 2;
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid config: {0}")]
    ConfigInvalid(String),

    #[error("No such directory: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("There are no files in the directory: {}", .0.display())]
    EmptyDirectory(PathBuf),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to start build tool `{tool}`: {source}")]
    BuildTool {
        tool: String,
        source: std::io::Error,
    },

    #[error("Compiling {} failed ({status}): {stderr}", file.display())]
    BuildFailed {
        file: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to write report: {0}")]
    Report(#[source] std::io::Error),

    #[error("Failed to start reference process `{program}`: {source}")]
    ReferenceLaunch {
        program: String,
        source: std::io::Error,
    },
}
