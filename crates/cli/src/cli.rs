// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Differential tester for interactive programs
#[derive(Parser, Debug, Clone)]
#[command(
    name = "twinshell",
    version,
    about = "Run each test command against a reference and a candidate process and compare their output"
)]
pub struct Cli {
    /// Directory holding the program under test; both processes run here
    #[arg(value_name = "WORKING_DIR")]
    pub working_dir: PathBuf,

    /// TOML configuration file (also read from TWINSHELL_CONFIG)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Milliseconds a stalled stream or process is given before it is reclaimed
    #[arg(long, value_name = "MS")]
    pub grace_ms: Option<u64>,

    /// Skip compiling the working directory
    #[arg(long)]
    pub no_build: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Report format
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines and failure block
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
