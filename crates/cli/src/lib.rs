// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Differential output tester.
//!
//! Runs each configured command against a trusted reference process (which
//! reads the command on its standard input) and a candidate process (launched
//! directly from the command's words), then checks that both produced the same
//! words the same number of times. Every blocking step is bounded by a
//! watchdog, so a hung candidate fails its test instead of stalling the run.
//!
#![doc = include_str!("../README.md")]

// Internal modules - pub for binary access, hidden from docs
#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod compile;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod cycle;
#[doc(hidden)]
pub mod env;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod logging;
#[doc(hidden)]
pub mod output_diagnostic;
#[doc(hidden)]
pub mod report;
#[doc(hidden)]
pub mod runner;

/// Re-exported capture types from the twinshell-capture crate.
pub mod capture {
    pub use twinshell_capture::{CapturedOutput, OutputCollector, ProcessRole};
}

/// Re-exported comparison types from the twinshell-compare crate.
pub mod compare {
    pub use twinshell_compare::{Comparison, MultisetComparator, Normalizer, WordMultiset};
}

pub use config::HarnessConfig;
pub use cycle::{CycleSummary, TestCycle, TestOutcome};
pub use error::HarnessError;
