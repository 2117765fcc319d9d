// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output capture for differential test runs.
//!
//! Each test run drives two processes, one per [`ProcessRole`]. Every process
//! writes into its own [`CapturedOutput`], and the [`OutputCollector`] holds
//! the pair between runs so stale text never leaks into the next comparison.

mod collector;
mod output;
mod role;

pub use collector::OutputCollector;
pub use output::CapturedOutput;
pub use role::ProcessRole;
