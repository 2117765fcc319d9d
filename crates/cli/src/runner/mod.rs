// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution for both roles.
//!
//! Every blocking step of a run (feeding input, draining output, draining
//! errors, waiting for exit) is guarded by a [`Reaper`] armed from a shared
//! [`Watchdog`], so a hung process costs at most four grace periods.

pub mod coordinator;
pub mod launch;
pub mod process;
pub mod reaper;

pub use coordinator::{DualExecutionCoordinator, Execution};
pub use launch::{CandidateLaunch, Launch, LaunchSpec, ReferenceLaunch};
pub use process::{ExitState, ProcessRunner, RunOutcome, RunReport};
pub use reaper::{ReapAction, Reaper, Watchdog};
