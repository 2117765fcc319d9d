// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runs the reference and candidate side by side.

use super::launch::{CandidateLaunch, ReferenceLaunch};
use super::process::{ProcessRunner, RunOutcome, RunReport};
use super::reaper::Watchdog;
use crate::error::HarnessError;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinError;
use tracing::{debug, warn};
use twinshell_capture::{OutputCollector, ProcessRole};

/// Result of running both processes for one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Execution {
    /// Both processes were reclaimed; their text is in the collector.
    Completed {
        reference: RunReport,
        candidate: RunReport,
    },
    /// A runner task panicked or was cancelled before reporting.
    Interrupted { role: ProcessRole, reason: String },
}

/// Launches one runner per role in parallel and joins them.
#[derive(Debug, Clone)]
pub struct DualExecutionCoordinator {
    reference: Arc<ProcessRunner<ReferenceLaunch>>,
    candidate: Arc<ProcessRunner<CandidateLaunch>>,
}

impl DualExecutionCoordinator {
    pub fn new(
        reference: ReferenceLaunch,
        working_dir: impl Into<PathBuf>,
        watchdog: Watchdog,
    ) -> Self {
        let working_dir = working_dir.into();
        Self {
            reference: Arc::new(ProcessRunner::new(reference, working_dir.clone(), watchdog)),
            candidate: Arc::new(ProcessRunner::new(CandidateLaunch, working_dir, watchdog)),
        }
    }

    /// Run `command` on both sides and publish both buffers into `collector`.
    ///
    /// A reference spawn failure aborts the candidate and is returned as an
    /// error. The collector's buffers are checked out for the duration and
    /// left empty if either runner is interrupted.
    pub async fn execute(
        &self,
        command: &str,
        collector: &mut OutputCollector,
    ) -> Result<Execution, HarnessError> {
        let reference = {
            let runner = Arc::clone(&self.reference);
            let command = command.to_string();
            let output = collector.checkout(ProcessRole::Reference);
            tokio::spawn(async move { runner.run(&command, output).await })
        };
        let candidate = {
            let runner = Arc::clone(&self.candidate);
            let command = command.to_string();
            let output = collector.checkout(ProcessRole::Candidate);
            tokio::spawn(async move { runner.run(&command, output).await })
        };

        let reference = match reference.await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(err)) => {
                // Dropping the task's child kills the candidate process
                candidate.abort();
                let _ = candidate.await;
                collector.reset();
                return Err(err);
            }
            Err(err) => {
                let _ = candidate.await;
                collector.reset();
                return Ok(interrupted(ProcessRole::Reference, err));
            }
        };

        let candidate = match candidate.await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(err)) => {
                collector.reset();
                return Err(err);
            }
            Err(err) => {
                collector.reset();
                return Ok(interrupted(ProcessRole::Candidate, err));
            }
        };

        debug!(
            reference = ?reference.report.exit,
            candidate = ?candidate.report.exit,
            "both processes reclaimed"
        );
        Ok(Execution::Completed {
            reference: publish(collector, reference),
            candidate: publish(collector, candidate),
        })
    }
}

fn publish(collector: &mut OutputCollector, outcome: RunOutcome) -> RunReport {
    collector.publish(outcome.output);
    outcome.report
}

fn interrupted(role: ProcessRole, err: JoinError) -> Execution {
    warn!(%role, %err, "runner did not finish");
    Execution::Interrupted {
        role,
        reason: err.to_string(),
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
