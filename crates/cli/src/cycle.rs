// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The per-command test loop.

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::report::Reporter;
use crate::runner::{DualExecutionCoordinator, Execution, ReferenceLaunch, Watchdog};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, info_span, Instrument};
use twinshell_capture::{OutputCollector, ProcessRole};
use twinshell_compare::{MultisetComparator, WordMultiset};

/// Diagnostic snapshot of a failed command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestOutcome {
    pub command: String,
    pub passed: bool,
    pub reference_output: String,
    pub candidate_output: String,
    pub reference_only: WordMultiset,
    pub candidate_only: WordMultiset,
    /// Set when a runner never reported back
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrupted: Option<String>,
}

/// Tally of a full cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CycleSummary {
    pub passed: usize,
    pub total: usize,
    #[serde(skip)]
    pub failed: Option<TestOutcome>,
}

impl CycleSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_none()
    }
}

/// Runs every configured command through both processes and compares them.
#[derive(Debug)]
pub struct TestCycle {
    coordinator: DualExecutionCoordinator,
    comparator: MultisetComparator,
    commands: Vec<String>,
}

impl TestCycle {
    pub fn new(
        coordinator: DualExecutionCoordinator,
        comparator: MultisetComparator,
        commands: Vec<String>,
    ) -> Self {
        Self {
            coordinator,
            comparator,
            commands,
        }
    }

    /// Build a cycle for `working_dir` from a validated config.
    pub fn from_config(config: &HarnessConfig, working_dir: &Path) -> Self {
        let reference = ReferenceLaunch::new(
            config.reference.program.clone(),
            config.reference.args.clone(),
        );
        let coordinator =
            DualExecutionCoordinator::new(reference, working_dir, Watchdog::new(config.grace()));
        Self::new(
            coordinator,
            MultisetComparator::new(config.normalizer()),
            config.commands.clone(),
        )
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Test each command in order, stopping at the first failure.
    pub async fn run<W: Write>(
        &self,
        reporter: &mut Reporter<W>,
    ) -> Result<CycleSummary, HarnessError> {
        let mut collector = OutputCollector::new();
        let mut summary = CycleSummary {
            passed: 0,
            total: self.commands.len(),
            failed: None,
        };

        for command in &self.commands {
            let span = info_span!("command", command = %command);
            collector.reset();
            let execution = self
                .coordinator
                .execute(command, &mut collector)
                .instrument(span.clone())
                .await?;

            let _entered = span.enter();
            if !self.settle(command, execution, &collector, reporter, &mut summary)? {
                break;
            }
        }

        reporter.summary(&summary)?;
        Ok(summary)
    }

    /// Judge one execution, report it and update the tally. Returns false
    /// once a command has failed.
    fn settle<W: Write>(
        &self,
        command: &str,
        execution: Execution,
        collector: &OutputCollector,
        reporter: &mut Reporter<W>,
        summary: &mut CycleSummary,
    ) -> Result<bool, HarnessError> {
        let failure = self.judge(command, execution, collector);
        reporter.command(command, failure.is_none())?;

        let Some(outcome) = failure else {
            debug!("outputs equivalent");
            summary.passed += 1;
            return Ok(true);
        };
        info!(
            reference_only = outcome.reference_only.total(),
            candidate_only = outcome.candidate_only.total(),
            "outputs differ"
        );
        reporter.failure(&outcome)?;
        summary.failed = Some(outcome);
        Ok(false)
    }

    /// Compare the published buffers; `Some` describes a failure.
    fn judge(
        &self,
        command: &str,
        execution: Execution,
        collector: &OutputCollector,
    ) -> Option<TestOutcome> {
        let reference_output = collector.text(ProcessRole::Reference);
        let candidate_output = collector.text(ProcessRole::Candidate);
        let comparison = self.comparator.compare(reference_output, candidate_output);

        let interrupted = match execution {
            Execution::Completed { .. } if comparison.is_equivalent() => return None,
            Execution::Completed { .. } => None,
            Execution::Interrupted { role, reason } => Some(format!("{role}: {reason}")),
        };

        Some(TestOutcome {
            command: command.to_string(),
            passed: false,
            reference_output: reference_output.to_string(),
            candidate_output: candidate_output.to_string(),
            reference_only: comparison.reference_only,
            candidate_only: comparison.candidate_only,
            interrupted,
        })
    }
}

#[cfg(test)]
#[path = "cycle_tests.rs"]
mod tests;
