// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Renders verdicts, failure diagnostics and the final tally.

use crate::cli::OutputFormat;
use crate::compile::BuildReport;
use crate::cycle::{CycleSummary, TestOutcome};
use crate::error::HarnessError;
use serde::Serialize;
use std::io::Write;
use twinshell_compare::WordMultiset;

const DIVIDER: &str = "==============================================================";

/// One line of JSON output.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Record<'a> {
    Build { compiled: usize, removed: usize },
    Command { command: &'a str, passed: bool },
    Failure(&'a TestOutcome),
    Summary { passed: usize, total: usize },
}

/// Writes the report to `out` in the selected format.
#[derive(Debug)]
pub struct Reporter<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn build(&mut self, report: &BuildReport) -> Result<(), HarnessError> {
        match self.format {
            OutputFormat::Text => self.line("Compile Successful."),
            OutputFormat::Json => self.record(&Record::Build {
                compiled: report.compiled.len(),
                removed: report.removed,
            }),
        }
    }

    pub fn command(&mut self, command: &str, passed: bool) -> Result<(), HarnessError> {
        match self.format {
            OutputFormat::Text => {
                let verdict = if passed { "Passed" } else { "Failed" };
                self.line(&format!("Testing '{command}': {verdict}"))
            }
            OutputFormat::Json => self.record(&Record::Command { command, passed }),
        }
    }

    pub fn failure(&mut self, outcome: &TestOutcome) -> Result<(), HarnessError> {
        match self.format {
            OutputFormat::Text => self.failure_block(outcome),
            OutputFormat::Json => self.record(&Record::Failure(outcome)),
        }
    }

    pub fn summary(&mut self, summary: &CycleSummary) -> Result<(), HarnessError> {
        match self.format {
            OutputFormat::Text => self.line(&format!(
                "{} of {} commands passed",
                summary.passed, summary.total
            )),
            OutputFormat::Json => self.record(&Record::Summary {
                passed: summary.passed,
                total: summary.total,
            }),
        }
    }

    fn failure_block(&mut self, outcome: &TestOutcome) -> Result<(), HarnessError> {
        self.line(DIVIDER)?;
        if let Some(reason) = &outcome.interrupted {
            self.line(&format!("Interrupted: {reason}"))?;
        }
        self.side("Reference", &outcome.reference_output, &outcome.reference_only)?;
        self.line(DIVIDER)?;
        self.side("Candidate", &outcome.candidate_output, &outcome.candidate_only)?;
        self.line(DIVIDER)
    }

    fn side(
        &mut self,
        label: &str,
        output: &str,
        leftover: &WordMultiset,
    ) -> Result<(), HarnessError> {
        self.line(&format!("{label} output: {}", output.trim_end()))?;
        if !leftover.is_empty() {
            let words: Vec<&str> = leftover.words().collect();
            self.line(&format!("  - {}", words.join(" ")))?;
        }
        Ok(())
    }

    fn record(&mut self, record: &Record<'_>) -> Result<(), HarnessError> {
        let json = serde_json::to_string(record)
            .map_err(|e| HarnessError::Report(std::io::Error::other(e)))?;
        self.line(&json)
    }

    fn line(&mut self, text: &str) -> Result<(), HarnessError> {
        writeln!(self.out, "{text}")
            .and_then(|()| self.out.flush())
            .map_err(HarnessError::Report)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
