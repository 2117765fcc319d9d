// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drives one subprocess from spawn to reclaimed exit.

use super::launch::Launch;
use super::reaper::{ReapAction, Reaper, Watchdog};
use crate::error::HarnessError;
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin};
use tracing::{debug, warn};
use twinshell_capture::{CapturedOutput, ProcessRole};

/// How the process ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ExitState {
    /// Exited on its own; `code` is `None` when ended by a signal
    Exited { code: Option<i32> },
    /// Killed after the final grace period
    Killed,
    /// Never started
    NotStarted,
    /// Waiting on the process failed
    Lost,
}

/// Record of one runner's lifecycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub role: ProcessRole,
    pub exit: ExitState,
    /// Reaper actions actually performed, in order
    pub reaped: Vec<ReapAction>,
}

/// Report plus the filled buffer, handed back to the coordinator.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: RunReport,
    pub output: CapturedOutput,
}

/// How a guarded stream phase ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StreamEnd {
    Eof,
    Failed,
    Severed,
}

/// Runs one role's process for one command.
#[derive(Debug)]
pub struct ProcessRunner<L> {
    launch: L,
    working_dir: PathBuf,
    watchdog: Watchdog,
}

impl<L: Launch> ProcessRunner<L> {
    pub fn new(launch: L, working_dir: impl Into<PathBuf>, watchdog: Watchdog) -> Self {
        Self {
            launch,
            working_dir: working_dir.into(),
            watchdog,
        }
    }

    pub fn role(&self) -> ProcessRole {
        self.launch.role()
    }

    /// Run `command` to completion, filling `output`.
    ///
    /// Only a fatal spawn failure is returned as an error. Every other
    /// problem ends up as missing or partial text in the outcome.
    pub async fn run(
        &self,
        command: &str,
        mut output: CapturedOutput,
    ) -> Result<RunOutcome, HarnessError> {
        output.reset();
        let role = self.role();

        let Some(spec) = self.launch.spec(command) else {
            warn!(%role, command, "nothing to launch");
            return Ok(self.not_started(output));
        };

        let mut child = match spec.to_command(&self.working_dir).spawn() {
            Ok(child) => child,
            Err(source) if self.launch.spawn_failure_is_fatal() => {
                return Err(HarnessError::ReferenceLaunch {
                    program: spec.program,
                    source,
                });
            }
            Err(err) => {
                warn!(%role, program = %spec.program, %err, "process did not start");
                return Ok(self.not_started(output));
            }
        };
        debug!(%role, program = %spec.program, pid = ?child.id(), "process started");

        let mut reaped = Vec::new();

        if let (Some(script), Some(stdin)) = (spec.script.as_deref(), child.stdin.take()) {
            let reaper = self.watchdog.arm(ReapAction::CloseInput);
            if feed_input(stdin, script, reaper).await == StreamEnd::Severed {
                reaped.push(ReapAction::CloseInput);
            }
        }

        if let Some(stdout) = child.stdout.take() {
            let reaper = self.watchdog.arm(ReapAction::CloseOutput);
            if drain(stdout, &mut output, reaper).await == StreamEnd::Severed {
                reaped.push(ReapAction::CloseOutput);
            }
        }
        if let Some(stderr) = child.stderr.take() {
            let reaper = self.watchdog.arm(ReapAction::CloseError);
            if drain(stderr, &mut output, reaper).await == StreamEnd::Severed {
                reaped.push(ReapAction::CloseError);
            }
        }

        let exit = self.reap(&mut child, &mut reaped).await;
        debug!(%role, ?exit, lines = output.line_count(), "process reclaimed");

        Ok(RunOutcome {
            report: RunReport { role, exit, reaped },
            output,
        })
    }

    fn not_started(&self, output: CapturedOutput) -> RunOutcome {
        RunOutcome {
            report: RunReport {
                role: self.role(),
                exit: ExitState::NotStarted,
                reaped: Vec::new(),
            },
            output,
        }
    }

    /// Wait for exit under a kill reaper.
    async fn reap(&self, child: &mut Child, reaped: &mut Vec<ReapAction>) -> ExitState {
        let mut reaper = self.watchdog.arm(ReapAction::Kill);
        let mut killed = false;

        let status = tokio::select! {
            status = child.wait() => status,
            action = reaper.fired() => {
                debug!(role = %self.role(), %action, "grace period elapsed, killing");
                if let Err(err) = child.start_kill() {
                    debug!(%err, "kill failed");
                }
                killed = true;
                reaped.push(action);
                child.wait().await
            }
        };
        reaper.disarm().await;

        match status {
            Ok(_) if killed => ExitState::Killed,
            Ok(status) => ExitState::Exited {
                code: status.code(),
            },
            Err(err) => {
                debug!(%err, "wait failed");
                ExitState::Lost
            }
        }
    }
}

/// Write the script to stdin, then close it so the process sees end of
/// input. A process that never reads cannot stall the write past the reaper.
async fn feed_input(mut stdin: ChildStdin, script: &str, mut reaper: Reaper) -> StreamEnd {
    let write = async {
        stdin.write_all(script.as_bytes()).await?;
        stdin.flush().await
    };
    let end = tokio::select! {
        written = write => match written {
            Ok(()) => StreamEnd::Eof,
            Err(err) => {
                debug!(%err, "writing input failed");
                StreamEnd::Failed
            }
        },
        action = reaper.fired() => {
            debug!(%action, "grace period elapsed, closing input");
            StreamEnd::Severed
        }
    };
    drop(stdin);
    reaper.disarm().await;
    end
}

/// Append lines from `stream` until end of data, a read error, or the
/// reaper firing. The stream is closed on return.
async fn drain<R>(stream: R, output: &mut CapturedOutput, mut reaper: Reaper) -> StreamEnd
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(stream);
    let mut line = Vec::new();

    let end = loop {
        tokio::select! {
            read = reader.read_until(b'\n', &mut line) => match read {
                Ok(0) => break StreamEnd::Eof,
                Ok(_) => {
                    output.push_line(&decode_line(&line));
                    line.clear();
                }
                Err(err) => {
                    debug!(%err, "stream read failed");
                    break StreamEnd::Failed;
                }
            },
            action = reaper.fired() => {
                debug!(%action, "grace period elapsed, closing stream");
                break StreamEnd::Severed;
            }
        }
    };

    // Keep whatever arrived before the cut
    if !line.is_empty() {
        output.push_line(&decode_line(&line));
    }
    drop(reader);
    reaper.disarm().await;
    end
}

/// Strip the line terminator and replace invalid UTF-8.
fn decode_line(line: &[u8]) -> String {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
