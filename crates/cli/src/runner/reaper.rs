// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time-bounded watchdogs for stalled streams and processes.
//!
//! A [`Reaper`] is a timer task armed for one phase of a run. It never
//! touches the process itself: when the grace period elapses it signals the
//! runner, and the runner, still blocked in that phase, closes the stream or
//! kills the process. A reaper that is disarmed or dropped first never fires.

use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// What the runner does when a reaper fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReapAction {
    /// Abandon a stalled stdin write and close stdin
    CloseInput,
    /// Stop reading stdout and close it
    CloseOutput,
    /// Stop reading stderr and close it
    CloseError,
    /// Kill the process
    Kill,
}

impl fmt::Display for ReapAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReapAction::CloseInput => "close-input",
            ReapAction::CloseOutput => "close-output",
            ReapAction::CloseError => "close-error",
            ReapAction::Kill => "kill",
        })
    }
}

/// Arms reapers with a shared grace period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Watchdog {
    grace: Duration,
}

impl Watchdog {
    pub fn new(grace: Duration) -> Self {
        Self { grace }
    }

    pub fn grace(&self) -> Duration {
        self.grace
    }

    /// Start a timer that fires `action` after the grace period.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm(&self, action: ReapAction) -> Reaper {
        let (fire_tx, fire_rx) = oneshot::channel();
        let (disarm_tx, disarm_rx) = oneshot::channel::<()>();
        let grace = self.grace;

        let timer = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(grace) => {
                    // Receiver gone means the runner already moved on
                    let _ = fire_tx.send(action);
                    true
                }
                // Explicit disarm or the Reaper being dropped
                _ = disarm_rx => false,
            }
        });

        Reaper {
            action,
            fire_rx: Some(fire_rx),
            disarm_tx: Some(disarm_tx),
            timer,
        }
    }
}

/// One armed timer. Dropping it disarms the timer.
#[derive(Debug)]
pub struct Reaper {
    action: ReapAction,
    fire_rx: Option<oneshot::Receiver<ReapAction>>,
    disarm_tx: Option<oneshot::Sender<()>>,
    timer: JoinHandle<bool>,
}

impl Reaper {
    pub fn action(&self) -> ReapAction {
        self.action
    }

    /// Resolve once the grace period has elapsed.
    ///
    /// Cancel-safe, so it can sit in a `select!` next to the guarded
    /// operation. Resolves at most once; later calls never complete.
    pub async fn fired(&mut self) -> ReapAction {
        if let Some(rx) = self.fire_rx.as_mut() {
            let received = rx.await;
            self.fire_rx = None;
            if let Ok(action) = received {
                return action;
            }
        }
        std::future::pending().await
    }

    /// Stop the timer and wait for it to end. Returns true if the grace
    /// period had already elapsed.
    pub async fn disarm(mut self) -> bool {
        if let Some(tx) = self.disarm_tx.take() {
            let _ = tx.send(());
        }
        (&mut self.timer).await.unwrap_or(false)
    }
}

#[cfg(test)]
#[path = "reaper_tests.rs"]
mod tests;
