// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Holder for the reference and candidate buffers between runs.

use crate::{CapturedOutput, ProcessRole};

/// Owns one [`CapturedOutput`] per role.
///
/// A runner takes its buffer out with [`checkout`](Self::checkout), which
/// clears it, and hands it back with [`publish`](Self::publish) once the
/// process has finished. While a buffer is checked out the collector holds
/// nothing for that role, so two writers can never share a buffer.
#[derive(Debug)]
pub struct OutputCollector {
    reference: Option<CapturedOutput>,
    candidate: Option<CapturedOutput>,
}

impl OutputCollector {
    pub fn new() -> Self {
        Self {
            reference: Some(CapturedOutput::new(ProcessRole::Reference)),
            candidate: Some(CapturedOutput::new(ProcessRole::Candidate)),
        }
    }

    /// Clear both buffers. Roles whose buffer is checked out get a fresh one.
    pub fn reset(&mut self) {
        for role in ProcessRole::ALL {
            let slot = self.slot_mut(role);
            if let Some(output) = slot.as_mut() {
                output.reset();
            } else {
                *slot = Some(CapturedOutput::new(role));
            }
        }
    }

    /// Take the buffer for `role`, cleared and ready to fill.
    pub fn checkout(&mut self, role: ProcessRole) -> CapturedOutput {
        let mut output = self
            .slot_mut(role)
            .take()
            .unwrap_or_else(|| CapturedOutput::new(role));
        output.reset();
        output
    }

    /// Return a filled buffer to the slot for its role.
    pub fn publish(&mut self, output: CapturedOutput) {
        let role = output.role();
        *self.slot_mut(role) = Some(output);
    }

    /// Captured text for `role`; empty while the buffer is checked out.
    pub fn text(&self, role: ProcessRole) -> &str {
        self.slot(role).as_ref().map_or("", CapturedOutput::as_str)
    }

    pub fn get(&self, role: ProcessRole) -> Option<&CapturedOutput> {
        self.slot(role).as_ref()
    }

    pub fn is_checked_out(&self, role: ProcessRole) -> bool {
        self.slot(role).is_none()
    }

    fn slot(&self, role: ProcessRole) -> &Option<CapturedOutput> {
        match role {
            ProcessRole::Reference => &self.reference,
            ProcessRole::Candidate => &self.candidate,
        }
    }

    fn slot_mut(&mut self, role: ProcessRole) -> &mut Option<CapturedOutput> {
        match role {
            ProcessRole::Reference => &mut self.reference,
            ProcessRole::Candidate => &mut self.candidate,
        }
    }
}

impl Default for OutputCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "collector_tests.rs"]
mod tests;
