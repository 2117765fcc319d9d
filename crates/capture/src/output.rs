// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only text buffer for one process.

use crate::ProcessRole;

/// Text captured from one process's output and error streams.
///
/// Lines are stored with their terminators removed and a single space
/// appended, so the buffer reads as one long run of words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedOutput {
    role: ProcessRole,
    text: String,
    lines: usize,
}

impl CapturedOutput {
    /// Create an empty buffer for a role.
    pub fn new(role: ProcessRole) -> Self {
        Self {
            role,
            text: String::new(),
            lines: 0,
        }
    }

    pub fn role(&self) -> ProcessRole {
        self.role
    }

    /// Append one line followed by a single space.
    pub fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push(' ');
        self.lines += 1;
    }

    /// Clear all captured text. Calling this on an empty buffer is a no-op.
    pub fn reset(&mut self) {
        self.text.clear();
        self.lines = 0;
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of lines appended since the last reset.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
