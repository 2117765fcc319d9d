// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a differential run a process belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessRole {
    /// The trusted program, fed the command on its input.
    Reference,
    /// The program under test, launched directly from the command's words.
    Candidate,
}

impl ProcessRole {
    /// Both roles, reference first.
    pub const ALL: [ProcessRole; 2] = [ProcessRole::Reference, ProcessRole::Candidate];

    pub fn as_str(self) -> &'static str {
        match self {
            ProcessRole::Reference => "reference",
            ProcessRole::Candidate => "candidate",
        }
    }
}

impl fmt::Display for ProcessRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
