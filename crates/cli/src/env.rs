// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by twinshell are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `TWINSHELL_CONFIG`: Path to a TOML configuration file.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(names::TWINSHELL_CONFIG)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// `TWINSHELL_GRACE_MS`: Reaper grace period override.
pub fn grace_ms() -> Option<u64> {
    var_u64(names::TWINSHELL_GRACE_MS)
}

/// `NO_COLOR`: Disables ANSI colors in diagnostics when set.
pub fn no_color() -> bool {
    std::env::var_os(names::NO_COLOR).is_some()
}

fn var_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
