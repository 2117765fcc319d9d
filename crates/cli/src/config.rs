// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) runs the
//! stock command list against `java Jsh`.

use crate::error::HarnessError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use twinshell_compare::{Normalizer, DEFAULT_STOP_WORDS};

/// Default reaper grace period in milliseconds
pub const DEFAULT_GRACE_MS: u64 = 1000;
/// Default command list, run in order
pub const DEFAULT_COMMANDS: &[&str] = &["pwd", "ls", "java FlipFlop 10 20"];
/// Default reference program
pub const DEFAULT_REFERENCE_PROGRAM: &str = "java";
/// Default reference program arguments
pub const DEFAULT_REFERENCE_ARGS: &[&str] = &["Jsh"];

fn default_grace_ms() -> u64 {
    DEFAULT_GRACE_MS
}

fn default_commands() -> Vec<String> {
    DEFAULT_COMMANDS.iter().map(|c| c.to_string()).collect()
}

/// Top-level harness configuration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Milliseconds each reaper waits before acting
    #[serde(default = "default_grace_ms")]
    pub grace_ms: u64,

    /// Commands to test, in order
    #[serde(default = "default_commands")]
    pub commands: Vec<String>,

    /// How to start the reference process
    #[serde(default)]
    pub reference: ReferenceConfig,

    /// Word normalization
    #[serde(default)]
    pub normalize: NormalizeConfig,

    /// Build step run before testing
    #[serde(default)]
    pub build: BuildConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            grace_ms: DEFAULT_GRACE_MS,
            commands: default_commands(),
            reference: ReferenceConfig::default(),
            normalize: NormalizeConfig::default(),
            build: BuildConfig::default(),
        }
    }
}

/// Reference process launch configuration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_REFERENCE_PROGRAM.to_string(),
            args: DEFAULT_REFERENCE_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Stop words stripped from every captured word
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeConfig {
    pub stop_words: Vec<String>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Compiler invocation for the working directory
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Skip the build step entirely when false
    pub enabled: bool,
    /// Compiler executable, invoked once per source file
    pub compiler: String,
    /// Arguments placed before the source file path
    pub args: Vec<String>,
    /// Extension of files to compile (without the dot)
    pub source_extension: String,
    /// Extension of stale artifacts deleted before compiling
    pub artifact_extension: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            compiler: "javac".to_string(),
            args: Vec::new(),
            source_extension: "java".to_string(),
            artifact_extension: "class".to_string(),
        }
    }
}

/// Values from the environment and command line that win over the file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub grace_ms: Option<u64>,
    pub skip_build: bool,
}

impl HarnessConfig {
    /// Load from `path`, or fall back to defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self, HarnessError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| HarnessError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse TOML content; `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, HarnessError> {
        toml::from_str(content).map_err(|e| HarnessError::ConfigParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(grace_ms) = overrides.grace_ms {
            self.grace_ms = grace_ms;
        }
        if overrides.skip_build {
            self.build.enabled = false;
        }
        self
    }

    /// Reject settings the harness cannot run with.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.grace_ms == 0 {
            return Err(HarnessError::ConfigInvalid(
                "grace_ms must be greater than zero".to_string(),
            ));
        }
        if self.commands.is_empty() {
            return Err(HarnessError::ConfigInvalid(
                "no commands configured".to_string(),
            ));
        }
        if self.reference.program.trim().is_empty() {
            return Err(HarnessError::ConfigInvalid(
                "reference.program is empty".to_string(),
            ));
        }
        if self.build.enabled && self.build.compiler.trim().is_empty() {
            return Err(HarnessError::ConfigInvalid(
                "build.compiler is empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(&self.normalize.stop_words)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
