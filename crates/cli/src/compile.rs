// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Working directory checks and the in-place build step.

use crate::config::BuildConfig;
use crate::error::HarnessError;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Confirm `path` is an existing, non-empty directory.
pub fn check_working_dir(path: &Path) -> Result<PathBuf, HarnessError> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(HarnessError::MissingDirectory(path.to_path_buf()));
        }
        Err(source) => {
            return Err(HarnessError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    if !metadata.is_dir() {
        return Err(HarnessError::NotADirectory(path.to_path_buf()));
    }

    let mut entries = std::fs::read_dir(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if entries.next().is_none() {
        return Err(HarnessError::EmptyDirectory(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}

/// What a build did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Sources compiled, in the order they were built
    pub compiled: Vec<PathBuf>,
    /// Stale artifacts deleted before compiling
    pub removed: usize,
}

/// Compiles every source file of a directory in place.
#[derive(Clone, Debug)]
pub struct Compiler {
    config: BuildConfig,
}

impl Compiler {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Delete stale artifacts, then compile each source in sorted order.
    ///
    /// Stops at the first source the tool rejects.
    pub async fn build(&self, dir: &Path) -> Result<BuildReport, HarnessError> {
        let removed = self.remove_artifacts(dir).await?;
        let sources = files_with_extension(dir, &self.config.source_extension).await?;

        let mut compiled = Vec::with_capacity(sources.len());
        for source in sources {
            self.compile(dir, &source).await?;
            compiled.push(source);
        }

        info!(compiled = compiled.len(), removed, "build finished");
        Ok(BuildReport { compiled, removed })
    }

    async fn remove_artifacts(&self, dir: &Path) -> Result<usize, HarnessError> {
        let artifacts = files_with_extension(dir, &self.config.artifact_extension).await?;
        for artifact in &artifacts {
            tokio::fs::remove_file(artifact)
                .await
                .map_err(|source| HarnessError::Io {
                    path: artifact.clone(),
                    source,
                })?;
            debug!(artifact = %artifact.display(), "removed stale artifact");
        }
        Ok(artifacts.len())
    }

    async fn compile(&self, dir: &Path, source: &Path) -> Result<(), HarnessError> {
        debug!(tool = %self.config.compiler, source = %source.display(), "compiling");
        let output = Command::new(&self.config.compiler)
            .args(&self.config.args)
            .arg(source)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| HarnessError::BuildTool {
                tool: self.config.compiler.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(HarnessError::BuildFailed {
                file: source.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Regular files directly inside `dir` ending in `.<extension>`, sorted.
async fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, HarnessError> {
    let io_err = |source| HarnessError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_err)?;
    let mut found = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
        let path = entry.path();
        let matches = path
            .extension()
            .is_some_and(|ext| ext.to_string_lossy() == extension);
        if matches && entry.file_type().await.map_err(io_err)?.is_file() {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
