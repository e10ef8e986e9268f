// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run directories on local disk, judged by their `*.log` files.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jw_core::{Evidence, JobOrigin, JobRecord};

use super::{JobSource, SourceError};

/// Treats each immediate subdirectory of `root` as one job.
///
/// ```text
/// root/
///   run-2026-10-01/    -> job "run-2026-10-01"
///     train.log
///     eval.log
///   nightly-test-3/    -> skipped when skip = "-test-"
/// ```
#[derive(Debug, Clone)]
pub struct LocalRunsSource {
    root: PathBuf,
    skip: String,
}

impl LocalRunsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), skip: String::new() }
    }

    /// Skip run directories whose name contains `skip`. Empty disables.
    pub fn with_skip(mut self, skip: impl Into<String>) -> Self {
        self.skip = skip.into();
        self
    }

    fn skips(&self, name: &str) -> bool {
        !self.skip.is_empty() && name.contains(self.skip.as_str())
    }
}

#[async_trait]
impl JobSource for LocalRunsSource {
    fn kind(&self) -> &'static str {
        "local"
    }

    async fn jobs(&self) -> Result<Vec<JobRecord>, SourceError> {
        let io_err = |source| SourceError::Io { path: self.root.clone(), source };
        let mut entries = tokio::fs::read_dir(&self.root).await.map_err(io_err)?;

        let mut jobs = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let path = entry.path();
            // Follow symlinks, a linked run directory is still a run.
            let is_dir = tokio::fs::metadata(&path).await.map(|m| m.is_dir()).unwrap_or(false);
            if !is_dir {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.skips(&name) {
                tracing::debug!(run = %name, "skipping filtered run directory");
                continue;
            }
            jobs.push(JobRecord::run_dir(name, path));
        }
        jobs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(jobs)
    }

    async fn evidence(&self, job: &JobRecord) -> Result<Evidence, SourceError> {
        let dir = match job.origin {
            JobOrigin::RunDir(ref dir) => dir,
            JobOrigin::Batch { status } => return Ok(Evidence::Status(status)),
        };

        let mut lines = Vec::new();
        for log in log_files(dir)? {
            let bytes = tokio::fs::read(&log)
                .await
                .map_err(|source| SourceError::Io { path: log.clone(), source })?;
            lines.extend(String::from_utf8_lossy(&bytes).lines().map(String::from));
        }
        Ok(Evidence::Lines(lines))
    }
}

/// `*.log` files directly inside `dir`, sorted.
fn log_files(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let pattern = format!("{}/*.log", glob::Pattern::escape(&dir.to_string_lossy()));
    let paths = glob::glob(&pattern).map_err(|e| SourceError::Pattern {
        pattern: pattern.clone(),
        message: e.msg.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => {
                let path = e.path().to_path_buf();
                return Err(SourceError::Io { path, source: e.into_error() });
            }
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
