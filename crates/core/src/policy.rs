// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Include/exclude substring policy deciding whether a job failed.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::job::Evidence;

/// Directory-name fragment marking test runs, which are never watched.
pub const DEFAULT_SKIP: &str = "-test-";

/// Errors loading a policy file
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("failed to read policy {}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid policy {}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

/// Substring policy for log-based failure detection.
///
/// A line signals failure when it contains any `include` substring and no
/// `exclude` substring. A line matching both is benign: exclude wins.
///
/// Loaded from TOML; every key is optional and falls back to the default:
///
/// ```toml
/// include = ["Error", "Exception"]
/// exclude = ["AttributeError: _cache"]
/// skip = "-test-"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FailurePolicy {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    /// Run directories whose name contains this are skipped. Empty disables.
    pub skip: String,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self {
            include: ["exception", "Exception", "error", "Error"].map(String::from).to_vec(),
            exclude: ["concatenating videos to", "AttributeError: _cache"]
                .map(String::from)
                .to_vec(),
            skip: DEFAULT_SKIP.to_string(),
        }
    }
}

impl FailurePolicy {
    /// Policy with the given substring sets and no directory skipping.
    pub fn new<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            include: include.into_iter().map(Into::into).collect(),
            exclude: exclude.into_iter().map(Into::into).collect(),
            skip: String::new(),
        }
    }

    pub fn with_skip(mut self, skip: impl Into<String>) -> Self {
        self.skip = skip.into();
        self
    }

    /// Load a policy from a TOML file.
    pub fn load(path: &Path) -> Result<Self, PolicyError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| PolicyError::Read { path: path.to_path_buf(), source })?;
        toml::from_str(&text).map_err(|source| PolicyError::Parse { path: path.to_path_buf(), source })
    }

    /// Whether a single line signals failure.
    pub fn line_matches(&self, line: &str) -> bool {
        self.include.iter().any(|p| line.contains(p.as_str()))
            && !self.exclude.iter().any(|p| line.contains(p.as_str()))
    }

    /// Whether any line signals failure. Stops at the first qualifying line.
    pub fn classify<S: AsRef<str>>(&self, lines: &[S]) -> bool {
        lines.iter().any(|line| self.line_matches(line.as_ref()))
    }

    /// Classify evidence: substring policy for logs, status equality for batch jobs.
    pub fn is_failed(&self, evidence: &Evidence) -> bool {
        match evidence {
            Evidence::Lines(lines) => self.classify(lines),
            Evidence::Status(status) => status.is_failed(),
        }
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
