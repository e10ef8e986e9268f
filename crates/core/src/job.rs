// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identity, status and the evidence a job is classified on.

use serde::Deserialize;
use std::borrow::Borrow;
use std::fmt;
use std::path::PathBuf;

/// Identifier of a watched job: a run directory name or a batch job id.
///
/// This is the dedup key, so it must be stable across invocations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for JobId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for JobId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Borrow<str> for JobId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Status reported by AWS Batch for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Submitted,
    Pending,
    Runnable,
    Starting,
    Running,
    Succeeded,
    Failed,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// Terminal failure, the only status that alerts.
    pub fn is_failed(self) -> bool {
        self == JobStatus::Failed
    }
}

crate::simple_display! {
    JobStatus {
        Submitted => "SUBMITTED",
        Pending => "PENDING",
        Runnable => "RUNNABLE",
        Starting => "STARTING",
        Running => "RUNNING",
        Succeeded => "SUCCEEDED",
        Failed => "FAILED",
        Unknown => "UNKNOWN",
    }
}

/// Where a job was found, which decides how its evidence is gathered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOrigin {
    /// A run directory holding `*.log` files.
    RunDir(PathBuf),
    /// A job listed by the batch scheduler with its reported status.
    Batch { status: JobStatus },
}

/// A candidate job enumerated by a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub id: JobId,
    /// Human-readable name used in alert text.
    pub name: String,
    pub origin: JobOrigin,
}

impl JobRecord {
    pub fn run_dir(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let name = name.into();
        Self { id: JobId::new(name.clone()), name, origin: JobOrigin::RunDir(path.into()) }
    }

    pub fn batch(id: impl Into<String>, name: impl Into<String>, status: JobStatus) -> Self {
        Self { id: JobId::new(id), name: name.into(), origin: JobOrigin::Batch { status } }
    }
}

/// What a job is judged on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    /// Concatenated lines of the job's log files.
    Lines(Vec<String>),
    /// Status reported by the scheduler.
    Status(JobStatus),
}

impl Evidence {
    pub fn is_empty(&self) -> bool {
        match self {
            Evidence::Lines(lines) => lines.is_empty(),
            Evidence::Status(_) => false,
        }
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
