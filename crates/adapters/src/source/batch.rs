// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failed jobs reported by an AWS Batch job queue.

use std::time::Duration;

use async_trait::async_trait;
use jw_core::{Evidence, JobOrigin, JobRecord, JobStatus};
use serde::Deserialize;

use super::{JobSource, SourceError};
use crate::subprocess::{check_output, shell_command, LIST_COMMAND_TIMEOUT};

/// Runs a job-listing command and reads its `jobSummaryList`.
///
/// The command is expected to be scoped to failed jobs already, e.g.
/// `aws batch list-jobs --job-queue q --job-status FAILED`.
#[derive(Debug, Clone)]
pub struct BatchQueueSource {
    list_command: String,
    timeout: Duration,
}

impl BatchQueueSource {
    pub fn new(list_command: impl Into<String>) -> Self {
        Self { list_command: list_command.into(), timeout: LIST_COMMAND_TIMEOUT }
    }

    /// Default listing command for `queue` through the given `aws` executable.
    pub fn failed_jobs_command(aws_program: &str, queue: &str) -> String {
        format!("{aws_program} batch list-jobs --job-queue {queue} --job-status FAILED")
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListJobsOutput {
    job_summary_list: Vec<JobSummary>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobSummary {
    job_id: String,
    job_name: String,
    // The listing is scoped to FAILED, so an omitted status means failed.
    #[serde(default = "failed")]
    status: JobStatus,
}

fn failed() -> JobStatus {
    JobStatus::Failed
}

/// Parse `list-jobs` JSON output into job records.
pub fn parse_job_list(json: &str) -> Result<Vec<JobRecord>, SourceError> {
    let output: ListJobsOutput = serde_json::from_str(json)?;
    Ok(output
        .job_summary_list
        .into_iter()
        .map(|s| JobRecord::batch(s.job_id, s.job_name, s.status))
        .collect())
}

#[async_trait]
impl JobSource for BatchQueueSource {
    fn kind(&self) -> &'static str {
        "batch"
    }

    async fn jobs(&self) -> Result<Vec<JobRecord>, SourceError> {
        tracing::info!(command = %self.list_command, "listing batch jobs");
        let stdout = check_output(shell_command(&self.list_command), self.timeout, "job list")
            .await
            .map_err(SourceError::Command)?;
        let jobs = parse_job_list(&stdout)?;
        tracing::debug!(count = jobs.len(), "listed batch jobs");
        Ok(jobs)
    }

    async fn evidence(&self, job: &JobRecord) -> Result<Evidence, SourceError> {
        Ok(match job.origin {
            JobOrigin::Batch { status } => Evidence::Status(status),
            // Not produced by this source; an unknown status never alerts.
            JobOrigin::RunDir(_) => Evidence::Status(JobStatus::Unknown),
        })
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
