// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sources enumerating candidate jobs and the evidence to judge them on.

mod batch;
mod local;

pub use batch::{parse_job_list, BatchQueueSource};
pub use local::LocalRunsSource;

use async_trait::async_trait;
use jw_core::{Evidence, JobRecord};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from job sources
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid log pattern `{pattern}`: {message}")]
    Pattern { pattern: String, message: String },
    #[error("{0}")]
    Command(String),
    #[error("unexpected job list output")]
    Parse(#[from] serde_json::Error),
}

/// Something that can be asked for jobs and their evidence.
///
/// Listing and evidence gathering are split so the caller can drop jobs it
/// has already alerted on before any logs are read.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Short label for logs ("local", "batch").
    fn kind(&self) -> &'static str;

    async fn jobs(&self) -> Result<Vec<JobRecord>, SourceError>;

    async fn evidence(&self, job: &JobRecord) -> Result<Evidence, SourceError>;
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{JobSource, SourceError};
    use async_trait::async_trait;
    use jw_core::{Evidence, JobId, JobOrigin, JobRecord};
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;

    struct FakeSourceState {
        jobs: Vec<JobRecord>,
        lines: HashMap<JobId, Vec<String>>,
        evidence_reads: Vec<JobId>,
        delay: Option<Duration>,
    }

    /// In-memory source for testing.
    ///
    /// Batch jobs report their status; run-dir jobs report the lines set with
    /// [`FakeSource::with_lines`] (empty when none were set).
    #[derive(Clone)]
    pub struct FakeSource {
        inner: Arc<Mutex<FakeSourceState>>,
    }

    impl Default for FakeSource {
        fn default() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeSourceState {
                    jobs: Vec::new(),
                    lines: HashMap::new(),
                    evidence_reads: Vec::new(),
                    delay: None,
                })),
            }
        }
    }

    impl FakeSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_job(self, job: JobRecord) -> Self {
            self.inner.lock().jobs.push(job);
            self
        }

        /// Add a run-dir job with the given log lines.
        pub fn with_lines(self, run: &str, lines: &[&str]) -> Self {
            {
                let mut inner = self.inner.lock();
                inner.jobs.push(JobRecord::run_dir(run, format!("/fake/{run}")));
                inner
                    .lines
                    .insert(JobId::new(run), lines.iter().map(|l| l.to_string()).collect());
            }
            self
        }

        /// Make `jobs()` sleep before answering.
        pub fn with_delay(self, delay: Duration) -> Self {
            self.inner.lock().delay = Some(delay);
            self
        }

        /// Jobs whose evidence has been requested, in order.
        pub fn evidence_reads(&self) -> Vec<JobId> {
            self.inner.lock().evidence_reads.clone()
        }
    }

    #[async_trait]
    impl JobSource for FakeSource {
        fn kind(&self) -> &'static str {
            "fake"
        }

        async fn jobs(&self) -> Result<Vec<JobRecord>, SourceError> {
            let delay = self.inner.lock().delay;
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            Ok(self.inner.lock().jobs.clone())
        }

        async fn evidence(&self, job: &JobRecord) -> Result<Evidence, SourceError> {
            let mut inner = self.inner.lock();
            inner.evidence_reads.push(job.id.clone());
            Ok(match job.origin {
                JobOrigin::Batch { status } => Evidence::Status(status),
                JobOrigin::RunDir(_) => {
                    Evidence::Lines(inner.lines.get(&job.id).cloned().unwrap_or_default())
                }
            })
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSource;
