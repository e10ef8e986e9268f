// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One check pass: list jobs, drop known ones, classify, alert, record.

use std::time::Duration;

use jw_adapters::{JobSource, Notifier};
use jw_core::{Alert, DedupStore, FailurePolicy, JobId};
use tokio::time::error::Elapsed;
use tokio::time::{timeout_at, Instant};

use crate::error::CheckError;

/// What a completed pass did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Jobs whose evidence was examined.
    pub scanned: usize,
    /// Jobs dropped because they had already alerted.
    pub skipped: usize,
    /// Jobs alerted on in this pass, in order.
    pub alerted: Vec<JobId>,
}

/// Run one pass, bounded by `timeout`.
///
/// When the deadline passes, a timeout alert is sent best-effort and
/// [`CheckError::TimedOut`] is returned. Jobs recorded before the deadline
/// stay recorded.
pub async fn run<S, N>(
    source: &S,
    policy: &FailurePolicy,
    store: &mut DedupStore,
    notifier: &N,
    host: &str,
    timeout: Duration,
) -> Result<CheckReport, CheckError>
where
    S: JobSource + ?Sized,
    N: Notifier,
{
    match scan(source, policy, store, notifier, host, timeout).await {
        Err(CheckError::TimedOut(budget)) => {
            tracing::error!(timeout_ms = budget.as_millis() as u64, "check timed out");
            if let Err(e) = notifier.send(&Alert::timeout_text(host)).await {
                tracing::warn!(error = %e, "failed to send timeout alert");
            }
            Err(CheckError::TimedOut(budget))
        }
        result => result,
    }
}

/// The pass itself, without the timeout alert.
///
/// Listing and evidence reads are cut off at the deadline, which is also
/// checked before each job. A send is never cut off: once started, it and
/// the matching `record` run to completion, so a delivered alert is always
/// recorded. A failed send aborts the pass and the job alerts again on the
/// next invocation.
pub async fn scan<S, N>(
    source: &S,
    policy: &FailurePolicy,
    store: &mut DedupStore,
    notifier: &N,
    host: &str,
    timeout: Duration,
) -> Result<CheckReport, CheckError>
where
    S: JobSource + ?Sized,
    N: Notifier,
{
    let deadline = Instant::now() + timeout;
    let overrun = |_: Elapsed| CheckError::TimedOut(timeout);

    let jobs = timeout_at(deadline, source.jobs()).await.map_err(overrun)??;
    let mut report = CheckReport::default();

    for job in jobs {
        if Instant::now() >= deadline {
            return Err(CheckError::TimedOut(timeout));
        }
        if store.already_seen(&job.id) {
            tracing::debug!(job_id = %job.id, "already alerted, skipping");
            report.skipped += 1;
            continue;
        }
        report.scanned += 1;

        let evidence = timeout_at(deadline, source.evidence(&job)).await.map_err(overrun)??;
        if !policy.is_failed(&evidence) {
            continue;
        }

        let text = Alert::failure_text(host, &job);
        notifier.send(&text).await?;
        store.record(&job.id)?;
        tracing::info!(job_id = %job.id, %text, "alert sent");
        report.alerted.push(job.id);
    }

    tracing::info!(
        source = source.kind(),
        scanned = report.scanned,
        skipped = report.skipped,
        alerted = report.alerted.len(),
        "check complete"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
