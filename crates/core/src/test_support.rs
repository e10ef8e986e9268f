// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{FailurePolicy, JobRecord, JobStatus};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core types.
pub mod strategies {
    use crate::job::JobStatus;
    use proptest::prelude::*;

    pub fn arb_job_status() -> impl Strategy<Value = JobStatus> {
        prop_oneof![
            Just(JobStatus::Submitted),
            Just(JobStatus::Pending),
            Just(JobStatus::Runnable),
            Just(JobStatus::Starting),
            Just(JobStatus::Running),
            Just(JobStatus::Succeeded),
            Just(JobStatus::Failed),
            Just(JobStatus::Unknown),
        ]
    }
}

// ── Fixture factories ─────────────────────────────────────────────────

/// Policy flagging `Error` lines, with no excludes and no skip filter.
pub fn error_policy() -> FailurePolicy {
    FailurePolicy::new(["Error"], Vec::<String>::new())
}

pub fn failed_batch_job(id: &str, name: &str) -> JobRecord {
    JobRecord::batch(id, name, JobStatus::Failed)
}
