// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound alert messages.

use uuid::Uuid;

use crate::job::{JobOrigin, JobRecord};

/// A single alert, built fresh for every send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub text: String,
    /// Unique per send; FIFO queues drop messages that reuse one.
    pub dedup_token: String,
}

impl Alert {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), dedup_token: Uuid::new_v4().as_u128().to_string() }
    }

    /// Alert text for a job judged failed.
    pub fn failure_text(host: &str, job: &JobRecord) -> String {
        match job.origin {
            JobOrigin::RunDir(_) => format!("Host {} run {} broken", host, job.name),
            JobOrigin::Batch { .. } => format!("AWS run {} ({}) failed", job.name, job.id),
        }
    }

    /// Alert text sent when a check overruns its deadline.
    pub fn timeout_text(host: &str) -> String {
        format!("Timed out while checking logs on {}", host)
    }
}

#[cfg(test)]
#[path = "alert_tests.rs"]
mod tests;
