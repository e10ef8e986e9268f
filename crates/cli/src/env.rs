// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// AWS profile used for queue sends when `JW_AWS_PROFILE` is unset.
pub const DEFAULT_SEND_PROFILE: &str = "sqs_alerts";

/// Queue the poller reads when `--queue-name` is not given.
pub const DEFAULT_ALERT_QUEUE: &str = "alerts.fifo";

/// Dedup state file: JW_STATE_PATH > `state` next to the executable
pub fn state_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = std::env::var("JW_STATE_PATH") {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    let exe = std::env::current_exe().map_err(ConfigError::NoStateDir)?;
    let dir = exe.parent().map(PathBuf::from).unwrap_or_default();
    Ok(dir.join("state"))
}

/// URL of the queue alerts are published to. No default.
pub fn queue_url() -> Option<String> {
    std::env::var("JW_QUEUE_URL").ok().filter(|s| !s.is_empty())
}

/// `aws` executable (default: `aws` on PATH)
pub fn aws_program() -> String {
    std::env::var("JW_AWS_CLI").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| "aws".to_string())
}

/// AWS profile, falling back to `default` when `JW_AWS_PROFILE` is unset.
///
/// Setting it to the empty string runs without `--profile`.
pub fn aws_profile(default: Option<&str>) -> Option<String> {
    match std::env::var("JW_AWS_PROFILE") {
        Ok(profile) => Some(profile).filter(|p| !p.is_empty()),
        Err(_) => default.map(String::from),
    }
}

/// AWS Batch job queue to watch (default `q`)
pub fn batch_job_queue() -> String {
    std::env::var("JW_BATCH_JOB_QUEUE")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "q".to_string())
}

/// Command listing failed batch jobs as `list-jobs` JSON.
pub fn batch_list_command() -> String {
    std::env::var("JW_BATCH_LIST_COMMAND").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| {
        jw_adapters::BatchQueueSource::failed_jobs_command(&aws_program(), &batch_job_queue())
    })
}

/// Watchdog for one check run (default 10s, configurable via `JW_CHECK_TIMEOUT_MS`).
pub fn check_timeout() -> Duration {
    std::env::var("JW_CHECK_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_secs(10))
}

/// Pause after a failed poll (default 1s, configurable via `JW_POLL_BACKOFF_MS`).
pub fn poll_backoff() -> Duration {
    std::env::var("JW_POLL_BACKOFF_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_secs(1))
}

/// Tracing filter directive (default `info`)
pub fn log_filter() -> String {
    std::env::var("JW_LOG").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| "info".to_string())
}

/// Name of this machine, for alert text.
pub fn host_name() -> String {
    nix::unistd::gethostname()
        .ok()
        .and_then(|name| name.into_string().ok())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
