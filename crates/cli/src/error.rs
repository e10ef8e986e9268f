// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level error types for the checker and the poller.

use std::error::Error as StdError;
use std::time::Duration;

use jw_adapters::{NotifyError, SourceError, TransportError};
use jw_core::{PolicyError, StoreError};
use thiserror::Error;

/// Invalid invocation, detected before any job is looked at
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no check mode specified: pass --aws_batch_jobs or --local_runs_dir <dir>")]
    NoMode,
    #[error("--aws_batch_jobs and --local_runs_dir are mutually exclusive")]
    ConflictingModes,
    #[error("JW_QUEUE_URL is not set; alerts have nowhere to go")]
    MissingQueueUrl,
    #[error("cannot locate the executable to place the state file next to it")]
    NoStateDir(#[source] std::io::Error),
    #[error("failed to load policy")]
    Policy(#[from] PolicyError),
}

/// Why a check run ended without completing
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("invalid configuration")]
    Config(#[from] ConfigError),
    #[error("failed to list jobs")]
    Source(#[from] SourceError),
    #[error("failed to deliver alert")]
    Notify(#[from] NotifyError),
    #[error("failed to update dedup state")]
    Store(#[from] StoreError),
    #[error("check did not finish within {}ms", .0.as_millis())]
    TimedOut(Duration),
}

/// A single poll iteration failed; the poller logs it and tries again
#[derive(Debug, Error)]
pub enum PollError {
    #[error("queue unreachable")]
    Transport(#[from] TransportError),
    #[error("failed to show alert")]
    Notify(#[from] NotifyError),
}

/// Render an error and its causes, one per line.
pub fn chain(err: &dyn StdError) -> String {
    let mut out = format!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    out
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
