// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jobwatch` - one-shot failure check

use std::path::PathBuf;

use clap::Parser;
use jw_adapters::{AwsCli, BatchQueueSource, JobSource, LocalRunsSource, SqsNotifier};
use jw_core::{DedupStore, FailurePolicy};

use crate::check::{self, CheckReport};
use crate::env;
use crate::error::{CheckError, ConfigError};

#[derive(Parser, Debug)]
#[command(name = "jobwatch", version = crate::VERSION)]
#[command(about = "Alert once on every failed job")]
pub struct CheckArgs {
    /// Check the AWS Batch queue for failed jobs
    #[arg(long = "aws_batch_jobs")]
    pub aws_batch_jobs: bool,

    /// Check every run directory under DIR for failures in its logs
    #[arg(long = "local_runs_dir", value_name = "DIR")]
    pub local_runs_dir: Option<PathBuf>,

    /// TOML file overriding the include/exclude/skip patterns
    #[arg(long, value_name = "FILE")]
    pub policy: Option<PathBuf>,
}

/// Where jobs come from for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    AwsBatch,
    LocalRuns(PathBuf),
}

impl CheckArgs {
    /// Exactly one mode must be chosen.
    pub fn mode(&self) -> Result<Mode, ConfigError> {
        match (self.aws_batch_jobs, &self.local_runs_dir) {
            (true, Some(_)) => Err(ConfigError::ConflictingModes),
            (true, None) => Ok(Mode::AwsBatch),
            (false, Some(dir)) => Ok(Mode::LocalRuns(dir.clone())),
            (false, None) => Err(ConfigError::NoMode),
        }
    }

    fn policy(&self) -> Result<FailurePolicy, ConfigError> {
        match &self.policy {
            Some(path) => Ok(FailurePolicy::load(path)?),
            None => Ok(FailurePolicy::default()),
        }
    }
}

/// Build the source for `mode`.
pub fn source(mode: &Mode, policy: &FailurePolicy) -> Box<dyn JobSource> {
    match mode {
        Mode::LocalRuns(dir) => Box::new(LocalRunsSource::new(dir).with_skip(policy.skip.clone())),
        Mode::AwsBatch => Box::new(BatchQueueSource::new(env::batch_list_command())),
    }
}

/// Resolve configuration from flags and environment, then run one pass.
pub async fn execute(args: &CheckArgs) -> Result<CheckReport, CheckError> {
    let mode = args.mode()?;
    let policy = args.policy()?;
    let queue_url = env::queue_url().ok_or(ConfigError::MissingQueueUrl)?;

    let aws = AwsCli::new(env::aws_program())
        .with_profile(env::aws_profile(Some(env::DEFAULT_SEND_PROFILE)));
    let notifier = SqsNotifier::new(aws, queue_url);
    let mut store = DedupStore::load(env::state_path()?)?;
    let host = env::host_name();
    let source = source(&mode, &policy);

    tracing::debug!(?mode, state = %store.path().display(), known = store.len(), "starting check");
    check::run(source.as_ref(), &policy, &mut store, &notifier, &host, env::check_timeout()).await
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
