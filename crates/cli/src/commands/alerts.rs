// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jobwatch-alerts` - show queued alerts as desktop notifications

use std::time::Duration;

use clap::Parser;
use jw_adapters::{AwsCli, DesktopNotifier, SqsInbox};

use crate::env;
use crate::poll;

#[derive(Parser, Debug)]
#[command(name = "jobwatch-alerts", version = crate::VERSION)]
#[command(about = "Pop up a desktop notification for every queued alert")]
pub struct AlertsArgs {
    /// Queue to read alerts from
    #[arg(long, default_value = env::DEFAULT_ALERT_QUEUE)]
    pub queue_name: String,

    /// Long-poll wait per receive, in seconds (SQS allows at most 20)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(0..=20))]
    pub wait_seconds: u64,
}

impl AlertsArgs {
    pub fn wait(&self) -> Duration {
        Duration::from_secs(self.wait_seconds)
    }
}

/// Poll until the process is killed.
pub async fn execute(args: &AlertsArgs) {
    let aws = AwsCli::new(env::aws_program()).with_profile(env::aws_profile(None));
    let inbox = SqsInbox::new(aws, args.queue_name.clone());
    let notifier = DesktopNotifier::new();
    poll::run(&inbox, &notifier, args.wait(), env::poll_backoff()).await;
}

#[cfg(test)]
#[path = "alerts_tests.rs"]
mod tests;
