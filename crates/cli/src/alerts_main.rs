// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! jobwatch-alerts - desktop notifications for queued alerts

use clap::Parser;
use jobwatch::commands::alerts::{self, AlertsArgs};
use jobwatch::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = AlertsArgs::parse();
    logging::init();
    alerts::execute(&args).await;
}
