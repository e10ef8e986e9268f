// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup shared by both binaries.

use tracing_subscriber::EnvFilter;

use crate::env;

/// Install a stderr fmt subscriber filtered by `JW_LOG`.
///
/// An unparseable filter falls back to `info`. Calling twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_new(env::log_filter()).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
