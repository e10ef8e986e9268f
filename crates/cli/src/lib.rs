// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jobwatch: one-shot failure checker and the alert queue poller

pub mod check;
pub mod commands;
pub mod env;
pub mod error;
pub mod logging;
pub mod poll;

pub use check::CheckReport;
pub use error::{CheckError, ConfigError, PollError};

/// Version string shown by `--version`.
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));
