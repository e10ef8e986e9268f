// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jw-core: job records, failure classification and the dedup store for jobwatch

pub mod macros;

pub mod alert;
pub mod job;
pub mod policy;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use alert::Alert;
pub use job::{Evidence, JobId, JobOrigin, JobRecord, JobStatus};
pub use policy::{FailurePolicy, PolicyError};
pub use store::{DedupStore, StoreError};
