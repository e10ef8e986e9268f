// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jw-adapters: job sources, notifiers and the alert inbox

pub mod aws;
pub mod inbox;
pub mod notify;
pub mod source;
pub mod subprocess;

pub use aws::AwsCli;
pub use inbox::{AlertInbox, InboundAlert, SqsInbox, TransportError};
pub use notify::{DesktopNotifier, Notifier, NotifyError, SqsNotifier};
pub use source::{BatchQueueSource, JobSource, LocalRunsSource, SourceError};

#[cfg(any(test, feature = "test-support"))]
pub use inbox::FakeInbox;
#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifier, NotifyCall};
#[cfg(any(test, feature = "test-support"))]
pub use source::FakeSource;
