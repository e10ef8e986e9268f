// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use jw_core::Alert;
use thiserror::Error;

use crate::aws::AwsCli;
use crate::subprocess::QUEUE_COMMAND_TIMEOUT;

/// Errors delivering an alert
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("send failed: {0}")]
    SendFailed(String),
    #[error("desktop notification failed: {0}")]
    Desktop(String),
}

/// Channel that delivers alert text to a human
#[async_trait]
pub trait Notifier: Clone + Send + Sync + 'static {
    /// Deliver `text` once. Failures are not retried.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Publishes alerts to an SQS FIFO queue through the AWS CLI.
///
/// Every send carries a fresh deduplication id and the fixed group id, both
/// of which FIFO queues require.
#[derive(Debug, Clone)]
pub struct SqsNotifier {
    aws: AwsCli,
    queue_url: String,
    group_id: String,
}

impl SqsNotifier {
    pub const GROUP_ID: &'static str = "0";

    pub fn new(aws: AwsCli, queue_url: impl Into<String>) -> Self {
        Self { aws, queue_url: queue_url.into(), group_id: Self::GROUP_ID.to_string() }
    }

    /// `aws` arguments publishing `alert`, before the profile is appended.
    pub fn send_args(&self, alert: &Alert) -> Vec<String> {
        [
            "sqs",
            "send-message",
            "--queue-url",
            self.queue_url.as_str(),
            "--message-body",
            alert.text.as_str(),
            "--message-group-id",
            self.group_id.as_str(),
            "--message-deduplication-id",
            alert.dedup_token.as_str(),
        ]
        .map(String::from)
        .to_vec()
    }
}

#[async_trait]
impl Notifier for SqsNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let alert = Alert::new(text);
        self.aws
            .run(&self.send_args(&alert), QUEUE_COMMAND_TIMEOUT, "sqs send-message")
            .await
            .map_err(NotifyError::SendFailed)?;
        tracing::info!(queue_url = %self.queue_url, dedup = %alert.dedup_token, "alert queued");
        Ok(())
    }
}

/// Shows alerts as desktop notifications (title `Alert`, sound `Frog`).
///
/// On macOS the bundle identifier is set up front; otherwise the first
/// notification looks it up through AppleScript, which hangs in a process
/// without Automation permission.
#[derive(Clone, Debug)]
pub struct DesktopNotifier {
    title: String,
    sound: String,
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopNotifier {
    pub const TITLE: &'static str = "Alert";
    pub const SOUND: &'static str = "Frog";

    pub fn new() -> Self {
        #[cfg(target_os = "macos")]
        {
            let _ = mac_notification_sys::set_application("com.apple.Terminal");
        }
        Self { title: Self::TITLE.to_string(), sound: Self::SOUND.to_string() }
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let title = self.title.clone();
        let sound = self.sound.clone();
        let message = text.to_string();
        // notify_rust::Notification::show() is synchronous on macOS.
        tokio::task::spawn_blocking(move || {
            tracing::info!(%title, %message, "sending desktop notification");
            notify_rust::Notification::new()
                .summary(&title)
                .body(&message)
                .sound_name(&sound)
                .show()
                .map(|_| ())
                .map_err(|e| NotifyError::Desktop(e.to_string()))
        })
        .await
        .map_err(|e| NotifyError::Desktop(e.to_string()))?
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{Notifier, NotifyError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;

    /// Recorded notification
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct NotifyCall {
        pub text: String,
    }

    struct FakeNotifyState {
        calls: Vec<NotifyCall>,
        fail_with: Option<String>,
        latency: Option<Duration>,
    }

    /// Fake notifier for testing
    #[derive(Clone)]
    pub struct FakeNotifier {
        inner: Arc<Mutex<FakeNotifyState>>,
    }

    impl Default for FakeNotifier {
        fn default() -> Self {
            let state = FakeNotifyState { calls: Vec::new(), fail_with: None, latency: None };
            Self { inner: Arc::new(Mutex::new(state)) }
        }
    }

    impl FakeNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every subsequent send fail with `message`.
        pub fn fail_with(&self, message: &str) {
            self.inner.lock().fail_with = Some(message.to_string());
        }

        /// Make each successful send take `latency` after it is recorded,
        /// like a queue call that is accepted but slow to return.
        pub fn with_latency(self, latency: Duration) -> Self {
            self.inner.lock().latency = Some(latency);
            self
        }

        /// Let sends succeed again.
        pub fn recover(&self) {
            self.inner.lock().fail_with = None;
        }

        /// Get all successfully delivered notifications
        pub fn calls(&self) -> Vec<NotifyCall> {
            self.inner.lock().calls.clone()
        }

        pub fn texts(&self) -> Vec<String> {
            self.inner.lock().calls.iter().map(|c| c.text.clone()).collect()
        }
    }

    #[async_trait]
    impl Notifier for FakeNotifier {
        async fn send(&self, text: &str) -> Result<(), NotifyError> {
            let latency = {
                let mut inner = self.inner.lock();
                if let Some(ref message) = inner.fail_with {
                    return Err(NotifyError::SendFailed(message.clone()));
                }
                inner.calls.push(NotifyCall { text: text.to_string() });
                inner.latency
            };
            if let Some(latency) = latency {
                tokio::time::sleep(latency).await;
            }
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNotifier, NotifyCall};

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
