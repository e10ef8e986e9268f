// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inbound side of the alert queue, read by the poller.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::aws::AwsCli;
use crate::subprocess::QUEUE_COMMAND_TIMEOUT;

/// Errors talking to the queue
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Command(String),
    #[error("unexpected queue response")]
    Parse(#[from] serde_json::Error),
}

/// A received message awaiting acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundAlert {
    pub body: String,
    /// Handle used to delete the message once shown.
    pub receipt_handle: String,
}

#[async_trait]
pub trait AlertInbox: Send + Sync {
    /// Long-poll for messages, waiting at most `wait` for the first one.
    async fn receive(&self, wait: Duration) -> Result<Vec<InboundAlert>, TransportError>;

    /// Remove a handled message from the queue.
    async fn acknowledge(&self, alert: &InboundAlert) -> Result<(), TransportError>;
}

/// SQS queue addressed by name, read through the AWS CLI.
///
/// The queue URL is looked up on first use and cached.
#[derive(Debug)]
pub struct SqsInbox {
    aws: AwsCli,
    queue_name: String,
    url: OnceCell<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct QueueUrlResponse {
    queue_url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ReceiveResponse {
    #[serde(default)]
    messages: Vec<ReceivedMessage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ReceivedMessage {
    body: String,
    receipt_handle: String,
}

/// Parse `receive-message` output. The CLI prints nothing when the queue is empty.
pub fn parse_received(stdout: &str) -> Result<Vec<InboundAlert>, TransportError> {
    if stdout.trim().is_empty() {
        return Ok(Vec::new());
    }
    let response: ReceiveResponse = serde_json::from_str(stdout)?;
    Ok(response
        .messages
        .into_iter()
        .map(|m| InboundAlert { body: m.body, receipt_handle: m.receipt_handle })
        .collect())
}

impl SqsInbox {
    pub fn new(aws: AwsCli, queue_name: impl Into<String>) -> Self {
        Self { aws, queue_name: queue_name.into(), url: OnceCell::new() }
    }

    async fn queue_url(&self) -> Result<&str, TransportError> {
        let url = self
            .url
            .get_or_try_init(|| async {
                let stdout = self
                    .aws
                    .run(
                        &["sqs", "get-queue-url", "--queue-name", self.queue_name.as_str()],
                        QUEUE_COMMAND_TIMEOUT,
                        "sqs get-queue-url",
                    )
                    .await
                    .map_err(TransportError::Command)?;
                let response: QueueUrlResponse = serde_json::from_str(&stdout)?;
                tracing::info!(queue = %self.queue_name, url = %response.queue_url, "resolved queue");
                Ok::<_, TransportError>(response.queue_url)
            })
            .await?;
        Ok(url.as_str())
    }
}

#[async_trait]
impl AlertInbox for SqsInbox {
    async fn receive(&self, wait: Duration) -> Result<Vec<InboundAlert>, TransportError> {
        let url = self.queue_url().await?;
        let wait_secs = wait.as_secs().to_string();
        let stdout = self
            .aws
            .run(
                &[
                    "sqs",
                    "receive-message",
                    "--queue-url",
                    url,
                    "--wait-time-seconds",
                    wait_secs.as_str(),
                ],
                wait + QUEUE_COMMAND_TIMEOUT,
                "sqs receive-message",
            )
            .await
            .map_err(TransportError::Command)?;
        parse_received(&stdout)
    }

    async fn acknowledge(&self, alert: &InboundAlert) -> Result<(), TransportError> {
        let url = self.queue_url().await?;
        self.aws
            .run(
                &[
                    "sqs",
                    "delete-message",
                    "--queue-url",
                    url,
                    "--receipt-handle",
                    alert.receipt_handle.as_str(),
                ],
                QUEUE_COMMAND_TIMEOUT,
                "sqs delete-message",
            )
            .await
            .map_err(TransportError::Command)?;
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{AlertInbox, InboundAlert, TransportError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Default)]
    struct FakeInboxState {
        script: VecDeque<Result<Vec<InboundAlert>, String>>,
        acknowledged: Vec<String>,
        receives: usize,
    }

    /// Scripted inbox for testing.
    ///
    /// Each `receive` pops the next scripted batch or error; an exhausted
    /// script waits out the poll interval and yields an empty batch.
    #[derive(Clone, Default)]
    pub struct FakeInbox {
        inner: Arc<Mutex<FakeInboxState>>,
    }

    impl FakeInbox {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push_batch(&self, bodies: &[&str]) {
            let mut inner = self.inner.lock();
            let start = inner.script.len();
            let batch = bodies
                .iter()
                .enumerate()
                .map(|(i, b)| InboundAlert {
                    body: b.to_string(),
                    receipt_handle: format!("rh-{}-{}", start, i),
                })
                .collect();
            inner.script.push_back(Ok(batch));
        }

        pub fn push_error(&self, message: &str) {
            self.inner.lock().script.push_back(Err(message.to_string()));
        }

        /// Receipt handles acknowledged so far.
        pub fn acknowledged(&self) -> Vec<String> {
            self.inner.lock().acknowledged.clone()
        }

        pub fn receives(&self) -> usize {
            self.inner.lock().receives
        }
    }

    #[async_trait]
    impl AlertInbox for FakeInbox {
        async fn receive(&self, wait: Duration) -> Result<Vec<InboundAlert>, TransportError> {
            let next = {
                let mut inner = self.inner.lock();
                inner.receives += 1;
                inner.script.pop_front()
            };
            match next {
                Some(Ok(batch)) => Ok(batch),
                Some(Err(message)) => Err(TransportError::Command(message)),
                None => {
                    // Behave like an empty long poll.
                    tokio::time::sleep(wait).await;
                    Ok(Vec::new())
                }
            }
        }

        async fn acknowledge(&self, alert: &InboundAlert) -> Result<(), TransportError> {
            self.inner.lock().acknowledged.push(alert.receipt_handle.clone());
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeInbox;

#[cfg(test)]
#[path = "inbox_tests.rs"]
mod tests;
