// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alert poller: receive queued alerts, show them, then acknowledge.

use std::time::Duration;

use jw_adapters::{AlertInbox, Notifier};

use crate::error::PollError;

/// One receive/show/acknowledge round. Returns how many alerts were shown.
///
/// A message is acknowledged only after it was shown, so a failure leaves it
/// on the queue for redelivery.
pub async fn poll_once<I, N>(inbox: &I, notifier: &N, wait: Duration) -> Result<usize, PollError>
where
    I: AlertInbox + ?Sized,
    N: Notifier,
{
    let alerts = inbox.receive(wait).await?;
    let mut shown = 0;
    for alert in &alerts {
        notifier.send(&alert.body).await?;
        inbox.acknowledge(alert).await?;
        tracing::info!(body = %alert.body, "alert shown");
        shown += 1;
    }
    Ok(shown)
}

/// Poll forever. Errors are logged and retried after `backoff`.
pub async fn run<I, N>(inbox: &I, notifier: &N, wait: Duration, backoff: Duration)
where
    I: AlertInbox + ?Sized,
    N: Notifier,
{
    tracing::info!(wait_secs = wait.as_secs(), "polling for alerts");
    loop {
        match poll_once(inbox, notifier, wait).await {
            Ok(0) => tracing::debug!("no alerts"),
            Ok(shown) => tracing::debug!(shown, "poll round complete"),
            Err(e) => {
                let cause = std::error::Error::source(&e).map(ToString::to_string);
                tracing::warn!(error = %e, cause = cause.as_deref().unwrap_or(""), "poll failed, backing off");
                tokio::time::sleep(backoff).await;
            }
        }
    }
}

#[cfg(test)]
#[path = "poll_tests.rs"]
mod tests;
