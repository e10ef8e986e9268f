// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Running external commands with a bounded wall-clock budget.

use std::process::Output;
use std::time::Duration;

use tokio::process::Command;

/// Budget for job-listing commands.
pub const LIST_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Budget for a single queue send/delete call.
pub const QUEUE_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Run `cmd` to completion, killing it if it outlives `timeout`.
///
/// The error string names `description` so callers can surface it as-is.
pub async fn run_with_timeout(
    mut cmd: Command,
    timeout: Duration,
    description: &str,
) -> Result<Output, String> {
    cmd.kill_on_drop(true);
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(format!("{} failed to run: {}", description, e)),
        Err(_) => Err(format!("{} timed out after {}s", description, timeout.as_secs())),
    }
}

/// Like [`run_with_timeout`], but a non-zero exit is an error carrying stderr.
///
/// Returns stdout decoded lossily.
pub async fn check_output(
    cmd: Command,
    timeout: Duration,
    description: &str,
) -> Result<String, String> {
    let output = run_with_timeout(cmd, timeout, description).await?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("{} exited with {}: {}", description, output.status, stderr.trim()));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// A `bash -c` command with fail-fast settings, for user-supplied scripts.
pub fn shell_command(script: &str) -> Command {
    let mut cmd = Command::new("bash");
    cmd.arg("-c").arg(format!("set -euo pipefail\n{script}"));
    cmd
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
