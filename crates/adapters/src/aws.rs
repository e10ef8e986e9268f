// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation of the AWS command-line client.
//!
//! Credentials, region and profiles are resolved by the CLI itself; this
//! module only assembles argument lists and runs them.

use std::time::Duration;

use tokio::process::Command;

use crate::subprocess::check_output;

/// Handle on the `aws` executable plus the profile to run it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsCli {
    program: String,
    profile: Option<String>,
}

impl Default for AwsCli {
    fn default() -> Self {
        Self { program: "aws".to_string(), profile: None }
    }
}

impl AwsCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), profile: None }
    }

    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile.filter(|p| !p.is_empty());
        self
    }

    /// Full argument list for `args`, with the profile appended when set.
    pub fn args<S: AsRef<str>>(&self, args: &[S]) -> Vec<String> {
        let mut out: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();
        if let Some(ref profile) = self.profile {
            out.push("--profile".to_string());
            out.push(profile.clone());
        }
        out
    }

    pub fn command<S: AsRef<str>>(&self, args: &[S]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(args));
        cmd
    }

    /// Run and return stdout; non-zero exit, spawn failure and timeout are errors.
    pub async fn run<S: AsRef<str>>(
        &self,
        args: &[S],
        timeout: Duration,
        description: &str,
    ) -> Result<String, String> {
        tracing::debug!(program = %self.program, description, "running aws cli");
        check_output(self.command(args), timeout, description).await
    }
}

#[cfg(test)]
#[path = "aws_tests.rs"]
mod tests;
