//! Shared helpers for specs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tempfile::TempDir;

pub use assert_cmd::Command;

/// Path to a workspace binary, building the CLI package on first use.
pub fn binary(name: &str) -> PathBuf {
    static BUILT: OnceLock<bool> = OnceLock::new();
    BUILT.get_or_init(|| {
        let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
        std::process::Command::new(cargo)
            .args(["build", "--quiet", "-p", "jobwatch", "--bins"])
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    });
    assert_cmd::cargo::cargo_bin(name)
}

/// `jobwatch` with a clean environment.
pub fn cli() -> Cli {
    Cli::new("jobwatch")
}

/// `jobwatch-alerts` with a clean environment.
pub fn alerts_cli() -> Cli {
    Cli::new("jobwatch-alerts")
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    fn new(bin: &str) -> Self {
        let mut cmd = Command::new(binary(bin));
        for var in [
            "JW_STATE_PATH",
            "JW_QUEUE_URL",
            "JW_AWS_CLI",
            "JW_AWS_PROFILE",
            "JW_BATCH_JOB_QUEUE",
            "JW_BATCH_LIST_COMMAND",
            "JW_CHECK_TIMEOUT_MS",
            "JW_POLL_BACKOFF_MS",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("JW_LOG", "debug");
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Point the checker at `project`'s state file, fake `aws` and queue.
    pub fn in_project(self, project: &Project) -> Self {
        self.env("JW_STATE_PATH", project.state_path())
            .env("JW_AWS_CLI", project.aws_path())
            .env("JW_QUEUE_URL", Project::QUEUE_URL)
    }

    /// Run without asserting on the exit status.
    pub fn run(mut self) -> Outcome {
        Outcome::from(self.cmd.output().unwrap())
    }

    pub fn passes(self) -> Outcome {
        let outcome = self.run();
        assert!(outcome.success, "expected success, stderr:\n{}", outcome.stderr);
        outcome
    }

    /// Expect the error exit status (1).
    pub fn fails(self) -> Outcome {
        let outcome = self.run();
        assert!(!outcome.success, "expected failure, stderr:\n{}", outcome.stderr);
        assert_eq!(outcome.code, Some(1));
        outcome
    }
}

pub struct Outcome {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Outcome {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Outcome {
    pub fn stdout_has(&self, needle: &str) -> &Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(&self, needle: &str) -> &Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }
}

/// Scratch directory holding run logs, the state file and a fake `aws`.
///
/// The fake records one line per invocation in `aws.log`, answers `batch`
/// calls with `jobs.json`, and fails every call while `aws.fail` exists.
pub struct Project {
    dir: TempDir,
}

const FAKE_AWS: &str = r#"#!/bin/sh
dir=$(dirname "$0")
printf '%s\n' "$*" >> "$dir/aws.log"
if [ -e "$dir/aws.fail" ]; then
    echo "Could not connect to the endpoint URL" >&2
    exit 255
fi
if [ "$1" = "batch" ]; then
    cat "$dir/jobs.json"
    exit 0
fi
echo '{"MessageId": "00000000-0000-0000-0000-000000000000"}'
"#;

impl Project {
    pub const QUEUE_URL: &'static str = "https://sqs.test/123/alerts.fifo";

    pub fn empty() -> Self {
        let project = Self { dir: TempDir::new().unwrap() };
        let aws = project.aws_path();
        std::fs::write(&aws, FAKE_AWS).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&aws, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn runs(&self) -> PathBuf {
        self.path().join("runs")
    }

    pub fn runs_arg(&self) -> String {
        self.runs().display().to_string()
    }

    pub fn state_path(&self) -> PathBuf {
        self.path().join("state")
    }

    pub fn aws_path(&self) -> PathBuf {
        self.path().join("aws")
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn file(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Add `runs/<run>/job.log`.
    pub fn run_log(&self, run: &str, content: &str) {
        self.file(&format!("runs/{run}/job.log"), content);
    }

    /// Write a `list-jobs` response of `(id, name)` failed jobs to `jobs.json`.
    pub fn failed_jobs(&self, jobs: &[(&str, &str)]) {
        let summaries: Vec<String> = jobs
            .iter()
            .map(|(id, name)| {
                format!(r#"{{"jobId": "{id}", "jobName": "{name}", "status": "FAILED"}}"#)
            })
            .collect();
        self.file("jobs.json", &format!(r#"{{"jobSummaryList": [{}]}}"#, summaries.join(", ")));
    }

    pub fn jobs_path(&self) -> PathBuf {
        self.path().join("jobs.json")
    }

    pub fn state(&self) -> String {
        std::fs::read_to_string(self.state_path()).unwrap_or_default()
    }

    /// Every recorded `aws` invocation.
    pub fn aws_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.path().join("aws.log"))
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    /// Recorded `sqs send-message` invocations.
    pub fn sends(&self) -> Vec<String> {
        self.aws_calls().into_iter().filter(|c| c.starts_with("sqs send-message")).collect()
    }

    pub fn break_aws(&self) {
        self.file("aws.fail", "");
    }

    pub fn fix_aws(&self) {
        let _ = std::fs::remove_file(self.path().join("aws.fail"));
    }
}
