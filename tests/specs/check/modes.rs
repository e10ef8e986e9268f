//! Mode selection and configuration errors
//!
//! Every invalid invocation exits 1 before any job is looked at.

use crate::prelude::*;

#[test]
fn no_mode_exits_one() {
    let project = Project::empty();
    cli().in_project(&project).fails().stderr_has("no check mode specified");
    assert!(project.aws_calls().is_empty());
}

#[test]
fn both_modes_exit_one() {
    let project = Project::empty();
    project.run_log("runA", "RuntimeError: boom\n");
    cli()
        .in_project(&project)
        .args(&["--aws_batch_jobs", "--local_runs_dir", &project.runs_arg()])
        .fails()
        .stderr_has("mutually exclusive");
    assert!(project.aws_calls().is_empty());
    assert_eq!(project.state(), "");
}

#[test]
fn missing_queue_url_exits_one() {
    let project = Project::empty();
    project.run_log("runA", "RuntimeError: boom\n");
    cli()
        .env("JW_STATE_PATH", project.state_path())
        .env("JW_AWS_CLI", project.aws_path())
        .args(&["--local_runs_dir", &project.runs_arg()])
        .fails()
        .stderr_has("invalid configuration")
        .stderr_has("JW_QUEUE_URL is not set");
    assert!(project.aws_calls().is_empty());
}

#[test]
fn malformed_policy_exits_one() {
    let project = Project::empty();
    project.file("policy.toml", "include = \"not a list\"\n");
    let policy = project.path().join("policy.toml");
    cli()
        .in_project(&project)
        .args(&["--local_runs_dir", &project.runs_arg(), "--policy", policy.to_str().unwrap()])
        .fails()
        .stderr_has("failed to load policy");
}
