//! Local run directory checks

use crate::prelude::*;

fn check(project: &Project) -> Cli {
    cli().in_project(project).args(&["--local_runs_dir", &project.runs_arg()])
}

#[test]
fn failing_run_alerts_and_is_recorded() {
    let project = Project::empty();
    project.run_log("runA", "Traceback (most recent call last):\nRuntimeError: boom\n");

    check(&project).passes();

    let sends = project.sends();
    assert_eq!(sends.len(), 1, "{sends:?}");
    assert!(sends[0].contains(&format!("--queue-url {}", Project::QUEUE_URL)));
    assert!(sends[0].contains(" run runA broken --message-group-id 0"));
    assert!(sends[0].ends_with("--profile sqs_alerts"));
    assert_eq!(project.state(), "runA\n");
}

#[test]
fn unchanged_logs_alert_only_once() {
    let project = Project::empty();
    project.run_log("runA", "RuntimeError: boom\n");

    check(&project).passes();
    check(&project).passes();

    assert_eq!(project.sends().len(), 1);
    assert_eq!(project.state(), "runA\n");
}

#[test]
fn excluded_line_does_not_alert() {
    let project = Project::empty();
    project.run_log("runB", "AttributeError: _cache is stale, rebuilding\n");

    check(&project).passes();

    assert!(project.sends().is_empty());
    assert_eq!(project.state(), "");
}

#[test]
fn test_runs_are_skipped() {
    let project = Project::empty();
    project.run_log("nightly-test-3", "RuntimeError: boom\n");

    check(&project).passes();

    assert!(project.sends().is_empty());
}

#[test]
fn every_log_in_a_run_is_read() {
    let project = Project::empty();
    project.file("runs/runC/a.log", "step one ok\n");
    project.file("runs/runC/b.log", "ValueError: bad shape\n");
    project.file("runs/runC/notes.txt", "ignore this Error\n");
    project.file("runs/runD/notes.txt", "Error only outside logs\n");

    check(&project).passes();

    let sends = project.sends();
    assert_eq!(sends.len(), 1, "{sends:?}");
    assert!(sends[0].contains("run runC broken"));
}

#[test]
fn failed_send_exits_one_and_retries_next_time() {
    let project = Project::empty();
    project.run_log("runA", "RuntimeError: boom\n");
    project.break_aws();

    check(&project)
        .fails()
        .stderr_has("failed to deliver alert")
        .stderr_has("Could not connect to the endpoint URL");
    assert_eq!(project.state(), "");

    project.fix_aws();
    check(&project).passes();

    assert_eq!(project.sends().len(), 2, "the failed attempt is retried");
    assert_eq!(project.state(), "runA\n");
}

#[test]
fn policy_file_replaces_patterns() {
    let project = Project::empty();
    project.file("policy.toml", "include = [\"FATAL\"]\nexclude = []\n");
    project.run_log("runE", "RuntimeError: boom\n");
    project.run_log("runF", "FATAL: disk full\n");
    let policy = project.path().join("policy.toml");

    check(&project).args(&["--policy", policy.to_str().unwrap()]).passes();

    let sends = project.sends();
    assert_eq!(sends.len(), 1, "{sends:?}");
    assert!(sends[0].contains("run runF broken"));
}

#[test]
fn empty_profile_sends_without_profile() {
    let project = Project::empty();
    project.run_log("runA", "RuntimeError: boom\n");

    check(&project).env("JW_AWS_PROFILE", "").passes();

    let sends = project.sends();
    assert_eq!(sends.len(), 1);
    assert!(!sends[0].contains("--profile"));
}

#[test]
fn missing_runs_dir_exits_one() {
    let project = Project::empty();
    check(&project).fails().stderr_has("failed to list jobs");
}
