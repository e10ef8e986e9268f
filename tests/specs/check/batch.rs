//! AWS Batch queue checks

use crate::prelude::*;

fn check(project: &Project) -> Cli {
    let list = format!("cat '{}'", project.jobs_path().display());
    cli().in_project(project).env("JW_BATCH_LIST_COMMAND", list).args(&["--aws_batch_jobs"])
}

#[test]
fn new_failed_job_alerts_with_name_and_id() {
    let project = Project::empty();
    project.failed_jobs(&[("job-7", "train")]);

    check(&project).passes();

    let sends = project.sends();
    assert_eq!(sends.len(), 1, "{sends:?}");
    assert!(sends[0].contains("--message-body AWS run train (job-7) failed --message-group-id 0"));
    assert_eq!(project.state(), "job-7\n");
}

#[test]
fn known_job_is_not_realerted() {
    let project = Project::empty();
    project.file("state", "job-42\n");
    project.failed_jobs(&[("job-42", "train")]);

    check(&project).passes();

    assert!(project.sends().is_empty());
    assert_eq!(project.state(), "job-42\n");
}

#[test]
fn only_unknown_jobs_are_appended() {
    let project = Project::empty();
    project.file("state", "job-42\n");
    project.failed_jobs(&[("job-42", "train"), ("job-43", "eval")]);

    check(&project).passes();

    let sends = project.sends();
    assert_eq!(sends.len(), 1);
    assert!(sends[0].contains("AWS run eval (job-43) failed"));
    assert_eq!(project.state(), "job-42\njob-43\n");
}

#[test]
fn failing_list_command_exits_one() {
    let project = Project::empty();
    cli()
        .in_project(&project)
        .env("JW_BATCH_LIST_COMMAND", "echo 'AccessDenied' >&2; exit 3")
        .args(&["--aws_batch_jobs"])
        .fails()
        .stderr_has("failed to list jobs")
        .stderr_has("AccessDenied");
    assert!(project.sends().is_empty());
}

#[test]
fn default_list_command_queries_the_configured_queue() {
    let project = Project::empty();
    project.failed_jobs(&[]);

    cli()
        .in_project(&project)
        .env("JW_BATCH_JOB_QUEUE", "gpu")
        .args(&["--aws_batch_jobs"])
        .passes();

    assert_eq!(
        project.aws_calls(),
        vec!["batch list-jobs --job-queue gpu --job-status FAILED".to_string()]
    );
}
