//! CLI help output specs

use crate::prelude::*;

#[test]
fn jobwatch_help_lists_both_modes() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--aws_batch_jobs")
        .stdout_has("--local_runs_dir <DIR>")
        .stdout_has("--policy <FILE>");
}

#[test]
fn jobwatch_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn alerts_help_lists_queue_options() {
    alerts_cli()
        .args(&["--help"])
        .passes()
        .stdout_has("--queue-name")
        .stdout_has("--wait-seconds")
        .stdout_has("alerts.fifo");
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let out = cli().args(&["--bogus"]).run();
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("--bogus"));
}
