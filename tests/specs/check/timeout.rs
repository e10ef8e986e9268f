//! Check watchdog

use crate::prelude::*;

#[test]
fn overrunning_check_sends_timeout_alert_and_exits_one() {
    let project = Project::empty();

    cli()
        .in_project(&project)
        .env("JW_BATCH_LIST_COMMAND", "sleep 5")
        .env("JW_CHECK_TIMEOUT_MS", "300")
        .args(&["--aws_batch_jobs"])
        .fails()
        .stderr_has("check did not finish within 300ms");

    let sends = project.sends();
    assert_eq!(sends.len(), 1, "{sends:?}");
    assert!(sends[0].contains("--message-body Timed out while checking logs on "));
    assert_eq!(project.state(), "");
}
