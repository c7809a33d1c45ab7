//! Contract tests for `--json` output.

use crate::common::*;

/// CONTRACT: JSON mode prints one event per line, in build order.
#[test]
fn contract_json_events_in_order() {
    let env = TestEnv::builder().build();

    let result = env.run_with_version("1.2.3", &["--json"]);
    assert!(result.success, "{}", result.combined_output());

    let events = result.json_lines();
    let kinds: Vec<&str> = events
        .iter()
        .map(|e| e["event"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(
        kinds,
        vec!["start", "stamped", "dir_ready", "archive_created", "complete"]
    );

    assert_eq!(events[0]["version"], "1.2.3");
    assert_eq!(events[1]["status"], "updated");
    assert_eq!(events[1]["previous"], "0.0.0");
    assert_eq!(events[2]["created"], true);
    assert_eq!(events[3]["entries"][1], SCRIPT_PATH);
    assert_eq!(events[4]["status"], "success");
    assert!(events[4]["sha256"]
        .as_str()
        .unwrap_or_default()
        .starts_with("sha256:"));
}

/// CONTRACT: Failures in JSON mode end with an error event.
#[test]
fn contract_json_error_event() {
    let env = TestEnv::builder().build();

    let result = env.run(&["build", "--json"]);
    assert_eq!(result.exit_code, 1);

    let events = result.json_lines();
    let last = events.last().expect("expected an error event");
    assert_eq!(last["event"], "error");
    assert_eq!(last["kind"], "configuration");
    assert_eq!(last["message"], "VERSION environment variable is not set.");
}

/// CONTRACT: I/O failures are reported with kind "io" after a rollback event.
#[test]
fn contract_json_io_error_after_rollback() {
    let env = TestEnv::builder().without_script().build();

    let result = env.run_with_version("1.2.3", &["--json"]);
    assert_eq!(result.exit_code, 3);

    let events = result.json_lines();
    let kinds: Vec<&str> = events
        .iter()
        .map(|e| e["event"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(
        kinds,
        vec!["start", "stamped", "dir_ready", "rolled_back", "error"]
    );
    assert_eq!(events[4]["kind"], "io");
}
