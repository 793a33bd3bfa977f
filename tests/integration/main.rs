//! Integration tests for the taskgate CLI
//!
//! These tests drive the binary the way a gateway would: one proxy event
//! per invocation, with tasks persisted to a file store between runs.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a taskgate command
fn taskgate() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("taskgate"));
    cmd.env_remove("TASKGATE_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Helper to write a config that uses a file store inside `dir`
fn write_config(dir: &Path) -> PathBuf {
    let config = dir.join("config.toml");
    let tasks = dir.join("tasks.json");
    fs::write(
        &config,
        format!("[store]\nbackend = \"file\"\npath = {:?}\n", tasks.display().to_string()),
    )
    .unwrap();
    config
}

/// Helper to build a proxy event
fn event(method: &str, path: &str, body: Option<&str>) -> String {
    serde_json::json!({
        "httpMethod": method,
        "path": path,
        "headers": {"Content-Type": "application/json"},
        "pathParameters": null,
        "body": body,
    })
    .to_string()
}

/// Helper to invoke one event on stdin and parse the printed response
fn invoke(config: &Path, event: String) -> serde_json::Value {
    let output = taskgate()
        .arg("--config")
        .arg(config)
        .arg("invoke")
        .write_stdin(event)
        .output()
        .unwrap();
    assert!(output.status.success(), "invoke failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// END-TO-END WORKFLOW TESTS
// =============================================================================

/// Test complete workflow: create → list → complete → undo → delete
#[test]
fn test_e2e_task_lifecycle() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path());

    // Step 1: Create
    let created = invoke(&config, event("POST", "/api/task", Some(r#"{"task": "Buy milk"}"#)));
    assert_eq!(created["statusCode"], 201);
    assert_eq!(created["headers"]["Location"], "/api/task/TSK-1");
    assert_eq!(created["headers"]["Access-Control-Allow-Origin"], "*");

    // Step 2: List sees it in a fresh process
    let listed = invoke(&config, event("GET", "/api/task", None));
    assert_eq!(listed["statusCode"], 200);
    let tasks: serde_json::Value = serde_json::from_str(listed["body"].as_str().unwrap()).unwrap();
    assert_eq!(tasks[0]["id"], "TSK-1");
    assert_eq!(tasks[0]["task"], "Buy milk");
    assert_eq!(tasks[0]["status"], false);

    // Step 3: Complete
    let done = invoke(&config, event("PUT", "/api/task/TSK-1", None));
    assert_eq!(done["statusCode"], 200);
    assert!(done["body"].as_str().unwrap().contains(r#""status":true"#));

    // Step 4: Undo
    let undone = invoke(&config, event("PUT", "/api/undoTask/TSK-1", None));
    assert_eq!(undone["statusCode"], 200);
    assert!(undone["body"].as_str().unwrap().contains(r#""status":false"#));

    // Step 5: Delete, then it is gone
    let deleted = invoke(&config, event("DELETE", "/api/deleteTask/TSK-1", None));
    assert_eq!(deleted["statusCode"], 200);

    let missing = invoke(&config, event("DELETE", "/api/deleteTask/TSK-1", None));
    assert_eq!(missing["statusCode"], 404);
    assert_eq!(missing["body"], "Not Found");
}

#[test]
fn test_invoke_reads_event_file() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path());
    let event_file = temp.path().join("event.json");
    fs::write(&event_file, event("GET", "/api/task", None)).unwrap();

    taskgate()
        .arg("--config")
        .arg(&config)
        .args(["invoke", "--event"])
        .arg(&event_file)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""statusCode": 200"#))
        .stdout(predicate::str::contains(r#""body": "[]""#));
}

#[test]
fn test_invoke_reports_client_errors_as_responses() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path());

    let empty = invoke(&config, event("POST", "/api/task", Some(r#"{"task": ""}"#)));
    assert_eq!(empty["statusCode"], 400);

    let malformed = invoke(&config, event("POST", "/api/task", Some("{not json")));
    assert_eq!(malformed["statusCode"], 422);

    let unknown = invoke(&config, event("PATCH", "/api/task", None));
    assert_eq!(unknown["statusCode"], 404);
}

#[test]
fn test_invoke_rejects_non_event_input() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path());

    taskgate()
        .arg("--config")
        .arg(&config)
        .arg("invoke")
        .write_stdin("not an event")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid gateway event"));
}

#[test]
fn test_invoke_missing_event_file() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path());

    taskgate()
        .arg("--config")
        .arg(&config)
        .args(["invoke", "--event", "does-not-exist.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read event"));
}

// =============================================================================
// OTHER COMMANDS
// =============================================================================

#[test]
fn test_version() {
    taskgate()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("taskgate v"));
}

#[test]
fn test_config_prints_effective_settings() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path());

    taskgate()
        .arg("--config")
        .arg(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("backend = \"file\""))
        .stdout(predicate::str::contains("port = 3000"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();

    taskgate()
        .arg("--config")
        .arg(temp.path().join("nope.toml"))
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn test_config_from_environment() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path());

    taskgate()
        .env("TASKGATE_CONFIG", &config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("tasks.json"));
}
