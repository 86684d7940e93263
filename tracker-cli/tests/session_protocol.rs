use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn tracker_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tracker").expect("tracker binary");
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn run_session(home: &TempDir, input: &str) -> Vec<Value> {
    let assert = tracker_cmd(home.path())
        .arg("session")
        .write_stdin(input.to_string())
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("stdout utf8");
    stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each response is JSON"))
        .collect()
}

#[test]
fn add_then_move_scenarios() {
    let home = TempDir::new().expect("home");
    let responses = run_session(
        &home,
        r#"{"cmd":"add","title":"Build site","description":"Build a landing page","people":3}
{"cmd":"list"}
{"cmd":"move","id":"p1","status":"finished"}
{"cmd":"move","id":"p1","status":"finished"}
{"cmd":"move","id":"nonexistent","status":"active"}
{"cmd":"list","status":"finished"}
"#,
    );

    assert_eq!(responses.len(), 6);
    assert_eq!(responses[0]["data"]["id"], "p1");

    let listed = responses[1]["data"]["projects"].as_array().expect("array");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["status"], "active");
    assert_eq!(listed[0]["people"], 3);

    assert_eq!(responses[2]["data"]["outcome"], "moved");
    assert_eq!(responses[3]["data"]["outcome"], "already_in_status");
    assert_eq!(responses[4]["data"]["outcome"], "not_found");
    assert!(responses.iter().all(|r| r["ok"] == true));

    let finished = responses[5]["data"]["projects"].as_array().expect("array");
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0]["id"], "p1");
    assert_eq!(finished[0]["status"], "finished");
}

#[test]
fn invalid_input_reports_alert_and_adds_nothing() {
    let home = TempDir::new().expect("home");
    let responses = run_session(
        &home,
        r#"{"cmd":"add","title":"","description":"Long enough","people":2}
{"cmd":"add","title":"Ok","description":"tiny","people":2}
{"cmd":"add","title":"Ok","description":"Long enough","people":9}
{"cmd":"list"}
"#,
    );

    for response in &responses[..3] {
        assert_eq!(response["ok"], false);
        let error = response["error"].as_str().expect("error text");
        assert!(error.starts_with("Invalid input please try again"), "{error}");
    }
    assert!(responses[0]["error"].as_str().unwrap().contains("title"));
    assert!(responses[1]["error"].as_str().unwrap().contains("5 characters"));
    assert!(responses[2]["error"].as_str().unwrap().contains("between 1 and 5"));
    assert_eq!(responses[3]["data"]["projects"].as_array().map(Vec::len), Some(0));
}

#[test]
fn drag_gestures_follow_drop_protocol() {
    let home = TempDir::new().expect("home");
    let responses = run_session(
        &home,
        r#"{"cmd":"add","title":"Build site","description":"Build a landing page","people":"1"}
{"cmd":"drag","id":"p1","to":"active"}
{"cmd":"drag_over","to":"finished","media_type":"text/uri-list"}
{"cmd":"drop","to":"finished","media_type":"text/uri-list","data":"p1"}
{"cmd":"drag_over","to":"finished"}
{"cmd":"drag_leave","to":"finished"}
{"cmd":"drag","id":"p1","to":"finished"}
{"cmd":"drag","id":"p42","to":"finished"}
"#,
    );

    assert_eq!(responses[1]["data"]["outcome"], "already_in_status");
    assert_eq!(responses[2]["data"]["accepted"], false);
    assert_eq!(responses[3]["data"]["outcome"], "rejected");
    assert_eq!(responses[4]["data"]["accepted"], true);
    assert_eq!(responses[5]["data"]["droppable"], false);
    assert_eq!(responses[6]["data"]["outcome"], "moved");
    assert_eq!(responses[7]["ok"], false);
    assert!(responses[7]["error"].as_str().unwrap().contains("p42"));
}

#[test]
fn malformed_lines_do_not_end_session() {
    let home = TempDir::new().expect("home");
    let responses = run_session(
        &home,
        "# comment\n{\"cmd\":\"teleport\"}\n\n{\"cmd\":\"render\"}\n",
    );

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["ok"], false);
    assert!(responses[0]["error"].as_str().unwrap().contains("line 2"));
    assert_eq!(responses[1]["ok"], true);
    assert!(responses[1]["data"]["html"]
        .as_str()
        .unwrap()
        .contains("<form id=\"user-input\">"));
}

#[test]
fn session_reads_script_file() {
    let home = TempDir::new().expect("home");
    let script = home.path().join("script.jsonl");
    std::fs::write(
        &script,
        "{\"cmd\":\"add\",\"title\":\"Docs\",\"description\":\"Write the docs\",\"people\":2}\n",
    )
    .expect("write script");

    tracker_cmd(home.path())
        .args(["session", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(contains("{\"ok\":true,\"data\":{\"id\":\"p1\"}}"));
}

#[test]
fn missing_script_fails_with_context() {
    let home = TempDir::new().expect("home");
    tracker_cmd(home.path())
        .args(["session", "--script", "/no/such/script.jsonl"])
        .assert()
        .failure()
        .stderr(contains("failed to open script"));
}
