//! CLI Contract Tests
//!
//! Exit codes: 0 accepted, 2 rejected, 1 bad input. Stdout is always JSON.

use std::io::Write;
use std::process::Output;

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;

fn run(args: &[&str]) -> Output {
    let mut cmd = cargo_bin_cmd!("contactform-cli");
    cmd.env_remove("RUST_LOG").args(args);
    cmd.assert().get_output().clone()
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, stdout))
}

const VALID_PAYLOAD: &str = r#"{
    "fields": {
        "first-name": "Ada",
        "last-name": "Lovelace",
        "email": "ada@example.com",
        "query-type": "general",
        "message": "Hello"
    },
    "consent": true
}"#;

#[test]
fn validate_accepts_valid_payload() {
    let output = run(&["validate", "--payload", VALID_PAYLOAD]);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json["valid"], true);
    assert!(json["errors"].as_object().unwrap().is_empty());
}

#[test]
fn validate_rejects_invalid_payload_with_code_2() {
    let output = run(&["validate", "--payload", r#"{"fields": {"email": "a@b.org"}}"#]);
    assert_eq!(output.status.code(), Some(2));

    let json = stdout_json(&output);
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"]["email"]["kind"], "invalid_format");
    assert_eq!(json["errors"]["consent"]["kind"], "required");
    assert_eq!(json["errors"]["query-type"]["kind"], "required");
}

#[test]
fn validate_malformed_payload_still_prints_json() {
    // serde's message quotes the offending value.
    let output = run(&["validate", "--payload", r#"{"consent": "yes"}"#]);
    assert_eq!(output.status.code(), Some(1));

    let json = stdout_json(&output);
    assert_eq!(json["valid"], false);
    let error = json["error"].as_str().unwrap();
    assert!(error.starts_with("Invalid payload:"));
    assert!(error.contains("\"yes\""));
}

#[test]
fn check_email_exit_codes() {
    let ok = run(&["check-email", "a@b.com"]);
    assert_eq!(ok.status.code(), Some(0));
    let json = stdout_json(&ok);
    assert_eq!(json["valid"], true);
    assert!(json["error"].is_null());

    let bad = run(&["check-email", "a@b.org"]);
    assert_eq!(bad.status.code(), Some(2));
    let json = stdout_json(&bad);
    assert_eq!(json["valid"], false);
    assert_eq!(json["error"]["kind"], "invalid_format");

    let empty = run(&["check-email", ""]);
    assert_eq!(empty.status.code(), Some(2));
    assert_eq!(stdout_json(&empty)["error"]["kind"], "required");
}

#[test]
fn simulate_accepted_script() {
    let events = r#"[
        {"type": "keyup", "field": "first-name", "value": "Ada"},
        {"type": "keyup", "field": "last-name", "value": "Lovelace"},
        {"type": "keyup", "field": "email", "value": "ada@example.com"},
        {"type": "keyup", "field": "message", "value": "Hi"},
        {"type": "click_option", "index": 1},
        {"type": "click_consent"},
        {"type": "submit"}
    ]"#;
    let output = run(&["simulate", "--events", events]);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert_eq!(json["outcome"]["status"], "accepted");
    assert_eq!(json["outcome"]["receipt"]["query_type"], "support");
    assert_eq!(json["selectedOption"], 1);
}

#[test]
fn simulate_rejected_script() {
    let output = run(&["simulate", "--events", r#"[{"type": "submit"}]"#]);
    assert_eq!(output.status.code(), Some(2));

    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert_eq!(json["outcome"]["status"], "rejected");
}

#[test]
fn simulate_bad_events_print_json_error() {
    let malformed = run(&["simulate", "--events", r#"[{"type": "hover"}]"#]);
    assert_eq!(malformed.status.code(), Some(1));
    let json = stdout_json(&malformed);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().starts_with("Invalid events:"));

    let wrong_field = run(&[
        "simulate",
        "--events",
        r#"[{"type": "keyup", "field": "query-type", "value": "x"}]"#,
    ]);
    assert_eq!(wrong_field.status.code(), Some(1));
    let json = stdout_json(&wrong_field);
    assert!(json["error"].as_str().unwrap().contains("non-text field"));
}

#[test]
fn bad_config_prints_json_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"queryTypes": []}}"#).unwrap();

    let path = file.path().to_str().unwrap();
    let output = run(&["--config", path, "check-email", "a@b.com"]);
    assert_eq!(output.status.code(), Some(1));

    let json = stdout_json(&output);
    assert!(json["error"].as_str().unwrap().contains("query type"));
}
