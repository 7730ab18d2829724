//! End-to-end tests for the lazer-typeahead binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const STREETS: &str = r#"[
    {"text": "Main St", "value": "1"},
    {"text": "Maple Ave", "value": "2"},
    {"text": "Oak Blvd", "value": "3"}
]"#;

fn items_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("lazer-typeahead").unwrap();
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn search_json_ranks_typo_match_first() {
    let file = items_file(STREETS);
    let output = cmd()
        .args(["search", file.path().to_str().unwrap(), "mian", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results[0]["item"]["text"], "Main St");
    assert!(results.as_array().unwrap().iter().all(|r| r["item"]["value"] != "3"));
}

#[test]
fn search_without_query_lists_everything() {
    let file = items_file(STREETS);
    cmd()
        .args(["search", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Main St (1)"))
        .stdout(predicate::str::contains("Oak Blvd (3)"))
        .stdout(predicate::str::contains("3 of 3 items"));
}

#[test]
fn search_missing_file_fails() {
    cmd()
        .args(["search", "/no/such/items.json", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn search_malformed_items_is_validation_error() {
    let file = items_file("[{\"text\": ");
    cmd()
        .args(["search", file.path().to_str().unwrap(), "main"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("E6002"));
}

#[test]
fn search_zero_limit_rejected() {
    let file = items_file(STREETS);
    cmd()
        .args(["search", file.path().to_str().unwrap(), "main", "--limit", "0"])
        .assert()
        .failure();
}

#[test]
fn pick_confirms_seeded_selection() {
    let file = items_file(STREETS);
    cmd()
        .args(["pick", file.path().to_str().unwrap(), "--selected", "2", "--json"])
        .write_stdin("confirm\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"event":"selectionChange","value":"2"}"#));
}

#[test]
fn pick_cancel_exits_with_cancel_code() {
    let file = items_file(STREETS);
    cmd()
        .args(["pick", file.path().to_str().unwrap(), "--selected", "2", "--json"])
        .write_stdin("check 1\ncancel\n")
        .assert()
        .code(130)
        .stdout(predicate::str::contains("selectionCancel"))
        .stdout(predicate::str::contains("selectionChange").not());
}

#[test]
fn pick_uses_configured_title() {
    let file = items_file(STREETS);
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[typeahead]\ntitle = \"Choose Violation\"").unwrap();

    cmd()
        .args([
            "--config",
            config.path().to_str().unwrap(),
            "pick",
            file.path().to_str().unwrap(),
        ])
        .write_stdin("search oak\ncheck 3\nconfirm\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Choose Violation"))
        .stdout(predicate::str::contains("Selected 3"));
}

#[test]
fn missing_config_file_is_config_error() {
    let file = items_file(STREETS);
    cmd()
        .args(["--config", "/no/such/lazer.toml", "search", file.path().to_str().unwrap()])
        .assert()
        .code(3);
}

#[test]
fn pick_cancel_flushes_log_file() {
    let file = items_file(STREETS);
    let logs = tempfile::tempdir().unwrap();
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[telemetry]\nlog_dir = {:?}", logs.path().to_str().unwrap()).unwrap();

    cmd()
        .env_remove("RUST_LOG")
        .args([
            "--verbose",
            "--config",
            config.path().to_str().unwrap(),
            "pick",
            file.path().to_str().unwrap(),
        ])
        .write_stdin("search oak\ncancel\n")
        .assert()
        .code(130);

    let written: usize = std::fs::read_dir(logs.path())
        .unwrap()
        .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap().len())
        .sum();
    assert!(written > 0);
}

#[test]
fn search_failure_with_json_prints_error_report() {
    let output = cmd()
        .args(["search", "/no/such/items.json", "main", "--json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(report["code_str"], "E2001");
    assert_eq!(report["category"], "IO");
    assert!(report["suggestion"].is_string());
}
