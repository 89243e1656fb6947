//! Runs the `ikanban` binary against a temporary state file

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn ikanban(state: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ikanban"))
        .arg("--state")
        .arg(state)
        .args(args)
        .env_remove("IKANBAN_ACTOR")
        .output()
        .expect("failed to run ikanban")
}

fn json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_exec_persists_between_runs() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("board.json");

    let out = ikanban(&state, &["exec", r#"{"op": "create board", "name": "Home"}"#]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(json(&out)["name"], "Home");

    let out = ikanban(
        &state,
        &["--actor", "cli-test", "exec", r#"[{"add": "column", "name": "Todo"}, {"add": "column", "name": "Done"}]"#],
    );
    assert!(out.status.success());

    let out = ikanban(&state, &["board"]);
    let board = json(&out);
    assert_eq!(board["columns"].as_array().unwrap().len(), 2);

    let out = ikanban(&state, &["activity", "--limit", "1"]);
    let activity = json(&out);
    assert_eq!(activity["entries"][0]["op"], "create column");
    assert_eq!(activity["entries"][0]["actor"], "cli-test");
}

#[test]
fn test_errors_exit_with_one() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("board.json");

    let out = ikanban(&state, &["board", "missing"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error:"));
    assert!(out.stdout.is_empty());

    let out = ikanban(&state, &["exec", "not json"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_ops_prints_schema() {
    let temp = TempDir::new().unwrap();
    let out = ikanban(&temp.path().join("unused.json"), &["ops"]);
    assert!(out.status.success());
    let schema = json(&out);
    assert!(schema["x-operation-groups"]["card"].is_array());
}
