#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn todoz_cmd(config: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("todoz").unwrap();
    cmd.env("TODOZ_CONFIG_DIR", config.path())
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn run_replays_script_and_prints_list() {
    let config = TempDir::new().unwrap();

    todoz_cmd(&config)
        .arg("run")
        .write_stdin("add A\nadd B\ntoggle 1\ndelete 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added #1: A"))
        .stdout(predicate::str::contains("Deleted #2: B"))
        .stdout(predicate::str::contains("[x] #1   A"))
        .stdout(predicate::str::contains("#2   B").not());
}

#[test]
fn run_json_outputs_final_todos() {
    let config = TempDir::new().unwrap();

    let output = todoz_cmd(&config)
        .args(["run", "--json"])
        .write_stdin("add A\nadd B\ntoggle 1\ndelete 2\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let todos: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let todos = todos.as_array().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["id"], 1);
    assert_eq!(todos[0]["text"], "A");
    assert_eq!(todos[0]["completed"], true);
}

#[test]
fn run_reads_script_file() {
    let config = TempDir::new().unwrap();
    let script = config.path().join("edit.todoz");
    std::fs::write(
        &script,
        "# rename a task\nadd Buy milk\nedit 1\ndraft Buy oat milk\nsave 1\n",
    )
    .unwrap();

    todoz_cmd(&config)
        .arg("run")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved #1: Buy oat milk"));
}

#[test]
fn rejected_edit_stays_in_edit_mode() {
    let config = TempDir::new().unwrap();

    todoz_cmd(&config)
        .arg("run")
        .write_stdin("add X\nedit 1\ndraft   \nsave 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved").not())
        .stdout(predicate::str::contains("[save]"));
}

#[test]
fn bad_lines_are_reported_but_do_not_fail() {
    let config = TempDir::new().unwrap();

    todoz_cmd(&config)
        .arg("run")
        .write_stdin("add A\nfly away\ntoggle one\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown command: fly"))
        .stderr(predicate::str::contains("Invalid todo id: one"));
}

#[test]
fn invalid_utf8_line_does_not_end_the_run() {
    let config = TempDir::new().unwrap();

    let output = todoz_cmd(&config)
        .args(["run", "--json"])
        .write_stdin(b"add A\n\xff\xfe\nadd B\n".to_vec())
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: Invalid UTF-8 input"))
        .get_output()
        .stdout
        .clone();

    let todos: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(todos.as_array().unwrap().len(), 2);
    assert_eq!(todos[1]["text"], "B");
}

#[test]
fn save_writes_draft_to_named_task() {
    let config = TempDir::new().unwrap();

    todoz_cmd(&config)
        .arg("run")
        .write_stdin("add A\nadd B\nedit 1\ndraft Z\nsave 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved #2: Z"))
        .stdout(predicate::str::contains("[save]").not());
}

#[test]
fn missing_script_file_fails() {
    let config = TempDir::new().unwrap();

    todoz_cmd(&config)
        .args(["run", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: IO error"));
}

#[test]
fn piped_session_prints_messages_only() {
    let config = TempDir::new().unwrap();

    todoz_cmd(&config)
        .write_stdin("add Walk dog\nquit\nadd never\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added #1: Walk dog"))
        .stdout(predicate::str::contains("never").not())
        .stdout(predicate::str::contains("My ToDo List").not());
}

#[test]
fn config_set_persists_and_reads_back() {
    let config = TempDir::new().unwrap();

    todoz_cmd(&config)
        .args(["config", "line-width", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line-width set to \"100\""));

    assert!(config.path().join("config.json").exists());

    todoz_cmd(&config)
        .args(["config", "line-width"])
        .assert()
        .success()
        .stdout("100\n");

    todoz_cmd(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("prompt = \"todoz> \""))
        .stdout(predicate::str::contains("color = \"auto\""));
}

#[test]
fn config_rejects_unknown_key() {
    let config = TempDir::new().unwrap();

    todoz_cmd(&config)
        .args(["config", "editor", "vi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: editor"));
}
