//! Interactive session tests
//!
//! Feeds whole conversations to `jax` on stdin.

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use super::jax;

#[test]
fn test_session_greets_and_says_goodbye() {
    let temp = TempDir::new().unwrap();

    jax(temp.path())
        .write_stdin("bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top of the morning to you!"))
        .stdout(predicate::str::contains("Aww shucks. Hope to see you again soon!"));
}

#[test]
fn test_session_stops_at_bye() {
    let temp = TempDir::new().unwrap();

    jax(temp.path())
        .arg("chat")
        .write_stdin("todo before\nbye\ntodo after\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("before"))
        .stdout(predicate::str::contains("after").not());
}

#[test]
fn test_session_full_conversation() {
    let temp = TempDir::new().unwrap();
    let script = "\
todo read book
deadline return book /by 2019-10-15 1800
event meeting /from 2019-10-15 1400 /to 2019-10-15 1600
mark 1
find BOOK
delete 3
list
bye
";

    let output = jax(temp.path()).write_stdin(script).output().unwrap();
    let out = String::from_utf8(output.stdout).unwrap();

    assert!(out.contains("Nice! I've marked this task as done:"));
    assert!(out.contains("Here are the matching tasks in your list:"));
    assert!(out.contains("Noted. I've removed this task:"));
    assert!(out.contains("1.[T][X] read book\n"));
    assert!(out.contains("2.[D][ ] return book (by: Oct 15 2019, 6:00pm)"));
    assert!(!out.contains("3.[E]"));
}

#[test]
fn test_session_end_of_input_saves() {
    let temp = TempDir::new().unwrap();

    jax(temp.path()).write_stdin("contact Bob /p 1 /e b@x.com\n").assert().success();

    let stored = fs::read_to_string(temp.path().join("data/contacts.json")).unwrap();
    assert!(stored.contains("\"Bob\""));
}

#[test]
fn test_session_invalid_lines_continue() {
    let temp = TempDir::new().unwrap();

    jax(temp.path())
        .write_stdin("\nwhat\nmark x\nhello\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error - Invalid Input."))
        .stdout(predicate::str::contains("Error - Invalid task number."))
        .stdout(predicate::str::contains("Aww shucks."));
}

#[test]
fn test_session_json_lines() {
    let temp = TempDir::new().unwrap();
    let output = jax(temp.path()).arg("--json").write_stdin("todo a\nbye\n").output().unwrap();
    let out = String::from_utf8(output.stdout).unwrap();

    let kinds: Vec<String> = out
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap()["kind"].to_string())
        .collect();
    assert_eq!(kinds, ["\"message\"", "\"message\"", "\"exit\""]);
}

#[test]
fn test_session_survives_undecodable_line() {
    let temp = TempDir::new().unwrap();

    let output = jax(temp.path())
        .write_stdin(&b"todo a\n\xff\xfe\ntodo b\nlist\nbye\n"[..])
        .output()
        .unwrap();
    let out = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(out.contains("Error - Invalid Input."));
    assert!(out.contains("1.[T][ ] a\n"));
    assert!(out.contains("2.[T][ ] b\n"));
    assert!(out.contains("Aww shucks."));

    let stored = fs::read_to_string(temp.path().join("data/tasks.json")).unwrap();
    assert!(stored.contains("\"b\""));
}

#[test]
fn test_session_end_of_input_writes_both_files() {
    let temp = TempDir::new().unwrap();

    jax(temp.path()).write_stdin("list\n").assert().success();

    assert!(temp.path().join("data/tasks.json").exists());
    assert!(temp.path().join("data/contacts.json").exists());
}
