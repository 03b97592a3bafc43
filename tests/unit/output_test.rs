//! Tests for reply rendering

use jax::config::UiConfig;
use jax::core::JaxError;
use jax::core::services::{Assistant, Reply};
use jax::output::{OutputMode, Renderer};

use crate::common::assistant;

fn plain() -> Renderer {
    Renderer::new(
        OutputMode::Human,
        &UiConfig {
            indent: 4,
            color: false,
        },
    )
}

#[test]
fn test_every_line_is_indented() {
    let out = plain().format_human(&Reply::message("a\nb"));
    assert!(out.lines().all(|line| line.starts_with("    ")));
    assert_eq!(out.lines().count(), 4);
}

#[test]
fn test_greeting_frame() {
    let out = plain().format_human(&Assistant::greeting());
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[1], "    Top of the morning to you! I'm Jax, your personal assistant chatbot!");
    assert_eq!(lines[2], "    What can I do for you?");
    assert_eq!(lines[0], lines[3]);
}

#[test]
fn test_error_without_color_is_plain() {
    let out = plain().format_human(&Reply::error(&JaxError::MissingIndex));
    assert!(out.contains("    Error - Specify a task number.\n"));
    assert!(!out.contains('\x1B'));
}

#[test]
fn test_json_reply_with_warning() {
    let (mut assistant, store) = assistant();
    store.set_fail_writes(true);
    let reply = assistant.respond("todo a");

    let json: serde_json::Value = serde_json::from_str(&Renderer::format_json(&reply)).unwrap();
    assert_eq!(json["kind"], "message");
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "added: [T][ ] a\nNow you have 1 tasks in the list");
    assert_eq!(json["warnings"].as_array().unwrap().len(), 1);
}

#[test]
fn test_json_error_reply() {
    let (mut assistant, _) = assistant();
    let json: serde_json::Value =
        serde_json::from_str(&Renderer::format_json(&assistant.respond("blah"))).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Error - Invalid Input.");
    assert!(json.get("warnings").is_none());
}

#[test]
fn test_json_kinds() {
    let (mut assistant, _) = assistant();
    assert!(Renderer::format_json(&assistant.respond("bye")).contains(r#""kind":"exit""#));
    assert!(Renderer::format_json(&assistant.respond("clear")).contains(r#""kind":"clear""#));
}
