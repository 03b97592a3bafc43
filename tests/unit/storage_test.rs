//! Tests for the JSON file store

use std::fs;

use jax::adapters::JsonFileStore;
use jax::config::StorageConfig;
use jax::core::models::timestamp::parse_timestamp;
use jax::core::models::{Contact, ContactMap, Task};
use jax::core::ports::RecordStore;
use tempfile::TempDir;

fn store_in(temp: &TempDir) -> JsonFileStore {
    JsonFileStore::from_config(&StorageConfig::default(), temp.path())
}

#[test]
fn test_from_config_uses_file_names() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    assert_eq!(store.tasks_path(), temp.path().join("tasks.json"));
    assert_eq!(store.contacts_path(), temp.path().join("contacts.json"));
}

#[test]
fn test_tasks_survive_reload() {
    let temp = TempDir::new().unwrap();
    let at = |s| parse_timestamp(s).unwrap();

    let mut done = Task::todo("read book");
    done.mark();
    let tasks = vec![
        done,
        Task::deadline("submit report", at("2024-03-01 1800")),
        Task::event("camp", at("2024-01-01 0900"), at("2024-01-03 1700")),
    ];
    store_in(&temp).save_tasks(&tasks).unwrap();

    let loaded = store_in(&temp).load_tasks().unwrap();
    assert_eq!(loaded, tasks);
    assert_eq!(loaded[0].to_string(), "[T][X] read book");
}

#[test]
fn test_contacts_survive_reload() {
    let temp = TempDir::new().unwrap();
    let mut contacts = ContactMap::new();
    for contact in [Contact::new("Alice Tan", "123", "a@x.com"), Contact::new("bob", "456", "b@x.com")] {
        contacts.insert(contact.key(), contact);
    }
    store_in(&temp).save_contacts(&contacts).unwrap();

    let loaded = store_in(&temp).load_contacts().unwrap();
    assert_eq!(loaded, contacts);
    assert_eq!(loaded["alice tan"].name, "Alice Tan");
}

#[test]
fn test_save_replaces_previous_contents() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.save_tasks(&[Task::todo("a"), Task::todo("b")]).unwrap();
    store.save_tasks(&[Task::todo("c")]).unwrap();

    assert_eq!(store.load_tasks().unwrap(), vec![Task::todo("c")]);
}

#[test]
fn test_task_file_is_versioned_json() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.save_tasks(&[Task::todo("a")]).unwrap();

    let content = fs::read_to_string(store.tasks_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["tasks"][0]["type"], "todo");
    assert_eq!(json["tasks"][0]["description"], "a");
}

#[test]
fn test_contact_keys_rebuilt_on_load() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    fs::write(
        store.contacts_path(),
        r#"{"contacts":[{"name":"  CAROL ","phone":"1","email":"c@x.com"}]}"#,
    )
    .unwrap();

    let loaded = store.load_contacts().unwrap();
    assert!(loaded.contains_key("carol"));
}

#[test]
fn test_corrupt_contacts_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    fs::write(store.contacts_path(), "[").unwrap();

    assert!(store.load_contacts().is_err());
    assert!(store.load_tasks().unwrap().is_empty());
}

#[test]
fn test_unwritable_location_is_an_error() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("file");
    fs::write(&blocker, "").unwrap();
    let store = JsonFileStore::new(blocker.join("tasks.json"), blocker.join("contacts.json"));

    assert!(store.save_tasks(&[Task::todo("a")]).is_err());
}
