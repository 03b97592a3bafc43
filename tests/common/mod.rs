//! Shared test fixtures and helpers


use std::rc::Rc;

use jax::core::models::Task;
use jax::core::services::Assistant;

pub use mocks::MemoryStore;

/// An assistant backed by a fresh in-memory store, plus a handle to that store
pub fn assistant() -> (Assistant, Rc<MemoryStore>) {
    assistant_with(MemoryStore::new())
}

/// An assistant backed by `store`, plus a handle to it
pub fn assistant_with(store: MemoryStore) -> (Assistant, Rc<MemoryStore>) {
    let store = Rc::new(store);
    (Assistant::new(store.clone()), store)
}

/// An assistant whose task list starts with the given todos
pub fn assistant_with_todos(descriptions: &[&str]) -> (Assistant, Rc<MemoryStore>) {
    let tasks = descriptions.iter().map(|d| Task::todo(*d)).collect();
    assistant_with(MemoryStore::with_tasks(tasks))
}
