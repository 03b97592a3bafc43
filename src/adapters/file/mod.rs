//! File-based record storage
//!
//! Implements `RecordStore` using JSON files.

mod store;

pub use store::JsonFileStore;
