//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - JSON file task and contact storage

pub mod file;

pub use file::JsonFileStore;
