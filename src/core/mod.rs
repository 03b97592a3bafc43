//! Core domain logic for jax
//!
//! Everything here is free of file I/O. Persistence is reached only through
//! the port traits.
//!
//! ## Architecture
//!
//! - `command` - Command grammar (first word → [`command::Command`])
//! - `parser` - Argument validation (line → [`parser::Request`])
//! - `models/` - Domain types (Task, Contact, timestamps)
//! - `services/` - Task and contact list engines, command dispatch
//! - `ports/` - Trait definitions for external dependencies

pub mod command;
pub mod error;
pub mod models;
pub mod parser;
pub mod ports;
pub mod services;

pub use error::JaxError;
