//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the list engine and the
//! filesystem. Implementations live in the `adapters` module; tests use
//! in-memory ones.

mod store;

pub use store::{Collection, RecordStore};
