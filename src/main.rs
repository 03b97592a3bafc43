//! jax - A personal-assistant command interpreter
//!
//! Keeps todos, deadlines, events and contacts, chatting over stdin or
//! running one command at a time.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the jax CLI
fn main() {
    if let Err(e) = cli::run() {
        eprintln!("jax: {e:#}");
        std::process::exit(1);
    }
}
