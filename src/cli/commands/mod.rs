//! Command implementations

mod chat;
mod exec;
mod init;

use std::path::PathBuf;
use std::rc::Rc;

use jax::adapters::JsonFileStore;
use jax::config::JaxConfig;
use jax::core::services::{Assistant, Reply};
use jax::output::{OutputMode, Renderer};

pub use chat::chat;
pub use exec::exec;
pub use init::init;

/// Global flags shared by every command
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Human or JSON output
    pub mode: OutputMode,
    /// `--data-dir` override
    pub data_dir: Option<PathBuf>,
    /// `--no-color`
    pub no_color: bool,
}

impl SessionOptions {
    /// Load config, open the store and build the assistant
    fn open(&self) -> (Assistant, Renderer) {
        let mut config = JaxConfig::load();
        if self.no_color {
            config.ui.color = false;
        }
        let data_dir = config.data_dir(self.data_dir.as_deref());
        log::debug!("data directory: {}", data_dir.display());

        let store = JsonFileStore::from_config(&config.storage, &data_dir);
        let assistant = Assistant::new(Rc::new(store));
        (assistant, Renderer::new(self.mode, &config.ui))
    }
}

/// Final save of both lists, showing any failure as a warning
fn finish(assistant: &Assistant, renderer: &Renderer) {
    let failures = assistant.shutdown();
    if !failures.is_empty() {
        let reply = failures
            .into_iter()
            .fold(Reply::message(""), |reply, e| reply.with_warning(Some(e)));
        renderer.render(&reply);
    }
}
