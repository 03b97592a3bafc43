//! Output formatting for human and JSON modes
//!
//! Replies are rendered either as an indented block between two rules (the
//! chat look) or as one JSON object per line for scripts.

use colored::Colorize;

use crate::config::UiConfig;
use crate::core::services::{Reply, ReplyKind};

/// Rule drawn above and below each human-readable reply
const SEPARATOR: &str = "____________________________________________________________";

/// ANSI sequence that clears the screen and homes the cursor
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Renders replies for one session
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    mode: OutputMode,
    indent: usize,
    color: bool,
}

impl Renderer {
    /// Create a renderer
    #[must_use]
    pub const fn new(mode: OutputMode, ui: &UiConfig) -> Self {
        Self {
            mode,
            indent: ui.indent,
            color: ui.color,
        }
    }

    /// Print a reply to stdout
    pub fn render(&self, reply: &Reply) {
        match self.mode {
            OutputMode::Human if reply.kind == ReplyKind::Clear => print!("{CLEAR_SCREEN}"),
            OutputMode::Human => print!("{}", self.format_human(reply)),
            OutputMode::Json => println!("{}", Self::format_json(reply)),
        }
    }

    /// The framed, indented form of a reply
    #[must_use]
    pub fn format_human(&self, reply: &Reply) -> String {
        let pad = " ".repeat(self.indent);
        let mut out = format!("{pad}{SEPARATOR}\n");

        for line in reply.message.lines() {
            let line = if !reply.success && self.color {
                line.red().to_string()
            } else {
                line.to_string()
            };
            out.push_str(&format!("{pad}{line}\n"));
        }
        for warning in &reply.warnings {
            let warning =
                if self.color { warning.yellow().to_string() } else { warning.clone() };
            out.push_str(&format!("{pad}{warning}\n"));
        }

        out.push_str(&format!("{pad}{SEPARATOR}\n"));
        out
    }

    /// The JSON form of a reply
    #[must_use]
    pub fn format_json(reply: &Reply) -> String {
        serde_json::to_string(reply).unwrap_or_default()
    }
}
