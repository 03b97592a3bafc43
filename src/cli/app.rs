//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, SessionOptions};
use jax::output::OutputMode;

/// jax - Your personal assistant chatbot
#[derive(Parser, Debug)]
#[command(
    name = "jax",
    version,
    about = "Your personal assistant chatbot for tasks and contacts",
    long_about = "Keep todos, deadlines, events and contacts from the terminal.\n\n\
                  Run without arguments to chat; type 'help' for the command list.\n\
                  Every change is saved to disk immediately."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding tasks.json and contacts.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive session (default)
    Chat,

    /// Run a single command line, e.g. `jax exec todo read book`
    Exec {
        /// The command and its arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Write a default config file to ~/.jax/config.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let options = SessionOptions {
        mode: output_mode,
        data_dir: cli.data_dir,
        no_color: cli.no_color,
    };

    match cli.command {
        None | Some(Command::Chat) => commands::chat(&options),
        Some(Command::Exec { words }) => commands::exec(&words.join(" "), &options),
        Some(Command::Init { force }) => commands::init(force, &options),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": jax::VERSION
                    })
                );
            } else {
                println!("jax v{}", jax::VERSION);
            }
            Ok(())
        },
    }
}
