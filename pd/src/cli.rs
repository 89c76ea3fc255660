//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PromptDemo - hardcoded prompts vs. managed prompts
#[derive(Parser)]
#[command(
    name = "pd",
    version,
    about = "Walk through the cost of hardcoded prompts and seed Langfuse with managed ones",
    after_help = "Logs are written to: ~/.local/share/promptdemo/logs/promptdemo.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the hardcoded email prompt, its config and a compiled example
    Hardcoded,

    /// Walk through what changing a hardcoded prompt really takes
    Pain {
        /// Keep existing terminal contents instead of clearing the screen
        #[arg(long)]
        no_clear: bool,
    },

    /// Create the sample prompts in Langfuse
    Setup {
        /// Print the request bodies instead of sending them
        #[arg(long)]
        dry_run: bool,

        /// Pause between requests in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Inspect the sample prompts
    Prompts {
        #[command(subcommand)]
        command: PromptsCommand,
    },
}

/// Sample prompt subcommands
#[derive(Debug, Subcommand)]
pub enum PromptsCommand {
    /// List sample prompts with their model settings
    List,

    /// Print a sample prompt's template and placeholders
    Show {
        /// Prompt name, e.g. email-writer-v1
        name: String,
    },

    /// Compile a sample prompt with variables
    Compile {
        /// Prompt name, e.g. email-writer-v1
        name: String,

        /// Variable assignment NAME=VALUE (repeatable, later wins)
        #[arg(short = 'v', long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
    },
}

/// Path of the log file written by `pd`
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promptdemo")
        .join("logs")
        .join("promptdemo.log")
}
