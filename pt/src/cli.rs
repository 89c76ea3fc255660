//! CLI argument parsing for pt

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pt")]
#[command(author, version, about = "Compile {{placeholder}} prompt templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Substitute variables into a template and print the result
    Compile {
        /// Template file, or "-" for stdin
        #[arg(required = true)]
        template: PathBuf,

        /// Variable assignment NAME=VALUE (repeatable, later wins)
        #[arg(short = 'v', long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,

        /// YAML or JSON file mapping names to string values
        #[arg(short = 'f', long)]
        vars_file: Option<PathBuf>,
    },

    /// List the placeholder names a template uses
    Placeholders {
        /// Template file, or "-" for stdin
        #[arg(required = true)]
        template: PathBuf,
    },
}
