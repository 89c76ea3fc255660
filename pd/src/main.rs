//! PromptDemo - hardcoded prompts vs. managed prompts
//!
//! CLI entry point for the narration commands and Langfuse setup.

use std::fs;
use std::io::{self, Write};
use std::time::Duration;

use clap::{CommandFactory, Parser};
use colored::*;
use eyre::{Context, Result, eyre};
use tracing::{debug, info};

use promptdemo::cli::{Cli, Command, PromptsCommand, get_log_path};
use promptdemo::config::{Config, mask_key};
use promptdemo::demo::{hardcoded, pain};
use promptdemo::langfuse::LangfuseClient;
use promptdemo::prompts::{SAMPLE_PROMPTS, find_sample};
use promptdemo::setup;
use prompttemplate::parse_assignment;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env is optional; real environment variables win
    let dotenv = dotenvy::dotenv();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;
    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!(error = %e, "main: no .env loaded"),
    }

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Hardcoded) => cmd_hardcoded(),
        Some(Command::Pain { no_clear }) => cmd_pain(no_clear),
        Some(Command::Setup { dry_run, delay_ms }) => cmd_setup(&config, dry_run, delay_ms).await,
        Some(Command::Prompts { command }) => match command {
            PromptsCommand::List => cmd_prompts_list(),
            PromptsCommand::Show { name } => cmd_prompts_show(&name),
            PromptsCommand::Compile { name, vars } => cmd_prompts_compile(&name, &vars),
        },
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}

fn cmd_hardcoded() -> Result<()> {
    let mut stdout = io::stdout().lock();
    hardcoded::demonstrate(&mut stdout)
}

fn cmd_pain(no_clear: bool) -> Result<()> {
    if !no_clear {
        pain::clear_screen()?;
    }
    let mut stdout = io::stdout().lock();
    pain::walkthrough(&mut stdout)
}

async fn cmd_setup(config: &Config, dry_run: bool, delay_ms: Option<u64>) -> Result<()> {
    let mut stdout = io::stdout();

    if dry_run {
        let host = config.langfuse.host_with(|name| std::env::var(name).ok());
        return setup::print_dry_run(&mut stdout, &host, SAMPLE_PROMPTS);
    }

    let resolved = config
        .langfuse
        .resolve()
        .context("Langfuse credentials are not set; get them from your Langfuse Settings -> API Keys page")?;
    info!(
        "Setting up {} prompts at {} (public key {})",
        SAMPLE_PROMPTS.len(),
        resolved.host,
        mask_key(&resolved.public_key)
    );

    let client = LangfuseClient::from_config(&resolved).context("Failed to create Langfuse client")?;
    let delay = Duration::from_millis(delay_ms.unwrap_or(config.setup.delay_ms));

    setup::print_banner(&mut stdout, client.host(), &resolved.public_key)?;

    setup::run_until(&client, SAMPLE_PROMPTS, delay, &mut stdout, tokio::signal::ctrl_c()).await?;

    io::stdout().flush()?;
    Ok(())
}

fn cmd_prompts_list() -> Result<()> {
    for sample in SAMPLE_PROMPTS {
        println!(
            "{:<24} {:<14} temp={:<4} max_tokens={:<4} [{}]",
            sample.name.cyan(),
            sample.model,
            sample.temperature,
            sample.max_tokens,
            sample.tags.join(", ").dimmed()
        );
    }
    Ok(())
}

fn cmd_prompts_show(name: &str) -> Result<()> {
    let sample = find_sample(name).ok_or_else(|| eyre!("Unknown sample prompt: {}", name))?;
    let template = sample.template();

    println!("{} {}", "Name:".bold(), sample.name);
    println!("{} {}", "Labels:".bold(), sample.labels.join(", "));
    println!("{} {}", "Tags:".bold(), sample.tags.join(", "));
    println!("{}\n{}", "Config:".bold(), serde_json::to_string_pretty(&sample.config())?);
    println!("{} {}", "Placeholders:".bold(), template.placeholders().join(", "));
    println!("\n{}", template);
    Ok(())
}

fn cmd_prompts_compile(name: &str, assignments: &[String]) -> Result<()> {
    let sample = find_sample(name).ok_or_else(|| eyre!("Unknown sample prompt: {}", name))?;
    let template = sample.template();

    let mut variables = prompttemplate::Variables::new();
    for arg in assignments {
        let (key, value) = parse_assignment(arg)?;
        variables.insert(key, value);
    }

    let unresolved = template.unresolved(&variables);
    if !unresolved.is_empty() {
        tracing::warn!(?unresolved, "Compiling with unresolved placeholders");
        eprintln!("{} unresolved: {}", "⚠️".yellow(), unresolved.join(", "));
    }

    println!("{}", template.compile(&variables));
    Ok(())
}
