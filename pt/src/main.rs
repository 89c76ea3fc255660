use std::io::Read;
use std::path::Path;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{info, warn};

use prompttemplate::cli::{Cli, Command};
use prompttemplate::{Template, Variables, parse_assignment};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    Ok(())
}

fn read_template(path: &Path) -> Result<Template> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read template from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).context(format!("Failed to read template {}", path.display()))?
    };
    Ok(Template::new(text))
}

fn collect_variables(vars_file: Option<&Path>, assignments: &[String]) -> Result<Variables> {
    let mut vars = match vars_file {
        Some(path) => {
            let text =
                std::fs::read_to_string(path).context(format!("Failed to read variables file {}", path.display()))?;
            Variables::from_yaml_str(&text).context(format!("Invalid variables file {}", path.display()))?
        }
        None => Variables::new(),
    };

    for arg in assignments {
        let (name, value) = parse_assignment(arg)?;
        vars.insert(name, value);
    }
    Ok(vars)
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();

    match cli.command {
        Command::Compile {
            template,
            vars,
            vars_file,
        } => {
            let template = read_template(&template)?;
            let variables = collect_variables(vars_file.as_deref(), &vars)?;
            info!(
                "Compiling template with {} placeholders and {} variables",
                template.placeholders().len(),
                variables.len()
            );

            let unresolved = template.unresolved(&variables);
            if !unresolved.is_empty() {
                warn!("Left unresolved: {}", unresolved.join(", "));
            }

            print!("{}", template.compile(&variables));
        }
        Command::Placeholders { template } => {
            let template = read_template(&template)?;
            let names = template.placeholders();
            if names.is_empty() {
                eprintln!("{}", "No placeholders found".dimmed());
            } else {
                for name in names {
                    println!("{}", name);
                }
            }
        }
    }

    Ok(())
}
