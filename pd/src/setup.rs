//! Push the sample prompts to Langfuse
//!
//! Requests go out strictly one after another with a fixed pause in between.
//! A failed prompt is reported and skipped; it never stops the run.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use colored::*;
use eyre::Result;
use tracing::{debug, info, warn};

use crate::config::mask_key;
use crate::langfuse::{CreatedPrompt, LangfuseError, PromptStore};
use crate::prompts::SamplePrompt;

/// What happened to one prompt
#[derive(Debug)]
pub struct PromptOutcome {
    pub name: String,
    pub result: Result<CreatedPrompt, LangfuseError>,
}

/// Outcomes of a setup run, in request order
#[derive(Debug, Default)]
pub struct SetupSummary {
    pub outcomes: Vec<PromptOutcome>,
}

impl SetupSummary {
    fn any_error(&self, pred: impl Fn(&LangfuseError) -> bool) -> bool {
        self.outcomes
            .iter()
            .any(|o| o.result.as_ref().err().is_some_and(&pred))
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}

/// Print where prompts are about to go
pub fn print_banner(out: &mut dyn Write, host: &str, public_key: &str) -> Result<()> {
    writeln!(out, "🚀 Setting up sample prompts for Langfuse demo...\n")?;
    writeln!(out, "📍 Target Langfuse instance: {}", host.cyan())?;
    writeln!(out, "🔑 Using public key: {}", mask_key(public_key))?;
    writeln!(out)?;
    Ok(())
}

/// Create each prompt in order, pausing `delay` between requests
pub async fn run_setup(
    store: &dyn PromptStore,
    prompts: &[SamplePrompt],
    delay: Duration,
    out: &mut dyn Write,
) -> Result<SetupSummary> {
    debug!(count = prompts.len(), ?delay, "run_setup: called");
    let mut summary = SetupSummary::default();

    for (i, sample) in prompts.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        writeln!(out, "Creating prompt: {}...", sample.name)?;
        let result = store.create_prompt(&sample.to_request()).await;
        match &result {
            Ok(created) => {
                info!(name = %sample.name, version = created.version, "Created prompt");
                writeln!(
                    out,
                    "{} Successfully created: {} (version {})",
                    "✅".green(),
                    sample.name,
                    created.version
                )?;
            }
            Err(LangfuseError::Api { status, message }) => {
                warn!(name = %sample.name, status, "Prompt creation rejected");
                writeln!(
                    out,
                    "{} Failed to create {}: {} - {}",
                    "❌".red(),
                    sample.name,
                    status,
                    message
                )?;
            }
            Err(e) => {
                warn!(name = %sample.name, error = %e, "Prompt creation failed");
                writeln!(out, "{} Error creating prompt {}: {}", "❌".red(), sample.name, e)?;
            }
        }

        summary.outcomes.push(PromptOutcome {
            name: sample.name.to_string(),
            result,
        });
    }

    Ok(summary)
}

/// Print counts and what to do next
pub fn print_summary(out: &mut dyn Write, summary: &SetupSummary) -> Result<()> {
    writeln!(out, "\n📊 Setup Summary:")?;
    writeln!(out, "✅ Successful: {}", summary.succeeded())?;
    writeln!(out, "❌ Failed: {}", summary.failed())?;

    if summary.all_succeeded() {
        writeln!(out, "\n🎉 All prompts created successfully!")?;
        writeln!(out, "\nNext steps:")?;
        writeln!(out, "1. Run the demo: pd hardcoded")?;
        writeln!(out, "2. Explore prompt management in the Langfuse UI")?;
        writeln!(out, "3. Try updating prompts and see changes reflected immediately")?;
    } else {
        writeln!(out, "\n⚠️  Some prompts failed to create. Check the errors above.")?;
        writeln!(out, "Common issues:")?;
        let unreachable = summary.any_error(|e| matches!(e, LangfuseError::Network(_)));
        let auth = summary.any_error(LangfuseError::is_auth_failure);
        let conflict = summary.any_error(LangfuseError::is_conflict);
        writeln!(out, "{} Langfuse not running (check http://localhost:3000)", bullet(unreachable))?;
        writeln!(out, "{} Invalid API keys", bullet(auth))?;
        writeln!(out, "{} Prompts with same name already exist", bullet(conflict))?;
    }
    Ok(())
}

// Point at the issues the errors above actually hit
fn bullet(seen: bool) -> &'static str {
    if seen { "👉" } else { "-" }
}

/// Run setup and print the summary, unless `shutdown` resolves first
///
/// Returns `None` when interrupted; the in-flight request is dropped.
pub async fn run_until<F>(
    store: &dyn PromptStore,
    prompts: &[SamplePrompt],
    delay: Duration,
    out: &mut dyn Write,
    shutdown: F,
) -> Result<Option<SetupSummary>>
where
    F: Future,
{
    tokio::select! {
        summary = run_setup(store, prompts, delay, &mut *out) => {
            let summary = summary?;
            info!(succeeded = summary.succeeded(), failed = summary.failed(), "Setup finished");
            print_summary(&mut *out, &summary)?;
            Ok(Some(summary))
        }
        _ = shutdown => {
            info!("Setup interrupted");
            writeln!(out, "\n\n👋 Shutting down gracefully...")?;
            Ok(None)
        }
    }
}

/// Print the request bodies setup would send, without sending them
pub fn print_dry_run(out: &mut dyn Write, host: &str, prompts: &[SamplePrompt]) -> Result<()> {
    writeln!(
        out,
        "🧪 Dry run: {} prompts would be POSTed to {}{}\n",
        prompts.len(),
        host,
        crate::langfuse::PROMPTS_PATH
    )?;
    for sample in prompts {
        writeln!(out, "{}", serde_json::to_string_pretty(&sample.to_request())?)?;
    }
    Ok(())
}
