//! The "old way": a prompt baked into the application

use std::io::Write;

use eyre::Result;
use prompttemplate::{Variables, compile};
use tracing::debug;

use super::{heading, lines};
use crate::prompts::{EMAIL_PROMPT_TEMPLATE, email_prompt_config};

/// Variables the hardcoded demo compiles the email prompt with
pub fn example_variables() -> Variables {
    Variables::from([
        ("tone", "friendly but professional"),
        ("recipient_name", "Sarah Johnson"),
        ("email_purpose", "following up on our meeting about the new project timeline"),
    ])
}

/// Print the template, its config, the example variables and the result
pub fn demonstrate(out: &mut impl Write) -> Result<()> {
    debug!("demonstrate: called");
    heading(out, "🔒 HARDCODED APPROACH DEMO")?;

    writeln!(out, "\n📝 Original Template:")?;
    writeln!(out, "{}", EMAIL_PROMPT_TEMPLATE)?;

    writeln!(out, "\n⚙️  Hardcoded Configuration:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&email_prompt_config())?)?;

    writeln!(out, "\n🔧 Example Variables:")?;
    let variables = example_variables();
    writeln!(out, "{}", serde_json::to_string_pretty(&variables)?)?;

    writeln!(out, "\n✉️  Compiled Email Prompt:")?;
    writeln!(out, "{}", compile(EMAIL_PROMPT_TEMPLATE, &variables))?;

    writeln!(out, "\n🚨 PROBLEMS WITH THIS APPROACH:")?;
    lines(
        out,
        &[
            "- Developers must change code to update prompts",
            "- Requires code review, testing, and deployment",
            "- No version history or easy rollback",
            "- PM/Content writers can't iterate independently",
            "- No A/B testing capabilities",
            "- Downtime required for prompt changes",
        ],
    )?;
    Ok(())
}
