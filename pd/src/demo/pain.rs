//! Step-by-step walkthrough of changing a hardcoded prompt

use std::io::{IsTerminal, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use eyre::Result;
use prompttemplate::{Variables, compile};
use tracing::debug;

use super::{SEPARATOR_WIDTH, heading, lines};
use crate::prompts::EMAIL_PROMPT_TEMPLATE;

/// Variables for the "what runs in production today" section
pub fn production_variables() -> Variables {
    Variables::from([
        ("tone", "professional"),
        ("recipient_name", "Alex Chen"),
        ("email_purpose", "scheduling a follow-up meeting"),
    ])
}

/// Clear the terminal, if stdout is one
pub fn clear_screen() -> Result<()> {
    let mut stdout = std::io::stdout();
    if stdout.is_terminal() {
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    } else {
        debug!("clear_screen: stdout is not a terminal, skipping");
    }
    Ok(())
}

/// Print the whole walkthrough, sections separated by a wide rule
pub fn walkthrough(out: &mut impl Write) -> Result<()> {
    debug!("walkthrough: called");
    let sections: [fn(&mut dyn Write) -> Result<()>; 5] = [
        current_state,
        marketing_request,
        required_process,
        what_ifs,
        next_steps,
    ];

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(out, "\n{}\n", "=".repeat(SEPARATOR_WIDTH))?;
        }
        section(&mut *out)?;
    }
    Ok(())
}

fn current_state(out: &mut dyn Write) -> Result<()> {
    heading(&mut *out, "🏢 CURRENT PRODUCTION STATE")?;
    writeln!(out, "This is what's currently running in production:\n")?;

    writeln!(out, "📝 Current Email Prompt:")?;
    writeln!(out, "{}\n", EMAIL_PROMPT_TEMPLATE)?;

    let variables = production_variables();
    writeln!(out, "🔧 Sample Variables:")?;
    writeln!(out, "{}\n", serde_json::to_string_pretty(&variables)?)?;

    writeln!(out, "✉️  What gets sent to the LLM:")?;
    writeln!(out, "{}\n", compile(EMAIL_PROMPT_TEMPLATE, &variables))?;
    Ok(())
}

fn marketing_request(out: &mut dyn Write) -> Result<()> {
    heading(&mut *out, "📢 MARKETING TEAM REQUEST")?;
    lines(
        &mut *out,
        &[
            "\"Hey! Our A/B tests show casual emails get 23% better response rates.",
            "Can we update the email prompt to be more casual and friendly?",
            "We want to add some personality and maybe emojis! 😊\"",
            "",
            "🎯 What they want to change:",
            "- More casual tone",
            "- Add personality/warmth",
            "- Include emojis",
            "- Less corporate language",
            "- Friendlier greetings/closings",
            "",
        ],
    )?;
    Ok(())
}

fn required_process(out: &mut dyn Write) -> Result<()> {
    heading(&mut *out, "⚙️  REQUIRED PROCESS (Traditional Approach)")?;
    lines(
        &mut *out,
        &[
            "To make this \"simple\" text change, you need:",
            "",
            "1. 👨‍💻 Developer modifies pd/prompts/email-writer.pmt",
            "2. 🧪 Developer tests the changes locally",
            "3. 🔍 Code review process (PR approval)",
            "4. 🚀 Deploy to staging environment",
            "5. ✅ QA testing in staging",
            "6. 🚀 Production deployment",
            "7. 📊 Monitor for issues",
            "",
            "⏱️  Estimated time: 2-5 days (depending on your deployment cycle)",
            "💰 Cost: Developer time + deployment resources + potential downtime",
            "",
        ],
    )?;
    Ok(())
}

fn what_ifs(out: &mut dyn Write) -> Result<()> {
    heading(&mut *out, "🤔 WHAT IF SCENARIOS")?;
    let scenarios = [
        (
            "What if marketing wants to A/B test both versions?",
            "Need feature flags or complex deployment logic",
        ),
        (
            "What if the new version performs worse?",
            "Need another deployment to roll back",
        ),
        (
            "What if they want to try 5 different variations?",
            "5 separate deployments or complex branching logic",
        ),
        (
            "What if this needs to go live immediately for a campaign?",
            "You're blocked by development/deployment schedule",
        ),
        (
            "What if different regions need different tones?",
            "Complex conditional logic in the code",
        ),
    ];
    for (question, consequence) in scenarios {
        writeln!(out, "❓ {}", question)?;
        writeln!(out, "   → {}\n", consequence)?;
    }
    Ok(())
}

fn next_steps(out: &mut dyn Write) -> Result<()> {
    heading(&mut *out, "🔧 YOUR TURN: MAKE THE CHANGE")?;
    lines(
        &mut *out,
        &[
            "Now you'll make the actual code change to demonstrate the pain:",
            "",
            "1. Open: pd/prompts/email-writer.pmt",
            "2. Rewrite it in a casual, emoji-friendly tone",
            "3. Save the file",
            "4. Rebuild, because the prompt is compiled into the binary",
            "5. Run: pd hardcoded",
            "",
            "⏰ Time yourself - how long did this \"simple\" change take?",
            "🎯 Remember: In production, this would need testing, review, deployment...",
            "",
        ],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        let mut buf = Vec::new();
        walkthrough(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_walkthrough_has_five_sections() {
        let text = render();
        let rule = "=".repeat(SEPARATOR_WIDTH);
        assert_eq!(text.matches(&rule).count(), 4);
        for title in [
            "CURRENT PRODUCTION STATE",
            "MARKETING TEAM REQUEST",
            "REQUIRED PROCESS",
            "WHAT IF SCENARIOS",
            "YOUR TURN: MAKE THE CHANGE",
        ] {
            assert!(text.contains(title), "missing section {}", title);
        }
    }

    #[test]
    fn test_current_state_compiles_production_variables() {
        let text = render();
        assert!(text.contains("Write a professional email to Alex Chen about scheduling a follow-up meeting."));
        assert!(text.contains("\"recipient_name\": \"Alex Chen\""));
    }

    #[test]
    fn test_what_ifs_pair_questions_with_consequences() {
        let text = render();
        assert_eq!(text.matches("❓ ").count(), 5);
        assert_eq!(text.matches("   → ").count(), 5);
    }
}
