//! Console narration for the hardcoded-prompt demo
//!
//! Everything writes to a caller-supplied `Write` so the text can be tested.

pub mod hardcoded;
pub mod pain;

use std::io::{self, Write};

use colored::*;

/// Width of the rule under a section heading
pub const HEADING_WIDTH: usize = 50;

/// Width of the rule between walkthrough sections
pub const SEPARATOR_WIDTH: usize = 80;

/// Print a heading followed by a `=` rule
pub(crate) fn heading(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title.bold())?;
    writeln!(out, "{}", "=".repeat(HEADING_WIDTH))
}

/// Print lines verbatim
pub(crate) fn lines(out: &mut dyn Write, text: &[&str]) -> io::Result<()> {
    for line in text {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
