//! Line-based terminal prompts.
//!
//! Readers and writers are generic so prompts can be driven from tests.

use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Ask a question with a default answer. An empty reply or EOF keeps the
/// default.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: &str,
) -> io::Result<String> {
    write!(
        output,
        "{} {} {} ",
        "?".green().bold(),
        question.bold(),
        format!("({})", default).dimmed()
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();

    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    })
}

/// Ask a yes/no question. Anything other than `y`/`yes` (case-insensitive)
/// is a no, except that an empty reply or EOF picks `default`.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: bool,
) -> io::Result<bool> {
    let hint = if default { "(Y/n)" } else { "(y/N)" };
    write!(
        output,
        "{} {} {} ",
        "?".green().bold(),
        question.bold(),
        hint.dimmed()
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(match line.trim().to_ascii_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    })
}
