//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format. Kept apart from the core so
//! transweep can be used as a library without printing anything.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CleanOutcome, CleanSummary, CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::Analysis;
use crate::issues::{Severity, UnusedKeyIssue};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the findings of an analysis to stdout.
pub fn print_analysis(analysis: &Analysis) {
    print_analysis_to(analysis, &mut io::stdout().lock());
}

/// Print the findings of an analysis to a custom writer.
pub fn print_analysis_to<W: Write>(analysis: &Analysis, writer: &mut W) {
    let file = analysis.translation_file.display();

    let Some(scan) = &analysis.scan else {
        let _ = writeln!(
            writer,
            "{} no translation keys found in {}",
            "warning:".bold().yellow(),
            file
        );
        return;
    };

    if scan.usage.no_files_matched() {
        let _ = writeln!(
            writer,
            "{} no files matched {}",
            "warning:".bold().yellow(),
            scan.pattern
        );
    }

    if scan.unused.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "All {} translation {} in use ({} {} checked)",
                analysis.key_count,
                if analysis.key_count == 1 { "key is" } else { "keys are" },
                scan.usage.files_scanned,
                plural(scan.usage.files_scanned, "file", "files"),
            )
            .green()
        );
        return;
    }

    report_to(&scan.unused, writer);

    let _ = writeln!(
        writer,
        "{} {} unused {} in {} ({} {} checked)",
        FAILURE_MARK.red(),
        scan.unused.len(),
        plural(scan.unused.len(), "key", "keys").yellow(),
        file,
        scan.usage.files_scanned,
        plural(scan.usage.files_scanned, "file", "files"),
    );
}

/// Print unused key issues in cargo-style format to a writer.
pub fn report_to<W: Write>(issues: &[UnusedKeyIssue], writer: &mut W) {
    let max_line_width = issues
        .iter()
        .map(|issue| issue.location.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }
}

fn print_issue<W: Write>(issue: &UnusedKeyIssue, writer: &mut W, max_line_width: usize) {
    let severity_str = match UnusedKeyIssue::severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.key,
        UnusedKeyIssue::rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(
        writer,
        "{:>width$}{} {}:{}",
        "",
        "-->".blue(),
        issue.location.file_path,
        issue.location.line,
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {} {}",
        "",
        "=".blue(),
        "value:".bold(),
        issue.value_preview(),
        width = max_line_width
    );
    let _ = writeln!(writer);
}

/// Print a warning about files that could not be read.
pub fn print_skipped_warning(count: usize, verbose: bool) {
    print_skipped_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a skipped-files warning to a custom writer.
///
/// With `--verbose` every skipped file has already been logged, so the
/// summary line is left out.
pub fn print_skipped_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check(summary) => {
            print_analysis(&summary.analysis);
            print_skipped_warning(skipped_count(&summary.analysis), verbose);
        }
        CommandSummary::Clean(summary) => {
            print_clean_to(summary, &mut io::stdout().lock());
            print_skipped_warning(skipped_count(&summary.analysis), verbose);
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn skipped_count(analysis: &Analysis) -> usize {
    analysis
        .scan
        .as_ref()
        .map(|scan| scan.usage.skipped.len())
        .unwrap_or(0)
}

/// Print what `clean` did. The analysis itself is printed before the
/// confirmation prompt.
pub fn print_clean_to<W: Write>(summary: &CleanSummary, writer: &mut W) {
    let file = summary.analysis.translation_file.display();
    let _ = match summary.outcome {
        CleanOutcome::NothingToClean => Ok(()),
        CleanOutcome::Removed { count } => writeln!(
            writer,
            "{} {} unused {} from {}.",
            "Removed".green().bold(),
            count,
            plural(count, "key", "keys"),
            file
        ),
        CleanOutcome::Declined => writeln!(writer, "No keys were removed."),
        CleanOutcome::DryRun { count } => writeln!(
            writer,
            "{} {} unused {} from {}.\nRun with {} to remove these keys.",
            "Would remove".yellow().bold(),
            count,
            plural(count, "key", "keys"),
            file,
            "--apply".cyan()
        ),
    };
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
