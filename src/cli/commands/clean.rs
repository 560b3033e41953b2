use std::io::{self, IsTerminal};

use anyhow::Result;

use super::super::{args::CleanCommand, prompt, report, settings};
use super::{CleanOutcome, CleanSummary, CommandResult, CommandSummary};
use crate::core::{analyze, remove_unused_keys};

/// Report unused keys and remove them once confirmed.
///
/// `--apply` confirms up front. Otherwise the user is asked on an
/// interactive terminal, and without one the run is a dry run.
pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let settings = settings::resolve(&cmd.args.common)?;
    let analysis = analyze(&settings)?;
    report::print_analysis(&analysis);

    let keys = analysis.unused_keys();
    let outcome = if keys.is_empty() {
        CleanOutcome::NothingToClean
    } else if cmd.args.apply || confirm_removal(keys.len())? {
        let count = remove_unused_keys(&analysis.translation_file, &keys)?;
        CleanOutcome::Removed { count }
    } else if io::stdin().is_terminal() {
        CleanOutcome::Declined
    } else {
        CleanOutcome::DryRun { count: keys.len() }
    };

    Ok(CommandResult {
        summary: CommandSummary::Clean(CleanSummary { analysis, outcome }),
        error_count: 0,
        exit_on_errors: false,
    })
}

fn confirm_removal(count: usize) -> Result<bool> {
    if !io::stdin().is_terminal() {
        return Ok(false);
    }
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    let question = format!(
        "Remove {} unused {} from the translation file?",
        count,
        if count == 1 { "key" } else { "keys" }
    );
    Ok(prompt::confirm(&mut input, &mut output, &question, false)?)
}
