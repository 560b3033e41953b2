use anyhow::Result;

use super::super::{args::CheckCommand, settings};
use super::{CheckSummary, CommandResult, CommandSummary};
use crate::core::analyze;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let settings = settings::resolve(&cmd.args.common)?;
    let analysis = analyze(&settings)?;
    let error_count = analysis.unused().len();

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary { analysis }),
        error_count,
        exit_on_errors: true,
    })
}
