use crate::core::Analysis;

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub analysis: Analysis,
}

/// What `clean` did with the unused keys it found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    /// No unused keys, or no keys at all.
    NothingToClean,
    /// Keys were removed and the file was rewritten.
    Removed { count: usize },
    /// The user answered no at the confirmation prompt.
    Declined,
    /// Not confirmed and no terminal to ask on.
    DryRun { count: usize },
}

#[derive(Debug)]
pub struct CleanSummary {
    pub analysis: Analysis,
    pub outcome: CleanOutcome,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running transweep commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (clean reports work done, not problems).
    pub exit_on_errors: bool,
}
