//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report translation keys that no source file references
//! - `clean`: Report unused keys and remove them after confirmation
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Clean(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the scanning commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Translation file to check (overrides config file)
    #[arg(short, long, env = "TRANSWEEP_TRANSLATION_FILE")]
    pub translation_file: Option<PathBuf>,

    /// Project root to scan for key usages (overrides config file)
    #[arg(short, long, env = "TRANSWEEP_PROJECT_PATH")]
    pub project_path: Option<PathBuf>,

    /// Comma-separated file extensions to scan; empty scans every file
    /// (overrides config file)
    #[arg(short, long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Ask for the translation file, project path and extensions
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Remove unused keys without asking for confirmation
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report translation keys that are never used in the project
    Check(CheckCommand),
    /// Remove unused translation keys from the translation file
    Clean(CleanCommand),
    /// Initialize a new .transweeprc.json configuration file
    Init,
}
