//! Command-line interface layer.

use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod args;
pub mod commands;
mod exit_status;
pub mod prompt;
pub mod report;
mod run;
pub mod settings;

pub use args::*;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(ExitStatus::from(&result))
}

/// Send diagnostics to stderr. `RUST_LOG` takes precedence; otherwise
/// `--verbose` enables debug events and logging stays off.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "transweep=debug" } else { "off" })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
