//! Command-line interface layer.

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;
pub mod run;

pub use args::{Arguments, Command, ScanCommand};
pub use commands::{CommandSummary, ScanSummary};
pub use exit_status::ExitStatus;

use anyhow::Result;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let summary = run::run(args)?;
    report::print(&summary, verbose);

    Ok(summary.status())
}
