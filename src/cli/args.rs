//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Analyze a source tree and write the component usage report
//! - `init`: Initialize a compaudit configuration file

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

    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan a source tree and report tracked component usage
    Scan(ScanCommand),
    /// Create a default configuration file
    Init,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Tracked library identifier (repeatable, overrides config file)
    #[arg(long = "lib", value_name = "LIBRARY")]
    pub libraries: Vec<String>,

    /// CSV report path (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub csv_out: Option<PathBuf>,

    /// JSON report path (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub json_out: Option<PathBuf>,

    /// Skip the CSV report
    #[arg(long)]
    pub no_csv: bool,

    /// Skip the JSON report
    #[arg(long)]
    pub no_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
