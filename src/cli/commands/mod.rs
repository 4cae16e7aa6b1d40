pub mod scan;

use std::path::PathBuf;

use crate::cli::ExitStatus;
use crate::core::UsageReport;
use crate::manifest::ProjectInfo;

/// Result of running the scan command.
#[derive(Debug)]
pub struct ScanSummary {
    pub project: ProjectInfo,
    pub report: UsageReport,
    pub files_analyzed: usize,
    pub files_failed: usize,
    /// Paths that could not be accessed while enumerating files.
    pub paths_skipped: usize,
    /// Report destinations that were written (None when disabled or failed).
    pub csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
    pub write_errors: Vec<String>,
}

impl ScanSummary {
    pub fn status(&self) -> ExitStatus {
        if !self.write_errors.is_empty() {
            ExitStatus::Error
        } else if self.files_failed > 0 || self.paths_skipped > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

/// Result of running any compaudit command.
#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Init { created: bool },
}

impl CommandSummary {
    pub fn status(&self) -> ExitStatus {
        match self {
            CommandSummary::Scan(summary) => summary.status(),
            CommandSummary::Init { .. } => ExitStatus::Success,
        }
    }
}
