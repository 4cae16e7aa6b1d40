use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for audit tools.
///
/// - `Success` (0): Analysis completed and every report was written
/// - `Failure` (1): Analysis completed but some files were skipped on error
/// - `Error` (2): Command failed (bad config, enumeration failure, unwritable report)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Analysis completed cleanly.
    Success,
    /// Analysis completed but some files were skipped on read/parse errors.
    Failure,
    /// Command failed due to an internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
