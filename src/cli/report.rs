//! Terminal output for command results.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandSummary, ScanSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(summary: &CommandSummary, verbose: bool) {
    print_to(summary, verbose, &mut io::stdout().lock());
}

/// Print a command summary to a custom writer.
pub fn print_to<W: Write>(summary: &CommandSummary, verbose: bool, writer: &mut W) {
    match summary {
        CommandSummary::Scan(scan) => print_scan(scan, verbose, writer),
        CommandSummary::Init { .. } => {
            let _ = writeln!(
                writer,
                "{} Created {}",
                SUCCESS_MARK.green(),
                CONFIG_FILE_NAME
            );
        }
    }
}

fn print_scan<W: Write>(summary: &ScanSummary, verbose: bool, writer: &mut W) {
    if !summary.project.is_unknown() {
        let _ = writeln!(writer, "Project: {}", summary.project.name.bold());
        for dep in &summary.project.tracked_dependencies {
            let _ = writeln!(writer, "  declares {} {}", dep.name, dep.version.dimmed());
        }
    }

    if verbose {
        for row in &summary.report.rows {
            let used = if row.is_used() {
                "used".green()
            } else {
                "unused".red()
            };
            let _ = writeln!(
                writer,
                "  {} {} imports={} usages={} [{}]",
                row.library.dimmed(),
                row.component,
                row.import_count,
                row.usage_count,
                used
            );
        }
    }

    let unused = summary.report.rows.len() - summary.report.used_count();
    let headline = format!(
        "Audited {} files: {} tracked components, {} used, {} unused",
        summary.files_analyzed,
        summary.report.rows.len(),
        summary.report.used_count(),
        unused
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), headline.bold());

    if summary.files_failed > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) skipped due to read or parse errors",
            "warning:".bold().yellow(),
            summary.files_failed
        );
    }

    if summary.paths_skipped > 0 {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed during enumeration",
            "warning:".bold().yellow(),
            summary.paths_skipped
        );
    }

    // Only destinations that were actually written; failures are listed below.
    for path in [&summary.csv_path, &summary.json_path].into_iter().flatten() {
        let _ = writeln!(writer, "Report written to {}", path.display());
    }

    for err in &summary.write_errors {
        let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), err);
    }
}
