use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::core::UsageReport;

/// Quote a CSV field, doubling any embedded quotes.
fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render the report as CSV text, one row per (library, component) pair.
pub fn render_csv(report: &UsageReport) -> String {
    let mut out = String::from("Library,Component,ImportCount,UsageCount,isUsed,Files\n");

    for row in &report.rows {
        let is_used = if row.is_used() { "Yes" } else { "No" };
        let file_list = row.files.join("; ");
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            quote_field(&row.library),
            quote_field(&row.component),
            row.import_count,
            row.usage_count,
            quote_field(is_used),
            quote_field(&file_list),
        ));
    }

    out
}

/// Write the CSV report to `path`.
pub fn write_csv_report(report: &UsageReport, path: &Path) -> Result<()> {
    fs::write(path, render_csv(report))
        .with_context(|| format!("Failed to write CSV report to {}", path.display()))
}
