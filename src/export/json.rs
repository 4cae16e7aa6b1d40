use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{ComponentRow, UsageReport};
use crate::manifest::ProjectInfo;

/// One component record in the JSON report.
#[derive(Debug, Serialize)]
pub struct JsonComponent<'a> {
    pub library: &'a str,
    pub component: &'a str,
    pub import_count: u32,
    pub usage_count: u32,
    pub is_used: &'static str,
    pub files: &'a [String],
}

impl<'a> From<&'a ComponentRow> for JsonComponent<'a> {
    fn from(row: &'a ComponentRow) -> Self {
        Self {
            library: &row.library,
            component: &row.component,
            import_count: row.import_count,
            usage_count: row.usage_count,
            is_used: if row.is_used() { "Yes" } else { "No" },
            files: &row.files,
        }
    }
}

/// Report wrapped with manifest-derived project metadata.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    project: &'a ProjectInfo,
    components: Vec<JsonComponent<'a>>,
}

/// Render the report as pretty-printed JSON.
///
/// With a known project the records are wrapped alongside the manifest
/// metadata; otherwise the output is the bare component array.
pub fn render_json(report: &UsageReport, project: Option<&ProjectInfo>) -> Result<String> {
    let components: Vec<JsonComponent> = report.rows.iter().map(JsonComponent::from).collect();

    let rendered = match project {
        Some(project) => serde_json::to_string_pretty(&JsonReport {
            project,
            components,
        }),
        None => serde_json::to_string_pretty(&components),
    };
    rendered.context("Failed to serialize JSON report")
}

/// Write the JSON report to `path`.
pub fn write_json_report(
    report: &UsageReport,
    project: Option<&ProjectInfo>,
    path: &Path,
) -> Result<()> {
    let rendered = render_json(report, project)?;
    fs::write(path, rendered)
        .with_context(|| format!("Failed to write JSON report to {}", path.display()))
}
