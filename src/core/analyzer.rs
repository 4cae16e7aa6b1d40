//! Per-file analysis and run orchestration.
//!
//! Each file is analyzed in isolation: parse, collect import bindings over
//! the whole module, then resolve JSX usages against those bindings. The
//! binding pass completes before the usage pass starts, so a usage that
//! appears above its import statement still resolves.
//!
//! Files are processed in parallel; every file yields a pure `FileAnalysis`
//! event set, and the events are folded into the shared `UsageStats`
//! sequentially. Totals are therefore independent of worker scheduling, and
//! bindings can never leak between files.

use std::{collections::HashSet, fs, sync::Arc};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;
use swc_common::SourceMap;
use swc_ecma_visit::VisitWith;

use crate::core::{
    bindings::{BindingCollector, TrackedLibraries},
    parsers::jsx::parse_source,
    stats::{ComponentKey, UsageReport, UsageStats},
    usages::UsageCollector,
};

/// Events produced by analyzing one file.
///
/// Import and usage events reference the aggregate key directly; the file
/// path is attached once here rather than per event.
#[derive(Debug)]
pub struct FileAnalysis {
    pub file: String,
    pub imports: Vec<ComponentKey>,
    pub usages: Vec<ComponentKey>,
}

/// Analyze one file's source text.
///
/// Runs the binding pass over the entire module before the usage pass, so
/// resolution does not depend on source order.
pub fn analyze_source(
    code: String,
    file_path: &str,
    tracked: &TrackedLibraries,
    source_map: Arc<SourceMap>,
) -> Result<FileAnalysis> {
    let module = parse_source(code, file_path, source_map)?;

    let mut bindings = BindingCollector::new(tracked);
    module.visit_with(&mut bindings);

    let mut usages = UsageCollector::new(&bindings.bindings);
    module.visit_with(&mut usages);

    Ok(FileAnalysis {
        file: file_path.to_string(),
        imports: bindings.imports,
        usages: usages.usages,
    })
}

fn analyze_file(
    file_path: &str,
    tracked: &TrackedLibraries,
    source_map: Arc<SourceMap>,
) -> Result<FileAnalysis> {
    let code = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path))?;
    analyze_source(code, file_path, tracked, source_map)
}

/// Outcome of a full run over the scanned file set.
pub struct ProjectAnalysis {
    pub report: UsageReport,
    /// Files successfully parsed and folded into the report.
    pub files_analyzed: usize,
    /// Files dropped on read or parse failure.
    pub files_failed: usize,
}

/// Analyze every scanned file and aggregate the results.
///
/// A file that fails to read or parse is reported as a warning and skipped;
/// its partial events never reach the aggregate, and the run continues.
pub fn analyze_project(files: &HashSet<String>, tracked: &TrackedLibraries) -> ProjectAnalysis {
    let mut paths: Vec<&String> = files.iter().collect();
    paths.sort();

    let source_map: Arc<SourceMap> = Arc::new(SourceMap::default());

    let results: Vec<(String, Result<FileAnalysis>)> = paths
        .par_iter()
        .map(|path| {
            let result = analyze_file(path.as_str(), tracked, Arc::clone(&source_map));
            (path.to_string(), result)
        })
        .collect();

    let mut stats = UsageStats::new();
    let mut files_analyzed = 0;
    let mut files_failed = 0;

    for (path, result) in results {
        match result {
            Ok(analysis) => {
                fold_into(&mut stats, analysis);
                files_analyzed += 1;
            }
            Err(err) => {
                files_failed += 1;
                eprintln!(
                    "{} Failed to analyze {}: {:#}. Skipping file.",
                    "warning:".bold().yellow(),
                    path,
                    err
                );
            }
        }
    }

    ProjectAnalysis {
        report: stats.into_report(),
        files_analyzed,
        files_failed,
    }
}

fn fold_into(stats: &mut UsageStats, analysis: FileAnalysis) {
    for key in analysis.imports {
        stats.record_import(key, &analysis.file);
    }
    for key in analysis.usages {
        stats.record_usage(key);
    }
}
