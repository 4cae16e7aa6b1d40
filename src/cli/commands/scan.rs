use std::path::{Path, PathBuf};

use anyhow::{Result, ensure};

use super::ScanSummary;
use crate::{
    cli::args::ScanCommand,
    config::load_config,
    core::{TrackedLibraries, analyze_project, file_scanner::scan_files},
    export::{write_csv_report, write_json_report},
    manifest::read_project_info,
};

pub fn scan(cmd: ScanCommand) -> Result<ScanSummary> {
    let root = &cmd.root;
    ensure!(
        root.is_dir(),
        "Cannot scan {}: not a directory",
        root.display()
    );

    let config = load_config(root)?.config;

    let libraries = if cmd.libraries.is_empty() {
        config.libraries.clone()
    } else {
        cmd.libraries.clone()
    };
    ensure!(
        !libraries.is_empty(),
        "No tracked libraries configured. Pass --lib or set \"libraries\" in {}",
        crate::config::CONFIG_FILE_NAME
    );
    let tracked = TrackedLibraries::new(libraries);

    let base_dir = root.join(&config.source_root);
    let scan_result = scan_files(
        &base_dir.to_string_lossy(),
        &config.includes,
        &config.ignores,
        config.ignore_test_files,
        cmd.verbose,
    );

    // Enumeration failing outright is a precondition failure; partial
    // access errors are warned about and the run continues.
    ensure!(
        !(scan_result.files.is_empty() && scan_result.skipped_count > 0),
        "Failed to enumerate files under {}",
        base_dir.display()
    );

    if cmd.verbose {
        println!("Analyzing {} files...", scan_result.files.len());
    }

    let analysis = analyze_project(&scan_result.files, &tracked);
    let project = read_project_info(root, &tracked);

    // Relative output paths land next to the scanned project.
    let resolve_out = |path: &Path| -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    };

    let csv_path = (!cmd.no_csv).then(|| {
        resolve_out(
            cmd.csv_out
                .as_deref()
                .unwrap_or_else(|| Path::new(&config.csv_output)),
        )
    });
    let json_path = (!cmd.no_json).then(|| {
        resolve_out(
            cmd.json_out
                .as_deref()
                .unwrap_or_else(|| Path::new(&config.json_output)),
        )
    });

    // A failed write must not discard the completed analysis, but it is
    // still surfaced to the caller through the summary status.
    let mut write_errors = Vec::new();
    let mut csv_written = None;
    if let Some(path) = csv_path {
        match write_csv_report(&analysis.report, &path) {
            Ok(()) => csv_written = Some(path),
            Err(err) => write_errors.push(format!("{:#}", err)),
        }
    }
    let mut json_written = None;
    if let Some(path) = json_path {
        let project_meta = (!project.is_unknown()).then_some(&project);
        match write_json_report(&analysis.report, project_meta, &path) {
            Ok(()) => json_written = Some(path),
            Err(err) => write_errors.push(format!("{:#}", err)),
        }
    }

    Ok(ScanSummary {
        project,
        report: analysis.report,
        files_analyzed: analysis.files_analyzed,
        files_failed: analysis.files_failed,
        paths_skipped: scan_result.skipped_count,
        csv_path: csv_written,
        json_path: json_written,
        write_errors,
    })
}
