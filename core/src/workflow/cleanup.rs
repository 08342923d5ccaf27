use std::path::{Path, PathBuf};

use crate::config::CleanupConfig;
use crate::error::WorkflowError;
use crate::runner::{Console, OperationResult, RunReport};

use super::conclude;

/// Removes build output, bytecode caches and scratch files under `root`.
/// Every removal is attempted; any failure makes the report unsuccessful.
/// A config that could reach outside `root` removes nothing.
#[tracing::instrument(name = "workflow.cleanup", skip(console, cfg))]
pub fn run_cleanup(console: &Console, cfg: &CleanupConfig, root: &Path) -> RunReport {
    console.line("Cleaning project...");
    let mut report = RunReport::new("cleanup");

    let cache_pattern = match cfg.validate() {
        Ok(pattern) => pattern,
        Err(msg) => {
            return conclude(
                console,
                report,
                Err(WorkflowError::unexpected(format!("invalid cleanup config: {msg}"))),
            );
        }
    };

    for dir in &cfg.directories {
        let path = root.join(dir);
        if path.is_dir() {
            console.line(format!("Removing directory: {dir}"));
            remove(console, &mut report, root, &path, Kind::Dir);
        }
    }

    for path in cache_dirs(root, &cache_pattern) {
        console.line(format!("Removing cache: {}", display_rel(root, &path)));
        remove(console, &mut report, root, &path, Kind::Dir);
    }

    for file in &cfg.files {
        let path = root.join(file);
        if path.exists() {
            console.line(format!("Removing file: {file}"));
            remove(console, &mut report, root, &path, Kind::File);
        }
    }

    let report = conclude(console, report, Ok(()));
    if report.overall_success {
        console.line("");
        console.success("Project cleanup complete");
    } else {
        console.line("");
        console.failure(format!(
            "Cleanup finished with {} error(s)",
            report.errors.len()
        ));
    }
    report
}

#[derive(Clone, Copy)]
enum Kind {
    Dir,
    File,
}

fn remove(console: &Console, report: &mut RunReport, root: &Path, path: &Path, kind: Kind) {
    let rel = display_rel(root, path);
    let res = match kind {
        Kind::Dir => std::fs::remove_dir_all(path),
        Kind::File => std::fs::remove_file(path),
    };
    match res {
        Ok(()) => {
            console.success(format!("Removed {rel}"));
            report.push(OperationResult {
                name: format!("remove {rel}"),
                succeeded: true,
                exit_code: 0,
                stdout: String::new(),
                stderr: String::new(),
                duration_ms: 0,
            });
        }
        Err(e) => {
            console.failure(format!("Failed to remove {rel}: {e}"));
            tracing::warn!(path = %path.display(), "remove failed: {e}");
            report.record_error(format!("{rel}: {e}"));
        }
    }
}

/// Every directory below `root` whose name matches `pattern`, sorted.
/// Symlinks are neither followed nor matched, and a match is not descended
/// into since it goes away as a whole.
fn cache_dirs(root: &Path, pattern: &glob::Pattern) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), "skipping unreadable directory: {e}");
                continue;
            }
        };
        for entry in entries.flatten() {
            // DirEntry::file_type reports the link itself, not its target.
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                continue;
            }
            let path = entry.path();
            if entry.file_name().to_str().is_some_and(|n| pattern.matches(n)) {
                found.push(path);
            } else {
                pending.push(path);
            }
        }
    }

    found.sort();
    found
}

fn display_rel(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
