//! Batch processing over files and directory trees
//!
//! Files are independent units of work: each task reads, parses, resolves
//! and rewrites one file and shares nothing with the others.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::StaticfierConfig;
use crate::errors::{Result, StaticfierError};

use super::processor::process_source;
use super::report::{BatchReport, FileReport};

/// Worker stack size; the syntax tree passes recurse once per nesting level
const WORKER_STACK_BYTES: usize = 16 * 1024 * 1024;

/// Candidate files under `paths`, sorted and deduplicated
///
/// Files named explicitly are taken as they are; directories are walked,
/// skipping excluded directory names and files with other extensions.
pub fn collect_files(paths: &[PathBuf], config: &StaticfierConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for root in paths {
        if root.is_file() {
            files.push(root.clone());
            continue;
        }
        let walker = WalkDir::new(root).follow_links(false).into_iter().filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !config.is_excluded_dir(&entry.file_name().to_string_lossy())
        });
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            if entry.file_type().is_file() && has_wanted_extension(entry.path(), config) {
                files.push(entry.into_path());
            }
        }
    }
    files.sort();
    files.dedup();
    files
}

fn has_wanted_extension(path: &Path, config: &StaticfierConfig) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| config.accepts_extension(ext))
}

/// Run the recipe over every file under `paths`
///
/// Never fails as a whole: unreadable files and files that do not parse
/// are reported per file. Nothing is written; see `write_changes`.
pub fn process_paths(paths: &[PathBuf], config: &StaticfierConfig) -> BatchReport {
    let files = collect_files(paths, config);
    tracing::debug!(files = files.len(), parallel = config.parallel, "processing files");

    let reports: Vec<FileReport> = if config.parallel && files.len() > 1 {
        let threads = config.threads.unwrap_or_else(crate::default_thread_count);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .stack_size(WORKER_STACK_BYTES)
            .thread_name(|i| format!("staticfier-{i}"))
            .build();
        match pool {
            Ok(pool) => pool.install(|| files.par_iter().map(|p| process_file(p, config)).collect()),
            Err(err) => {
                tracing::warn!(error = %err, "thread pool unavailable, processing sequentially");
                files.iter().map(|p| process_file(p, config)).collect()
            }
        }
    } else {
        files.iter().map(|p| process_file(p, config)).collect()
    };

    BatchReport::from_files(reports)
}

fn process_file(path: &Path, config: &StaticfierConfig) -> FileReport {
    let size = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(err) => return FileReport::failed(path.to_path_buf(), err.to_string()),
    };
    if size > config.max_file_bytes {
        tracing::warn!(path = %path.display(), size, limit = config.max_file_bytes, "file too large, skipped");
        return FileReport::skipped(
            path.to_path_buf(),
            format!("{size} bytes exceeds the {} byte limit", config.max_file_bytes),
        );
    }

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => return FileReport::failed(path.to_path_buf(), err.to_string()),
    };

    let shown = path.to_string_lossy();
    match process_source(&source, &shown, config) {
        Ok(outcome) => {
            if outcome.is_changed() {
                tracing::info!(path = %shown, converted = outcome.converted.len(), "methods made static");
            }
            FileReport::from_outcome(path.to_path_buf(), outcome)
        }
        Err(StaticfierError::Parse { message, .. }) => {
            tracing::warn!(path = %shown, reason = %message, "file does not parse, skipped");
            FileReport::skipped(path.to_path_buf(), message)
        }
        Err(err) => {
            tracing::warn!(path = %shown, error = %err, "file left unchanged");
            FileReport::failed(path.to_path_buf(), err.to_string())
        }
    }
}

/// Write every changed file of `report` back to disk
///
/// Returns the number of files written.
pub fn write_changes(report: &BatchReport) -> Result<usize> {
    let mut written = 0;
    for file in report.changed_files() {
        if let Some(output) = &file.output {
            std::fs::write(&file.path, output)?;
            tracing::info!(path = %file.path.display(), "file written");
            written += 1;
        }
    }
    Ok(written)
}
