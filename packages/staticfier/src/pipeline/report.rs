//! Batch report
//!
//! Serialised as-is for `--json`; the rewritten text is kept out of the
//! serialised form.

use std::path::PathBuf;

use serde::Serialize;

use super::processor::{ConvertedMethod, FileOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Unchanged,
    Changed,
    /// Not processed: too large, or not parseable
    Skipped { reason: String },
    /// Could not be read
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub converted: Vec<ConvertedMethod>,
    pub rejected: usize,
    #[serde(skip)]
    pub output: Option<String>,
}

impl FileReport {
    pub fn from_outcome(path: PathBuf, outcome: FileOutcome) -> Self {
        let rejected = outcome.rejected_count();
        if outcome.is_changed() {
            Self {
                path,
                status: FileStatus::Changed,
                converted: outcome.converted,
                rejected,
                output: Some(outcome.output),
            }
        } else {
            Self {
                path,
                status: FileStatus::Unchanged,
                converted: Vec::new(),
                rejected,
                output: None,
            }
        }
    }

    pub fn skipped(path: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            path,
            status: FileStatus::Skipped {
                reason: reason.into(),
            },
            converted: Vec::new(),
            rejected: 0,
            output: None,
        }
    }

    pub fn failed(path: PathBuf, error: impl Into<String>) -> Self {
        Self {
            path,
            status: FileStatus::Failed {
                error: error.into(),
            },
            converted: Vec::new(),
            rejected: 0,
            output: None,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.status == FileStatus::Changed
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub methods_converted: usize,
    pub methods_rejected: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    pub totals: Totals,
}

impl BatchReport {
    /// Report over `files`, sorted by path
    pub fn from_files(mut files: Vec<FileReport>) -> Self {
        files.sort_by(|a, b| a.path.cmp(&b.path));
        let mut totals = Totals {
            files_scanned: files.len(),
            ..Totals::default()
        };
        for file in &files {
            match file.status {
                FileStatus::Changed => totals.files_changed += 1,
                FileStatus::Skipped { .. } => totals.files_skipped += 1,
                FileStatus::Failed { .. } => totals.files_failed += 1,
                FileStatus::Unchanged => {}
            }
            totals.methods_converted += file.converted.len();
            totals.methods_rejected += file.rejected;
        }
        Self { files, totals }
    }

    pub fn has_changes(&self) -> bool {
        self.totals.files_changed > 0
    }

    pub fn changed_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.is_changed())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
