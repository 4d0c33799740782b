// src/validator/mod.rs
// =============================================================================
// Basic HTML sanity validation.
//
// The checklist itself lives in rules.rs. This file handles a single input
// path: does it exist, can we read it, and what did the checklist say.
//
// A missing or unreadable path is reported and the caller moves on to the
// next one, so one bad argument never hides the results for the others.
// =============================================================================

mod rules;

pub use rules::{failed_checks, validate_text, Check};

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome for one input path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Passed,
    Failed,
    Missing,
    Unreadable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    /// Checklist findings for a Failed file, or the I/O error for an
    /// Unreadable one. Empty otherwise.
    pub findings: Vec<String>,
}

impl FileReport {
    pub fn is_ok(&self) -> bool {
        self.status == FileStatus::Passed
    }
}

/// Validates the file at `path`.
pub fn validate_path(path: &Path) -> FileReport {
    let report = |status: FileStatus, findings: Vec<String>| FileReport {
        path: path.to_path_buf(),
        status,
        findings,
    };

    if !path.exists() {
        return report(FileStatus::Missing, Vec::new());
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return report(FileStatus::Unreadable, vec![e.to_string()]),
    };

    let findings = validate_text(&String::from_utf8_lossy(&bytes));
    if findings.is_empty() {
        report(FileStatus::Passed, findings)
    } else {
        report(FileStatus::Failed, findings)
    }
}

/// Validates every path in order. One report per path.
pub fn validate_paths(paths: &[PathBuf]) -> Vec<FileReport> {
    paths.iter().map(|p| validate_path(p)).collect()
}
