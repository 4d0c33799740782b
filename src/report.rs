// src/report.rs
// =============================================================================
// Output formatting for both tools.
//
// Each report can be printed two ways:
// - Human-readable text (default)
// - JSON (--json), for scripts and CI annotations
//
// The render_* functions build the text as a String so tests can check it
// without capturing stdout. The exit code only depends on the findings, never
// on the output format.
// =============================================================================

use anyhow::Result;
use std::fmt::Write;

use crate::checker::ScanReport;
use crate::validator::{FileReport, FileStatus};

// Exit code when everything passed
pub const EXIT_OK: i32 = 0;
// Exit code when broken links or validation findings were reported
pub const EXIT_FINDINGS: i32 = 1;
// Exit code for unexpected errors (bad --root, JSON failure, ...)
pub const EXIT_ERROR: i32 = 2;

/// Exit code for a link scan.
pub fn scan_exit_code(report: &ScanReport) -> i32 {
    if report.is_clean() {
        EXIT_OK
    } else {
        EXIT_FINDINGS
    }
}

/// Exit code for a validation run: any missing, unreadable or failing path fails it.
pub fn validation_exit_code(reports: &[FileReport]) -> i32 {
    if reports.iter().all(FileReport::is_ok) {
        EXIT_OK
    } else {
        EXIT_FINDINGS
    }
}

// Renders a link scan as text
//
// Three possible shapes:
//   No .html files found.
//   ✅ No broken local links found across 3 HTML file(s).
//   ❌ Broken local links found:
//
//   - docs/index.html:4 -> broken local link: /about.html
pub fn render_scan_text(report: &ScanReport) -> String {
    if report.files_scanned == 0 {
        return "No .html files found.\n".to_string();
    }

    if report.is_clean() {
        return format!(
            "✅ No broken local links found across {} HTML file(s).\n",
            report.files_scanned
        );
    }

    let mut out = String::from("❌ Broken local links found:\n\n");
    for issue in &report.issues {
        // Writing to a String never fails
        let _ = writeln!(out, "- {}", issue);
    }
    out
}

// Renders validation results as text, one block per input path
pub fn render_validation_text(reports: &[FileReport]) -> String {
    let mut out = String::new();

    for report in reports {
        let path = report.path.display();
        match report.status {
            FileStatus::Passed => {
                let _ = writeln!(out, "✅ {} (basic checks passed)", path);
            }
            FileStatus::Missing => {
                let _ = writeln!(out, "ERROR: File not found: {}", path);
            }
            FileStatus::Unreadable => {
                let error = report.findings.join("; ");
                let _ = writeln!(out, "ERROR: Could not read {}: {}", path, error);
            }
            FileStatus::Failed => {
                // Blank line first so failing files stand out in long runs
                let _ = writeln!(out, "\n❌ {}", path);
                for finding in &report.findings {
                    let _ = writeln!(out, "  - {}", finding);
                }
            }
        }
    }

    out
}

/// Prints a link scan to stdout.
pub fn print_scan(report: &ScanReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_scan_text(report));
    }
    Ok(())
}

/// Prints validation results to stdout.
pub fn print_validation(reports: &[FileReport], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    } else {
        print!("{}", render_validation_text(reports));
    }
    Ok(())
}
