// src/checker/scan.rs
// =============================================================================
// This module ties the link checker together.
//
// How it works:
// 1. Walk the repo root and collect every .html file
// 2. For each file, extract references (html.rs)
// 3. Resolve each local reference to a path (resolve.rs)
// 4. Ignore paths outside the repo root
// 5. Report paths that don't exist as broken links
//
// Everything is sequential: one file is fully checked before the next.
//
// Rust concepts:
// - Enums with data: LinkIssue carries different fields per variant
// - Display trait: Controls how a value is printed with {}
// =============================================================================

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::html::extract_references;
use super::resolve::resolve_local_target;

/// File extension of the documents we scan.
pub const HTML_EXTENSION: &str = "html";

/// File that makes a directory count as an existing link target.
pub const DIRECTORY_INDEX: &str = "index.html";

// The directory that bounds the scan
//
// The path is canonicalized once up front so that every containment test
// compares canonical paths on both sides.
#[derive(Debug, Clone)]
pub struct RepoRoot {
    path: PathBuf,
}

impl RepoRoot {
    /// Canonicalizes `path` and checks that it is a directory.
    pub fn open(path: &Path) -> Result<Self> {
        let canonical = fs::canonicalize(path)
            .with_context(|| format!("Cannot open repo root '{}'", path.display()))?;

        if !canonical.is_dir() {
            bail!("Repo root '{}' is not a directory", path.display());
        }

        Ok(Self { path: canonical })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if `target` (already canonical) is the root or lies below it.
    pub fn contains(&self, target: &Path) -> bool {
        target.starts_with(&self.path)
    }

    // Path of a file relative to the root, for display in reports
    fn relative<'a>(&self, file: &'a Path) -> &'a Path {
        file.strip_prefix(&self.path).unwrap_or(file)
    }
}

// One problem found while checking a document
//
// #[serde(tag = "kind")] adds a "kind" field naming the variant in JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkIssue {
    /// A local link whose target doesn't exist
    BrokenLink {
        /// Document path, relative to the repo root
        file: PathBuf,
        /// Line of the tag holding the link
        line: u64,
        /// The link exactly as written (after trimming)
        reference: String,
    },
    /// The document itself couldn't be read
    Unreadable { file: PathBuf, error: String },
}

impl fmt::Display for LinkIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkIssue::BrokenLink { file, line, reference } => write!(
                f,
                "{}:{} -> broken local link: {}",
                file.display(),
                line,
                reference
            ),
            LinkIssue::Unreadable { file, error } => {
                write!(f, "{}: could not read file: {}", file.display(), error)
            }
        }
    }
}

// Result of scanning a whole tree
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub files_scanned: usize,
    pub issues: Vec<LinkIssue>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Does a resolved target exist as far as a browser is concerned?
///
/// A regular file exists. A directory only exists if it has an index.html,
/// because that's what a static web server would send back.
pub fn target_exists(target: &Path) -> bool {
    if target.is_file() {
        return true;
    }
    if target.is_dir() {
        return target.join(DIRECTORY_INDEX).is_file();
    }
    false
}

// Collects every .html file under the root, sorted by file name within each
// directory so reports come out the same on every run.
//
// Unreadable directory entries are reported as warnings and skipped.
pub fn find_html_files(root: &RepoRoot) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root.path()).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("Warning: Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let is_html = entry
            .path()
            .extension()
            .is_some_and(|ext| ext == HTML_EXTENSION);

        // Symlinked documents count; symlinked directories aren't descended
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());

        if is_file && is_html {
            files.push(entry.into_path());
        }
    }

    files
}

// Checks the links in one document's text
//
// Parameters:
//   text: the document contents
//   html_file: absolute path of the document (relative links start here)
//   root: the repo root
//
// Returns: one BrokenLink per missing in-scope target, in document order
pub fn check_document(text: &str, html_file: &Path, root: &RepoRoot) -> Vec<LinkIssue> {
    let mut issues = Vec::new();

    for reference in extract_references(text) {
        let Some(target) = resolve_local_target(&reference.url, html_file, root.path()) else {
            continue;
        };

        // Outside the repo isn't our business, even if it's missing
        if !root.contains(&target) {
            continue;
        }

        if !target_exists(&target) {
            issues.push(LinkIssue::BrokenLink {
                file: root.relative(html_file).to_path_buf(),
                line: reference.line,
                reference: reference.url,
            });
        }
    }

    issues
}

/// Reads one document and checks its links.
///
/// Invalid UTF-8 is replaced rather than treated as an error. A file that
/// can't be read at all produces a single `Unreadable` issue.
pub fn scan_html_file(html_file: &Path, root: &RepoRoot) -> Vec<LinkIssue> {
    match fs::read(html_file) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            check_document(&text, html_file, root)
        }
        Err(e) => vec![LinkIssue::Unreadable {
            file: root.relative(html_file).to_path_buf(),
            error: e.to_string(),
        }],
    }
}

/// Scans every .html file under the root.
pub fn scan_tree(root: &RepoRoot) -> ScanReport {
    let files = find_html_files(root);

    let mut issues = Vec::new();
    for file in &files {
        issues.extend(scan_html_file(file, root));
    }

    ScanReport {
        root: root.path().to_path_buf(),
        files_scanned: files.len(),
        issues,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is `let ... else`?
//    - let Some(target) = value else { continue; };
//    - Binds target if the pattern matches, otherwise runs the else block
//    - The else block must leave the current scope (continue, return, ...)
//
// 2. Why String::from_utf8_lossy?
//    - read_to_string fails on invalid UTF-8
//    - from_utf8_lossy swaps bad bytes for U+FFFD and keeps going
//    - A stray Latin-1 byte shouldn't stop the link check
//
// 3. What does Path::starts_with do?
//    - It compares whole components, not characters
//    - "/site/docs" starts with "/site" but "/site2" does not
// -----------------------------------------------------------------------------
