// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - html: Extracts href/src references (with line numbers) from HTML
// - classify: Decides which references are external and skipped
// - resolve: Turns local references into absolute filesystem paths
// - scan: Walks the repo, checks existence, and collects issues
//
// This file (mod.rs) is the module root - it exports the public API that the
// check-links binary uses.
// =============================================================================

mod classify;
mod html;
mod resolve;
mod scan;

pub use classify::{is_external_or_special, SKIP_SCHEMES};
pub use html::{extract_references, Reference, LINK_ATTRIBUTES};
pub use resolve::{resolve_local_target, soft_canonicalize};
pub use scan::{
    check_document, find_html_files, scan_html_file, scan_tree, target_exists, LinkIssue,
    RepoRoot, ScanReport, DIRECTORY_INDEX, HTML_EXTENSION,
};
