// src/cli.rs
// =============================================================================
// This file defines the command-line interfaces using the `clap` crate.
//
// There are two tools, so there are two top-level structs. Neither uses
// subcommands: each binary does exactly one job.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// Arguments for the `check-links` binary
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "check-links",
    version,
    about = "Check broken local links in HTML files",
    long_about = "check-links walks a directory tree, reads every .html file and reports \
                  href/src values that point at local files which don't exist. \
                  External links (http, mailto, ...) and in-page fragments are skipped."
)]
pub struct LinksCli {
    /// Repo root to scan (default: current directory; must be an existing directory)
    ///
    /// A root that doesn't exist is an error (exit code 2) rather than an
    /// empty scan, so a mistyped path can't pass silently.
    ///
    /// Root-relative links like "/assets/app.css" resolve against this directory,
    /// and targets outside of it are never reported.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Output results in JSON format instead of text
    #[arg(long)]
    pub json: bool,
}

// Arguments for the `validate-html` binary
#[derive(Parser, Debug)]
#[command(
    name = "validate-html",
    version,
    about = "Basic HTML validation (sanity checks)"
)]
pub struct ValidateCli {
    /// HTML file(s) to validate
    ///
    /// required = true makes clap reject an empty list
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output results in JSON format instead of text
    #[arg(long)]
    pub json: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why PathBuf instead of String?
//    - File paths are not guaranteed to be valid UTF-8 on every platform
//    - PathBuf is the owned path type and clap parses into it directly
//
// 2. What does default_value = "." do?
//    - If --root is not given, clap fills in "." (the current directory)
//    - The field is never empty, so the rest of the code needs no Option
//
// 3. Vec<PathBuf> as a positional argument
//    - A Vec field without #[arg(long)] collects every positional value
//    - required = true means "at least one"
// -----------------------------------------------------------------------------
