// src/lib.rs
// =============================================================================
// Shared library behind the two command-line tools:
//
// - check-links:   finds href/src values that point at files which don't exist
// - validate-html: checks documents for a handful of structural markers
//
// The binaries in src/bin/ only parse arguments and print; everything that
// can be tested without spawning a process lives here.
// =============================================================================

pub mod checker;   // src/checker/ - link extraction, classification, resolution
pub mod cli;       // src/cli.rs - command-line parsing for both tools
pub mod report;    // src/report.rs - text and JSON output
pub mod validator; // src/validator/ - structural sanity checks
