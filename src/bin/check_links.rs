// src/bin/check_links.rs
// =============================================================================
// Entry point of the check-links tool.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Open the repo root and scan every .html file below it
// 3. Print the report (text or JSON)
// 4. Exit with proper code (0 = no broken links, 1 = broken links, 2 = error)
// =============================================================================

use anyhow::Result;
use clap::Parser;

use html_guardian::checker::{scan_tree, RepoRoot};
use html_guardian::cli::LinksCli;
use html_guardian::report::{print_scan, scan_exit_code, EXIT_ERROR};

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            // A bad --root is the usual way to end up here
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = no broken local links (or no .html files at all)
//   Ok(1) = broken local links found
//   Err   = the scan couldn't run
fn run() -> Result<i32> {
    let cli = LinksCli::parse();

    let root = RepoRoot::open(&cli.root)?;
    let report = scan_tree(&root);

    print_scan(&report, cli.json)?;

    Ok(scan_exit_code(&report))
}
