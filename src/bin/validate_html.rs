// src/bin/validate_html.rs
// =============================================================================
// Entry point of the validate-html tool.
//
// Every path given on the command line is checked, even after one of them
// turns out to be missing. The exit code is 1 if any path was missing,
// unreadable or failed a check.
// =============================================================================

use anyhow::Result;
use clap::Parser;

use html_guardian::cli::ValidateCli;
use html_guardian::report::{print_validation, validation_exit_code, EXIT_ERROR};
use html_guardian::validator::validate_paths;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = ValidateCli::parse();

    let reports = validate_paths(&cli.paths);
    print_validation(&reports, cli.json)?;

    Ok(validation_exit_code(&reports))
}
