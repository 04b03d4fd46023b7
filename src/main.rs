//! SnapNotes - small note-taking CLI
//!
//! Create, list, view, delete, search, and export short text notes kept in
//! a local JSON file.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use snapnotes_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    // Parse failures exit with clap's usage code (2)
    let cli = Cli::parse();

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(code) => ExitCode::from(u8::from(code)),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::from(u8::from(e.exit_code()))
        }
    }
}
