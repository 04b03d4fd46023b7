//! Command dispatch logic for snapnotes

use std::time::Instant;

use crate::cli::Cli;
use snapnotes_core::config::GlobalConfig;
use snapnotes_core::error::{ExitCode, Result};
use tracing::debug;

mod command;
mod commands;
mod macros;

pub(crate) use macros::trace_command;

use command::{no_command, Command, CommandContext};

pub fn run(cli: &Cli, start: Instant) -> Result<ExitCode> {
    // Config is only read once a subcommand is known
    let Some(cmd) = &cli.command else {
        return Ok(no_command());
    };

    let config = GlobalConfig::load()?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);
    cmd.execute(&ctx)
}
