//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use snapnotes_core::config::GlobalConfig;
use snapnotes_core::error::{ExitCode, Result};
use snapnotes_core::store::NoteStore;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: GlobalConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: GlobalConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Open the store from `--store`, the global config, or the default location
    pub fn open_store(&self) -> Result<NoteStore> {
        let path = self.config.resolve_store_path(self.cli.store.as_deref())?;
        tracing::debug!(path = %path.display(), "resolved store path");
        Ok(NoteStore::open(path))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode>;
}

/// Invoked when no subcommand is provided
pub fn no_command() -> ExitCode {
    println!("No command provided. Use -h for help.");
    ExitCode::Failure
}
