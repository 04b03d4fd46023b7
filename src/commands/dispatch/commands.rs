//! Command implementations for all snapnotes commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::dispatch::trace_command;
use snapnotes_core::error::{ExitCode, Result};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode> {
        let store = ctx.open_store()?;
        trace_command!(ctx, "open_store");

        let code = match self {
            Commands::Add(args) => commands::add::execute(&store, args)?,
            Commands::List(args) => commands::list::execute(&store, args)?,
            Commands::View(args) => commands::view::execute(&store, args)?,
            Commands::Delete(args) => commands::delete::execute(&store, args)?,
            Commands::Search(args) => commands::search::execute(&store, args)?,
            Commands::Export(args) => commands::export::execute(&store, &ctx.config, args)?,
        };

        trace_command!(ctx, "execute_command");
        Ok(code)
    }
}
