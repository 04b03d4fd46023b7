//! CLI argument parsing for snapnotes
//!
//! Uses clap for argument parsing.
//! Supports global flags: --store, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{AddArgs, DeleteArgs, ExportArgs, ListArgs, SearchArgs, ViewArgs};

/// SnapNotes - small CLI note tool
#[derive(Parser, Debug)]
#[command(name = "snapnotes")]
#[command(author, version, about = "Small CLI note tool", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Store file path (default: ~/.snapnotes/notes.json)
    #[arg(long, global = true, env = "SNAPNOTES_STORE")]
    pub store: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. `debug`, `snapnotes_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    Add(AddArgs),

    /// List notes
    List(ListArgs),

    /// View a note
    View(ViewArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Search notes
    Search(SearchArgs),

    /// Export notes
    Export(ExportArgs),
}
