//! `snapnotes export` command - write all notes to a Markdown or JSON file

use crate::cli::ExportArgs;
use snapnotes_core::config::GlobalConfig;
use snapnotes_core::error::{ExitCode, Result};
use snapnotes_core::export::export_notes;
use snapnotes_core::store::NoteStore;

/// Execute the export command
pub fn execute(store: &NoteStore, config: &GlobalConfig, args: &ExportArgs) -> Result<ExitCode> {
    let format = config.resolve_export_format(args.format);
    tracing::debug!(%format, "export format");

    let out = export_notes(store, &args.path, format)?;

    println!("Exported {}", out.display());
    Ok(ExitCode::Success)
}
