//! `snapnotes add` command - create a note

use crate::cli::AddArgs;
use snapnotes_core::error::{ExitCode, Result};
use snapnotes_core::note::parse_tags;
use snapnotes_core::store::NoteStore;

/// Execute the add command
pub fn execute(store: &NoteStore, args: &AddArgs) -> Result<ExitCode> {
    let tags = args.tags.as_deref().map(parse_tags).unwrap_or_default();
    let note = store.add_note(&args.title, &args.body, &tags)?;

    println!("Added note id={} title={}", note.id, note.title);
    Ok(ExitCode::Success)
}
