//! `snapnotes view` command - show a single note

use crate::cli::ViewArgs;
use snapnotes_core::error::{ExitCode, Result, SnapError};
use snapnotes_core::note::Note;
use snapnotes_core::store::NoteStore;

/// Execute the view command
pub fn execute(store: &NoteStore, args: &ViewArgs) -> Result<ExitCode> {
    match store.get_note(args.id) {
        Ok(note) => {
            println!("{}", format_note(&note));
            Ok(ExitCode::Success)
        }
        Err(SnapError::NoteNotFound { id }) => {
            println!("Note {} not found", id);
            Ok(ExitCode::Failure)
        }
        Err(e) => Err(e),
    }
}

fn format_note(note: &Note) -> String {
    format!(
        "{} (id={})\ncreated: {}\ntags: {}\n\n{}",
        note.title,
        note.id,
        note.created_at,
        note.tags_display(),
        note.body
    )
}
