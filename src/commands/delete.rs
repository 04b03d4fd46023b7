//! `snapnotes delete` command - remove a note

use crate::cli::DeleteArgs;
use snapnotes_core::error::{ExitCode, Result};
use snapnotes_core::store::NoteStore;

/// Execute the delete command. A missing note is reported, not treated as failure.
pub fn execute(store: &NoteStore, args: &DeleteArgs) -> Result<ExitCode> {
    if store.delete_note(args.id)? {
        println!("Deleted.");
    } else {
        println!("Note not found.");
    }
    Ok(ExitCode::Success)
}
