//! `snapnotes list` command - list notes
//!
//! - Stored (insertion) order
//! - `--tags` keeps notes carrying exactly that tag

use crate::cli::ListArgs;
use snapnotes_core::error::{ExitCode, Result};
use snapnotes_core::note::Note;
use snapnotes_core::store::NoteStore;

/// Execute the list command
pub fn execute(store: &NoteStore, args: &ListArgs) -> Result<ExitCode> {
    let notes = filter_by_tag(store.list_notes()?, args.tags.as_deref());

    if notes.is_empty() {
        println!("No notes yet.");
        return Ok(ExitCode::Success);
    }

    for note in &notes {
        println!("{}", format_line(note));
    }

    Ok(ExitCode::Success)
}

/// An empty tag means no filter
fn filter_by_tag(notes: Vec<Note>, tag: Option<&str>) -> Vec<Note> {
    match tag.filter(|t| !t.is_empty()) {
        Some(tag) => notes.into_iter().filter(|n| n.has_tag(tag)).collect(),
        None => notes,
    }
}

fn format_line(note: &Note) -> String {
    format!("[{}] {} ({})", note.id, note.title, note.tags_display())
}
