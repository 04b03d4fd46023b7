//! `snapnotes search` command - case-insensitive substring search

use crate::cli::SearchArgs;
use snapnotes_core::error::{ExitCode, Result};
use snapnotes_core::note::Note;
use snapnotes_core::store::NoteStore;

const PREVIEW_CHARS: usize = 80;

/// Execute the search command
pub fn execute(store: &NoteStore, args: &SearchArgs) -> Result<ExitCode> {
    let results = store.search_notes(&args.query)?;

    if results.is_empty() {
        println!("No matches.");
        return Ok(ExitCode::Success);
    }

    for note in &results {
        println!("{}", format_hit(note));
    }

    Ok(ExitCode::Success)
}

fn format_hit(note: &Note) -> String {
    format!("[{}] {} — {}", note.id, note.title, preview(&note.body))
}

/// First 80 characters of the body with newlines flattened to spaces
fn preview(body: &str) -> String {
    body.chars()
        .take(PREVIEW_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}
