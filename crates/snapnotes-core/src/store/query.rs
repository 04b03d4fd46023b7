use super::NoteStore;
use crate::error::Result;
use crate::note::Note;

impl NoteStore {
    /// Notes whose title, body, or any tag contains `query`, ignoring case.
    /// Results keep stored order; an empty query returns everything.
    #[tracing::instrument(skip(self))]
    pub fn search_notes(&self, query: &str) -> Result<Vec<Note>> {
        let matches: Vec<Note> = self
            .list_notes()?
            .into_iter()
            .filter(|n| n.matches(query))
            .collect();

        tracing::debug!(results = matches.len(), "search complete");
        Ok(matches)
    }
}
