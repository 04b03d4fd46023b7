use chrono::{DateTime, Utc};
use tracing::debug;

use super::NoteStore;
use crate::error::{Result, SnapError};
use crate::note::Note;

impl NoteStore {
    /// Create a note stamped with the current time and persist it
    pub fn add_note(&self, title: &str, body: &str, tags: &[String]) -> Result<Note> {
        self.add_note_at(title, body, tags, Utc::now())
    }

    /// Create a note with an explicit creation instant and persist it
    #[tracing::instrument(skip(self, body, tags), fields(tags = tags.len()))]
    pub fn add_note_at(
        &self,
        title: &str,
        body: &str,
        tags: &[String],
        created: DateTime<Utc>,
    ) -> Result<Note> {
        let mut data = self.load()?;

        let next_id = data
            .next_id
            .checked_add(1)
            .ok_or_else(|| SnapError::corrupt_store(self.path(), "next_id overflow"))?;

        let note = Note::new(data.next_id, title, body, tags, created);
        data.notes.push(note.clone());
        data.next_id = next_id;

        self.save(&data)?;
        debug!(id = note.id, next_id = data.next_id, "added note");
        Ok(note)
    }

    /// All notes in insertion order
    pub fn list_notes(&self) -> Result<Vec<Note>> {
        Ok(self.load()?.notes)
    }

    /// Look up a note by id
    pub fn find_note(&self, id: u64) -> Result<Option<Note>> {
        Ok(self.load()?.notes.into_iter().find(|n| n.id == id))
    }

    /// Look up a note by id, treating absence as an error
    pub fn get_note(&self, id: u64) -> Result<Note> {
        self.find_note(id)?.ok_or(SnapError::NoteNotFound { id })
    }

    /// Remove a note by id.
    ///
    /// Returns whether a note was removed. The file is only rewritten when
    /// something changed.
    #[tracing::instrument(skip(self))]
    pub fn delete_note(&self, id: u64) -> Result<bool> {
        let mut data = self.load()?;

        let before = data.notes.len();
        data.notes.retain(|n| n.id != id);
        if data.notes.len() == before {
            debug!("no note to delete");
            return Ok(false);
        }

        self.save(&data)?;
        debug!("deleted note");
        Ok(true)
    }
}
