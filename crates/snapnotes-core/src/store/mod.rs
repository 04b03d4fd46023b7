//! Note store
//!
//! The store is a single JSON file holding every note plus the next-id counter.
//! Default location: `~/.snapnotes/notes.json`
//!
//! Every operation reloads the file, and every mutation writes it back through
//! an atomic replace. Nothing is cached between calls.

pub mod io;
mod notes;
pub mod paths;
mod query;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapError};
use crate::note::Note;
use crate::trace_time;

/// The persisted aggregate: counter plus notes in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreData {
    /// Next id to hand out; strictly greater than any id ever assigned
    pub next_id: u64,
    pub notes: Vec<Note>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            next_id: 1,
            notes: Vec::new(),
        }
    }
}

impl StoreData {
    /// Check the invariants a loaded file must satisfy
    fn validate(&self) -> std::result::Result<(), String> {
        if self.next_id == 0 {
            return Err("next_id must be at least 1".to_string());
        }

        let mut seen = HashSet::with_capacity(self.notes.len());
        for note in &self.notes {
            if note.id == 0 {
                return Err("note id 0 is not a positive id".to_string());
            }
            if !seen.insert(note.id) {
                return Err(format!("duplicate note id {}", note.id));
            }
            if note.id >= self.next_id {
                return Err(format!(
                    "note id {} is not below next_id {}",
                    note.id, self.next_id
                ));
            }
        }

        Ok(())
    }
}

/// Handle to the JSON file backing the notes
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// Open a store at an explicit file path.
    ///
    /// Nothing is touched on disk until the first operation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the canonical store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the storage directory and an empty store file if absent.
    /// Safe to call before every read.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn ensure(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .map_err(|e| SnapError::io_operation("create directory", dir.display(), e))?;
        }

        if !self.path.exists() {
            tracing::debug!("initializing empty store");
            self.save(&StoreData::default())?;
        }

        Ok(())
    }

    /// Load and validate the full store
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<StoreData> {
        let start = Instant::now();
        self.ensure()?;

        let content = io::read_store_file(&self.path)?;
        let data: StoreData = serde_json::from_str(&content)
            .map_err(|e| SnapError::corrupt_store(&self.path, e))?;
        data.validate()
            .map_err(|reason| SnapError::corrupt_store(&self.path, reason))?;

        trace_time!(start, "load_store", notes = data.notes.len());
        Ok(data)
    }

    /// Persist the full store via temp file + rename
    #[tracing::instrument(skip(self, data), fields(path = %self.path.display(), notes = data.notes.len()))]
    pub fn save(&self, data: &StoreData) -> Result<()> {
        let start = Instant::now();
        let content = serde_json::to_string_pretty(data)?;
        io::write_atomic(&self.path, content.as_bytes())?;
        trace_time!(start, "save_store");
        Ok(())
    }
}
