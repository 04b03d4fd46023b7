//! Export of the full note collection to Markdown or JSON
//!
//! Exports are plain overwrites of the target path. They are not the
//! canonical store, so no atomic replace is done here.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapError};
use crate::note::Note;
use crate::store::NoteStore;

/// Export output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One Markdown section per note
    #[default]
    #[serde(alias = "markdown")]
    Md,
    /// `{"notes": [...]}`
    Json,
}

impl ExportFormat {
    pub const VALID_FORMATS: &'static [&'static str] = &["md", "json"];
}

impl FromStr for ExportFormat {
    type Err = SnapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(ExportFormat::Md),
            "json" => Ok(ExportFormat::Json),
            other => Err(SnapError::unsupported(
                "export format",
                other,
                Self::VALID_FORMATS.join(", "),
            )),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Md => write!(f, "md"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Shape of a JSON export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub notes: Vec<Note>,
}

/// Render notes as Markdown, one section per note in the given order
pub fn render_markdown(notes: &[Note]) -> String {
    let mut output = String::new();

    for note in notes {
        output.push_str(&format!("# {} (id={})\n", note.title, note.id));
        output.push_str(&format!("_created: {}_\n\n", note.created_at));
        if !note.tags.is_empty() {
            output.push_str(&format!("**tags:** {}\n\n", note.tags_display()));
        }
        output.push_str(&note.body);
        output.push_str("\n\n---\n\n");
    }

    output
}

/// Render notes as a pretty-printed JSON export document
pub fn render_json(notes: &[Note]) -> Result<String> {
    let doc = ExportDocument {
        notes: notes.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Read back a JSON export
pub fn read_json_export(path: &Path) -> Result<ExportDocument> {
    let content = fs::read_to_string(path)
        .map_err(|e| SnapError::io_operation("read export", path.display(), e))?;
    Ok(serde_json::from_str(&content)?)
}

/// Write every note in the store to `path` in the given format.
/// Returns the path that was written.
#[tracing::instrument(skip(store, path), fields(path = %path.display()))]
pub fn export_notes(store: &NoteStore, path: &Path, format: ExportFormat) -> Result<PathBuf> {
    let notes = store.list_notes()?;

    let content = match format {
        ExportFormat::Md => render_markdown(&notes),
        ExportFormat::Json => render_json(&notes)?,
    };

    fs::write(path, content).map_err(|e| SnapError::io_operation("write", path.display(), e))?;

    tracing::debug!(notes = notes.len(), "export written");
    Ok(path.to_path_buf())
}
