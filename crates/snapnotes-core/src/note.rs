//! Note model
//!
//! A note is immutable once created; the only lifecycle events are add and delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format used for `created_at`: UTC with microsecond precision and a trailing `Z`
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// A single user-created note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique, never reused identifier
    pub id: u64,
    pub title: String,
    pub body: String,
    /// Ordered tags, duplicates preserved
    pub tags: Vec<String>,
    /// Creation timestamp, kept verbatim as written
    pub created_at: String,
}

impl Note {
    /// Build a note from raw user input.
    ///
    /// Title and body are trimmed. Tags are trimmed and empty entries dropped.
    /// Title is not required to be non-empty.
    pub fn new(id: u64, title: &str, body: &str, tags: &[String], created: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            body: body.trim().to_string(),
            tags: normalize_tags(tags),
            created_at: format_timestamp(created),
        }
    }

    /// Case-insensitive substring match against title, body, or any tag.
    /// An empty query matches every note.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q)
            || self.body.to_lowercase().contains(&q)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&q))
    }

    /// Exact, case-sensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Tags joined for display (`a, b, c`)
    pub fn tags_display(&self) -> String {
        self.tags.join(", ")
    }
}

/// Render a UTC instant the way `created_at` is stored
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(CREATED_AT_FORMAT).to_string()
}

/// Split a comma-separated tag list into raw tokens.
///
/// Tokens are not trimmed here; `Note::new` normalizes them. An empty
/// input yields no tokens.
pub fn parse_tags(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

fn normalize_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
