//! Note model

use serde::{Deserialize, Serialize};

/// Placeholder id sent for notes that the server has not assigned yet.
pub const UNSAVED_ID: i64 = 0;

/// A note as exchanged with the remote API.
///
/// Ids are assigned by the server; a draft carries [`UNSAVED_ID`] until the
/// create call returns the authoritative record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Server-assigned identifier (0 = unsaved placeholder)
    pub id: i64,
    /// Short title shown in lists and used for export file names
    pub title: String,
    /// Plain text body
    pub content: String,
}

impl Note {
    /// Create an unsaved draft with the placeholder id.
    #[must_use]
    pub fn draft(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Whether the server has assigned this note an id.
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        self.id != UNSAVED_ID
    }

    /// Check if note content is empty (whitespace-only counts as empty)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Get the title truncated to `max_len` characters for list display.
    #[must_use]
    pub fn title_preview(&self, max_len: usize) -> String {
        self.title.chars().take(max_len).collect()
    }
}
