//! Plain-text note export shared by all clients.

use crate::Note;

/// File extension for exported notes.
pub const EXPORT_EXTENSION: &str = "txt";

/// Fallback file stem when a title sanitizes down to nothing.
const DEFAULT_FILE_STEM: &str = "nota";

/// Render a note in the fixed two-field text layout.
///
/// The layout is part of the external contract: a `Título:` line, a blank
/// line, then `Conteúdo:` followed by the body on its own lines.
#[must_use]
pub fn render_text_export(note: &Note) -> String {
    format!("Título: {}\n\nConteúdo:\n{}", note.title, note.content)
}

/// Derive a safe file name (`<stem>.txt`) from a note title.
///
/// Titles are user-controlled and flow into the filesystem, so path
/// separators and control characters must never survive into the name.
#[must_use]
pub fn export_file_name(title: &str) -> String {
    format!("{}.{EXPORT_EXTENSION}", sanitize_file_stem(title))
}

/// Strip path separators, control characters, and characters that are
/// reserved in file names. Falls back to a default stem when nothing usable
/// remains.
#[must_use]
pub fn sanitize_file_stem(title: &str) -> String {
    let stem: String = title
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .collect();

    let stem = stem.trim().trim_matches('.');
    if stem.is_empty() {
        DEFAULT_FILE_STEM.to_string()
    } else {
        stem.to_string()
    }
}
