//! Helpers shared across command implementations.

use std::io::{self, IsTerminal, Read};

use nota_core::{HttpNoteGateway, ListController, Note};
use serde::Serialize;

use crate::error::CliError;

/// Build a controller backed by the HTTP gateway for the given API base URL.
pub fn build_controller(api_url: &str) -> Result<ListController<HttpNoteGateway>, CliError> {
    let gateway = HttpNoteGateway::new(api_url)?;
    Ok(ListController::new(gateway))
}

/// Trim content and reject empties.
pub fn normalize_content(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Resolve note content from CLI args, falling back to piped stdin.
pub fn resolve_note_content(content_parts: &[String]) -> Result<String, CliError> {
    if let Some(content) = normalize_content(&content_parts.join(" ")) {
        return Ok(content);
    }

    if let Some(content) = read_piped_stdin()? {
        return Ok(content);
    }

    Err(CliError::EmptyContent)
}

pub fn normalize_search_term(term: &str) -> Result<String, CliError> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptySearchTerm)
    } else {
        Ok(trimmed.to_string())
    }
}

fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_content(&buffer))
}

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: i64,
    pub title: String,
    pub content: String,
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    NoteListItem {
        id: note.id,
        title: note.title.clone(),
        content: note.content.clone(),
    }
}

/// Render notes as aligned columns: id, title, body preview.
pub fn format_note_lines(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            let title = note.title_preview(40);
            let preview = content_preview(note, 60);
            format!("{:<6}  {title:<40}  {preview}", note.id)
        })
        .collect()
}

/// First line of the body, whitespace collapsed and truncated with ellipsis.
pub fn content_preview(note: &Note, max_chars: usize) -> String {
    let first_line = note.content.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

/// Print notes either as aligned columns or pretty JSON.
pub fn print_notes(notes: &[Note], as_json: bool) -> Result<(), CliError> {
    if as_json {
        let items = notes.iter().map(note_to_list_item).collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if notes.is_empty() {
        println!("No notes");
    } else {
        for line in format_note_lines(notes) {
            println!("{line}");
        }
    }

    Ok(())
}
