use std::path::{Path, PathBuf};

use nota_core::export::{export_file_name, render_text_export};
use nota_core::{Error, Note};

use crate::commands::common::build_controller;
use crate::error::CliError;

pub async fn run_export(id: i64, output_path: Option<&Path>, api_url: &str) -> Result<(), CliError> {
    let mut controller = build_controller(api_url)?;
    controller.load_all().await?;

    let note = controller
        .notes()
        .iter()
        .find(|note| note.id == id)
        .cloned()
        .ok_or(Error::NotFound(id))?;

    let path = write_export(&note, output_path)?;
    controller.set_success(nota_core::controller::MSG_EXPORTED);

    println!("{}", path.display());
    if let Some(message) = controller.success_message() {
        println!("{message}");
    }
    Ok(())
}

/// Write the plain-text rendering of a note, deriving the file name from the
/// sanitized title when no explicit path is given.
pub fn write_export(note: &Note, output_path: Option<&Path>) -> Result<PathBuf, CliError> {
    let path = output_path.map_or_else(|| PathBuf::from(export_file_name(&note.title)), Path::to_path_buf);

    std::fs::write(&path, render_text_export(note))?;
    Ok(path)
}
