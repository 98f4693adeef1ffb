use crate::commands::common::{build_controller, resolve_note_content};
use crate::error::CliError;

pub async fn run_add(content_parts: &[String], api_url: &str) -> Result<(), CliError> {
    let content = resolve_note_content(content_parts)?;

    let mut controller = build_controller(api_url)?;
    controller.set_draft(content);
    let created = controller.create_from_draft().await?;

    println!("{}", created.id);
    if let Some(message) = controller.success_message() {
        println!("{message}");
    }
    Ok(())
}
