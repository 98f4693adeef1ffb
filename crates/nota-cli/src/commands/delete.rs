use crate::commands::common::build_controller;
use crate::error::CliError;

pub async fn run_delete(id: i64, api_url: &str) -> Result<(), CliError> {
    let mut controller = build_controller(api_url)?;
    controller.delete(id).await?;

    if let Some(message) = controller.success_message() {
        println!("{message}");
    }
    Ok(())
}
