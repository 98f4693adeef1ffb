use crate::commands::common::{build_controller, print_notes};
use crate::error::CliError;

pub async fn run_list(search: Option<&str>, as_json: bool, api_url: &str) -> Result<(), CliError> {
    let mut controller = build_controller(api_url)?;
    controller.load_all().await?;

    if let Some(term) = search {
        controller.set_search_term(term);
    }

    print_notes(controller.filtered(), as_json)
}
