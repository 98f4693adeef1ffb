use crate::commands::common::normalize_search_term;
use crate::commands::list::run_list;
use crate::error::CliError;

pub async fn run_search(term: &str, as_json: bool, api_url: &str) -> Result<(), CliError> {
    let normalized = normalize_search_term(term)?;
    run_list(Some(&normalized), as_json, api_url).await
}
