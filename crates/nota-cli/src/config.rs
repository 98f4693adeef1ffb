//! API endpoint configuration.
//!
//! The base URL comes from the `--api-url` flag, falling back to the
//! `NOTA_API_URL` environment variable (`.env` files are loaded at startup).

use std::env;

use nota_core::util::{is_http_url, normalize_text_option};

use crate::error::CliError;

pub const API_URL_ENV: &str = "NOTA_API_URL";

/// Resolve the API base URL from the flag or the environment.
pub fn resolve_api_url(flag: Option<String>) -> Result<String, CliError> {
    let candidate = normalize_text_option(flag)
        .or_else(|| normalize_text_option(env::var(API_URL_ENV).ok()));

    let Some(url) = candidate else {
        return Err(CliError::ApiUrlNotConfigured);
    };

    let url = normalize_api_url(url)?;
    tracing::debug!(url = %url, "resolved API base URL");
    Ok(url)
}

/// Validate the scheme and strip a trailing slash.
pub fn normalize_api_url(url: String) -> Result<String, CliError> {
    let url = url.trim();
    if is_http_url(url) {
        Ok(url.trim_end_matches('/').to_string())
    } else {
        Err(CliError::Config(format!(
            "API URL must include http:// or https:// (got '{url}')"
        )))
    }
}
