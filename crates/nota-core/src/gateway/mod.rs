//! Remote store gateway for the notes API.
//!
//! The remote service is the single source of truth; the gateway exposes the
//! three CRUD calls the controller needs and nothing else.

use std::time::Duration;

use reqwest::StatusCode;

use crate::error::{Error, Result};
use crate::models::Note;
use crate::util::{compact_text, normalize_text_option};

const GATEWAY_HTTP_TIMEOUT_SECS: u64 = 10;

/// Abstract CRUD seam over the remote note store.
///
/// The controller only depends on this trait, so tests can substitute an
/// in-memory store for the HTTP client.
#[allow(async_fn_in_trait)]
pub trait NoteGateway {
    /// Fetch the full collection in the server's append order (oldest-first).
    async fn list(&self) -> Result<Vec<Note>>;

    /// Submit a draft (placeholder id 0); returns the server-assigned record.
    async fn create(&self, draft: &Note) -> Result<Note>;

    /// Delete a note by id. The response body is ignored.
    async fn delete(&self, id: i64) -> Result<()>;
}

/// HTTP implementation of [`NoteGateway`] over the `/posts` contract.
#[derive(Clone)]
pub struct HttpNoteGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNoteGateway {
    /// Build a gateway for the given API base URL.
    ///
    /// The URL must carry an `http://` or `https://` scheme; a trailing slash
    /// is stripped so route composition stays predictable.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into())?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(GATEWAY_HTTP_TIMEOUT_SECS))
            .build()?;

        Ok(Self { base_url, client })
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }
}

impl NoteGateway for HttpNoteGateway {
    async fn list(&self) -> Result<Vec<Note>> {
        tracing::debug!(url = %self.posts_url(), "listing notes");

        let response = self
            .client
            .get(self.posts_url())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json::<Vec<Note>>().await?)
    }

    async fn create(&self, draft: &Note) -> Result<Note> {
        tracing::debug!(title = %draft.title, "creating note");

        let response = self
            .client
            .post(self.posts_url())
            .json(draft)
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json::<Note>().await?)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        tracing::debug!(id, "deleting note");

        let response = self
            .client
            .delete(format!("{}/{id}", self.posts_url()))
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api(format_api_error(status, &body)))
}

fn format_api_error(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", compact_text(trimmed), status.as_u16())
    }
}

fn normalize_base_url(raw: String) -> Result<String> {
    let url = normalize_text_option(Some(raw)).ok_or_else(|| {
        Error::InvalidConfiguration("API base URL must not be empty".to_string())
    })?;
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.trim_end_matches('/').to_string())
    } else {
        Err(Error::InvalidConfiguration(
            "API base URL must include http:// or https://".to_string(),
        ))
    }
}
