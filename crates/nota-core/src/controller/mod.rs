//! List controller - keeps the in-memory note list consistent with the
//! remote store across create/delete operations and local filtering.
//!
//! The remote API is the source of truth. Every mutation resynchronizes by
//! reloading the full collection, so the client never patches records in
//! place. The derived filtered view is recomputed synchronously whenever the
//! canonical list or the search term changes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::error::{Error, Result};
use crate::gateway::NoteGateway;
use crate::models::Note;

/// How long a success message stays visible before it self-clears.
pub const SUCCESS_MESSAGE_TTL: Duration = Duration::from_millis(2000);

pub const MSG_CREATED: &str = "Nota criada com sucesso!";
pub const MSG_DELETED: &str = "Nota excluída com sucesso!";
pub const MSG_EXPORTED: &str = "Nota exportada com sucesso!";
pub const MSG_EMPTY_CONTENT: &str = "O conteúdo da nota não pode estar vazio!";

/// At most one status message is active at a time. Success messages carry a
/// version so a stale scheduled clear never wipes a newer message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success { text: String, version: u64 },
    Error { text: String },
}

/// Token for a load in flight. Completions are applied in issue order;
/// a completion older than the last applied one is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Client-side mirror of the remote note collection plus its derived
/// filtered view and transient status messaging.
pub struct ListController<G> {
    gateway: G,
    canonical: Vec<Note>,
    filtered: Vec<Note>,
    search_term: String,
    draft: String,
    status: Option<StatusMessage>,
    message_version: u64,
    issued_loads: u64,
    applied_load: u64,
}

impl<G: NoteGateway> ListController<G> {
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            canonical: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            draft: String::new(),
            status: None,
            message_version: 0,
            issued_loads: 0,
            applied_load: 0,
        }
    }

    /// The canonical list, newest-first.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.canonical
    }

    /// The filtered view for the current search term.
    #[must_use]
    pub fn filtered(&self) -> &[Note] {
        &self.filtered
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, content: impl Into<String>) {
        self.draft = content.into();
    }

    /// Fetch the full collection and replace the canonical list.
    ///
    /// The server appends oldest-first, so the order is reversed on every
    /// load to show the most recently created note first. On transport
    /// failure the list is left untouched and the error propagates.
    pub async fn load_all(&mut self) -> Result<()> {
        let ticket = self.begin_load();
        let notes = self.gateway.list().await?;
        self.apply_load(ticket, notes);
        Ok(())
    }

    /// Issue a sequence token for a load about to be dispatched.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued_loads += 1;
        LoadTicket(self.issued_loads)
    }

    /// Apply a completed load, unless a newer one already landed.
    ///
    /// Returns `false` when the completion was discarded as stale.
    pub fn apply_load(&mut self, ticket: LoadTicket, mut notes: Vec<Note>) -> bool {
        if ticket.0 <= self.applied_load {
            tracing::debug!(ticket = ticket.0, applied = self.applied_load, "discarding stale load");
            return false;
        }
        self.applied_load = ticket.0;

        notes.reverse();
        tracing::info!(count = notes.len(), "reloaded note list");
        self.canonical = notes;
        self.refilter();
        true
    }

    /// Create a note and resynchronize with the server.
    ///
    /// Whitespace-only content is rejected locally: an error message is set
    /// and no request is issued. On success the collection is reloaded (the
    /// new note appears at index 0), the draft buffer is cleared, and a
    /// success message replaces any prior error.
    pub async fn create(&mut self, title: &str, content: &str) -> Result<Note> {
        if content.trim().is_empty() {
            self.set_error(MSG_EMPTY_CONTENT);
            return Err(Error::Validation(MSG_EMPTY_CONTENT.to_string()));
        }

        let draft = Note::draft(title, content);
        let created = self.gateway.create(&draft).await?;

        self.load_all().await?;
        self.draft.clear();
        self.set_success(MSG_CREATED);
        Ok(created)
    }

    /// Create a note from the draft buffer, using it as both title and body.
    pub async fn create_from_draft(&mut self) -> Result<Note> {
        let draft = self.draft.clone();
        self.create(&draft, &draft).await
    }

    /// Delete a note by id and resynchronize with the server.
    ///
    /// The delete is issued even when the id is not in the canonical list;
    /// the reload is then a no-op on the list but success is still reported.
    pub async fn delete(&mut self, id: i64) -> Result<()> {
        self.gateway.delete(id).await?;
        self.load_all().await?;
        self.set_success(MSG_DELETED);
        Ok(())
    }

    /// Store the search term and recompute the filtered view.
    ///
    /// An empty term makes the filtered view equal the canonical list;
    /// otherwise titles are matched by case-insensitive substring.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refilter();
    }

    fn refilter(&mut self) {
        let term = self.search_term.trim().to_lowercase();
        if term.is_empty() {
            self.filtered = self.canonical.clone();
        } else {
            self.filtered = self
                .canonical
                .iter()
                .filter(|note| note.title.to_lowercase().contains(&term))
                .cloned()
                .collect();
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        match &self.status {
            Some(StatusMessage::Success { text, .. }) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            Some(StatusMessage::Error { text }) => Some(text),
            _ => None,
        }
    }

    /// Set a success message, replacing whatever was shown before.
    ///
    /// Returns the message version for scheduling its clear; a clear with an
    /// older version is ignored, so rapid repeated actions cannot race each
    /// other's timers.
    pub fn set_success(&mut self, text: impl Into<String>) -> u64 {
        self.message_version += 1;
        self.status = Some(StatusMessage::Success {
            text: text.into(),
            version: self.message_version,
        });
        self.message_version
    }

    /// Set an error message. It persists until the next successful action.
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.message_version += 1;
        self.status = Some(StatusMessage::Error { text: text.into() });
    }

    /// Clear the success message if `version` still identifies it.
    ///
    /// Returns `false` when the message was already replaced or cleared.
    pub fn clear_success_if(&mut self, version: u64) -> bool {
        match &self.status {
            Some(StatusMessage::Success { version: current, .. }) if *current == version => {
                self.status = None;
                true
            }
            _ => false,
        }
    }
}

/// Spawn a task that clears the given success message once
/// [`SUCCESS_MESSAGE_TTL`] elapses, unless a newer message replaced it.
pub fn spawn_success_clear<G>(
    controller: Arc<Mutex<ListController<G>>>,
    version: u64,
) -> JoinHandle<()>
where
    G: NoteGateway + Send + 'static,
{
    spawn_success_clear_after(controller, version, SUCCESS_MESSAGE_TTL)
}

/// [`spawn_success_clear`] with an explicit delay.
pub fn spawn_success_clear_after<G>(
    controller: Arc<Mutex<ListController<G>>>,
    version: u64,
    delay: Duration,
) -> JoinHandle<()>
where
    G: NoteGateway + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        controller.lock().await.clear_success_if(version);
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    use pretty_assertions::assert_eq;

    use super::*;

    /// In-memory stand-in for the remote store, oldest-first like the API.
    #[derive(Default)]
    struct MemoryGateway {
        notes: StdMutex<Vec<Note>>,
        next_id: AtomicI64,
        create_calls: AtomicUsize,
        delete_calls: AtomicUsize,
    }

    impl MemoryGateway {
        fn seeded(titles: &[&str]) -> Self {
            let gateway = Self::default();
            for title in titles {
                let mut notes = gateway.notes.lock().unwrap();
                let id = gateway.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                notes.push(Note {
                    id,
                    title: (*title).to_string(),
                    content: format!("body of {title}"),
                });
            }
            gateway
        }
    }

    impl NoteGateway for &MemoryGateway {
        async fn list(&self) -> Result<Vec<Note>> {
            Ok(self.notes.lock().unwrap().clone())
        }

        async fn create(&self, draft: &Note) -> Result<Note> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let created = Note {
                id,
                title: draft.title.clone(),
                content: draft.content.clone(),
            };
            self.notes.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn delete(&self, id: i64) -> Result<()> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.notes.lock().unwrap().retain(|note| note.id != id);
            Ok(())
        }
    }

    /// Gateway whose every call fails with a transport-level error.
    struct BrokenGateway;

    impl NoteGateway for BrokenGateway {
        async fn list(&self) -> Result<Vec<Note>> {
            Err(Error::Api("HTTP 500".to_string()))
        }

        async fn create(&self, _draft: &Note) -> Result<Note> {
            Err(Error::Api("HTTP 500".to_string()))
        }

        async fn delete(&self, _id: i64) -> Result<()> {
            Err(Error::Api("HTTP 500".to_string()))
        }
    }

    #[tokio::test]
    async fn load_all_reverses_server_order() {
        let gateway = MemoryGateway::seeded(&["first", "second"]);
        let mut controller = ListController::new(&gateway);

        controller.load_all().await.unwrap();

        let ids: Vec<i64> = controller.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn empty_search_term_yields_canonical_list() {
        let gateway = MemoryGateway::seeded(&["a", "b", "c"]);
        let mut controller = ListController::new(&gateway);
        controller.load_all().await.unwrap();

        controller.set_search_term("");
        assert_eq!(controller.filtered(), controller.notes());
    }

    #[tokio::test]
    async fn search_matches_titles_case_insensitively() {
        let gateway = MemoryGateway::seeded(&["Buy Milk", "Call mom", "milkshake recipe"]);
        let mut controller = ListController::new(&gateway);
        controller.load_all().await.unwrap();

        controller.set_search_term("MILK");

        let titles: Vec<&str> = controller
            .filtered()
            .iter()
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(titles, vec!["milkshake recipe", "Buy Milk"]);
    }

    #[tokio::test]
    async fn create_with_blank_content_is_rejected_locally() {
        let gateway = MemoryGateway::default();
        let mut controller = ListController::new(&gateway);

        let result = controller.create("title", "   \n").await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(gateway.create_calls.load(Ordering::SeqCst), 0);
        assert_eq!(controller.error_message(), Some(MSG_EMPTY_CONTENT));
        assert_eq!(controller.success_message(), None);
    }

    #[tokio::test]
    async fn create_reloads_and_puts_new_note_first() {
        let gateway = MemoryGateway::seeded(&["old note"]);
        let mut controller = ListController::new(&gateway);
        controller.load_all().await.unwrap();

        controller.set_draft("Buy milk");
        let created = controller.create_from_draft().await.unwrap();

        assert!(created.is_saved());
        assert_eq!(controller.notes()[0].title, "Buy milk");
        assert_eq!(controller.draft(), "");
        assert_eq!(controller.success_message(), Some(MSG_CREATED));
    }

    #[tokio::test]
    async fn create_clears_prior_error_message() {
        let gateway = MemoryGateway::default();
        let mut controller = ListController::new(&gateway);

        let _ = controller.create("t", "").await;
        assert!(controller.error_message().is_some());

        controller.create("t", "real content").await.unwrap();
        assert_eq!(controller.error_message(), None);
        assert_eq!(controller.success_message(), Some(MSG_CREATED));
    }

    #[tokio::test]
    async fn delete_reloads_and_refilters() {
        let gateway = MemoryGateway::seeded(&["keep milk", "drop milk", "other"]);
        let mut controller = ListController::new(&gateway);
        controller.load_all().await.unwrap();
        controller.set_search_term("milk");
        assert_eq!(controller.filtered().len(), 2);

        controller.delete(2).await.unwrap();

        assert_eq!(controller.notes().len(), 2);
        let titles: Vec<&str> = controller
            .filtered()
            .iter()
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(titles, vec!["keep milk"]);
        assert_eq!(controller.success_message(), Some(MSG_DELETED));
    }

    #[tokio::test]
    async fn delete_of_unknown_id_still_calls_gateway_and_reports_success() {
        let gateway = MemoryGateway::seeded(&["only"]);
        let mut controller = ListController::new(&gateway);
        controller.load_all().await.unwrap();

        controller.delete(99).await.unwrap();

        assert_eq!(gateway.delete_calls.load(Ordering::SeqCst), 1);
        assert_eq!(controller.notes().len(), 1);
        assert_eq!(controller.success_message(), Some(MSG_DELETED));
    }

    #[tokio::test]
    async fn stale_load_completion_is_discarded() {
        let gateway = MemoryGateway::default();
        let mut controller = ListController::new(&gateway);

        let older = controller.begin_load();
        let newer = controller.begin_load();

        assert!(controller.apply_load(newer, vec![Note::draft("new", "new")]));
        assert!(!controller.apply_load(older, vec![Note::draft("old", "old")]));
        assert_eq!(controller.notes()[0].title, "new");
    }

    #[tokio::test]
    async fn transport_failure_leaves_state_untouched() {
        let gateway = MemoryGateway::seeded(&["survivor"]);
        let mut controller = ListController::new(&gateway);
        controller.load_all().await.unwrap();

        let mut broken = ListController::new(BrokenGateway);
        assert!(broken.load_all().await.is_err());
        assert!(broken.notes().is_empty());
        assert!(broken.status().is_none());

        // A loaded controller keeps its last consistent state on failure too.
        assert_eq!(controller.notes().len(), 1);
    }

    #[test]
    fn stale_clear_does_not_wipe_newer_message() {
        let gateway = MemoryGateway::default();
        let mut controller = ListController::new(&gateway);

        let stale = controller.set_success("first");
        let current = controller.set_success("second");

        assert!(!controller.clear_success_if(stale));
        assert_eq!(controller.success_message(), Some("second"));

        assert!(controller.clear_success_if(current));
        assert_eq!(controller.success_message(), None);
    }

    #[tokio::test]
    async fn scheduled_clear_fires_after_delay() {
        let controller = Arc::new(Mutex::new(ListController::new(BrokenGateway)));

        let version = controller.lock().await.set_success("saved");
        let handle = spawn_success_clear_after(
            Arc::clone(&controller),
            version,
            Duration::from_millis(20),
        );

        assert_eq!(controller.lock().await.success_message(), Some("saved"));
        handle.await.unwrap();
        assert_eq!(controller.lock().await.success_message(), None);
    }

    #[tokio::test]
    async fn scheduled_clear_is_cancelled_by_newer_message() {
        let controller = Arc::new(Mutex::new(ListController::new(BrokenGateway)));

        let stale = controller.lock().await.set_success("first");
        let handle = spawn_success_clear_after(
            Arc::clone(&controller),
            stale,
            Duration::from_millis(20),
        );

        controller.lock().await.set_success("second");
        handle.await.unwrap();
        assert_eq!(controller.lock().await.success_message(), Some("second"));
    }
}
