//! The remote data store: a fetched collection plus its loading status, the
//! last error and any notifications waiting to be shown.
//!
//! A store lives inside a reactive signal, so it can't be borrowed across an
//! await. Each async operation is therefore split into a `begin_*` call made
//! before the request and a `finish_*` call made with its result:
//!
//! ```ignore
//! let ticket = store.write().begin_fetch();
//! let result = backend.loans().await;
//! store.write().finish_fetch(ticket, result);
//! ```

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use crate::error::ApiError;
use crate::records::Record;
use crate::slot::KeyValueSlot;

/// Where the store is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum StoreStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch or create is in flight.
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A message for the toaster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Proof that a fetch was started. Only the newest ticket's result is kept.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "pass the ticket to finish_fetch"]
pub struct FetchTicket(u64);

/// Proof that a create was started.
#[derive(Debug)]
#[must_use = "pass the ticket to finish_create"]
pub struct CreateTicket(());

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteStore<T> {
    items: Vec<T>,
    error: Option<String>,
    settled: StoreStatus,
    generation: u64,
    revision: u64,
    pending_fetch: Option<u64>,
    pending_creates: usize,
    notifications: Vec<Notification>,
}

impl<T> Default for RemoteStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
            settled: StoreStatus::Idle,
            generation: 0,
            revision: 0,
            pending_fetch: None,
            pending_creates: 0,
            notifications: Vec::new(),
        }
    }
}

impl<T: Record> RemoteStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The records, in fetch order followed by anything created since.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The message shown inline when the last operation failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Bumped every time the items are replaced or appended to.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_loading(&self) -> bool {
        self.pending_fetch.is_some() || self.pending_creates > 0
    }

    pub fn status(&self) -> StoreStatus {
        if self.is_loading() {
            StoreStatus::Loading
        } else {
            self.settled
        }
    }

    /// Marks a fetch as started and clears the previous error.
    ///
    /// Starting a second fetch while one is in flight supersedes it: the
    /// older response will be discarded when it arrives.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        if self.pending_fetch.is_some() {
            debug!("superseding in-flight fetch of {}", T::COLLECTION);
        }
        self.pending_fetch = Some(self.generation);
        self.error = None;
        info!("fetching {}", T::COLLECTION);
        FetchTicket(self.generation)
    }

    /// Applies a fetch result. Returns `false` if the ticket was superseded
    /// and the result ignored.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<T>, ApiError>) -> bool {
        if self.pending_fetch != Some(ticket.0) {
            debug!("discarding stale {} response (request {})", T::COLLECTION, ticket.0);
            return false;
        }
        self.pending_fetch = None;

        match result {
            Ok(items) => {
                info!("loaded {} {}", items.len(), T::COLLECTION);
                self.items = items;
                self.revision += 1;
                self.settled = StoreStatus::Loaded;
            }
            Err(e) => {
                warn!("fetching {} failed: {e}", T::COLLECTION);
                self.error = Some(e.to_string());
                self.settled = StoreStatus::Failed;
            }
        }
        true
    }

    pub fn begin_create(&mut self) -> CreateTicket {
        self.pending_creates += 1;
        CreateTicket(())
    }

    /// Applies a create result.
    ///
    /// On success the server's record is appended, written to the record's
    /// slot key (failures only logged) and a success notification queued. On
    /// failure the error is stored and an error notification queued.
    pub fn finish_create(
        &mut self,
        ticket: CreateTicket,
        result: Result<T, ApiError>,
        slot: &dyn KeyValueSlot,
    ) -> bool {
        let CreateTicket(()) = ticket;
        self.pending_creates = self.pending_creates.saturating_sub(1);

        match result {
            Ok(record) => {
                if let Some(key) = T::CREATED_SLOT_KEY {
                    persist(slot, key, &record);
                }
                self.items.push(record);
                self.revision += 1;
                self.error = None;
                self.settled = StoreStatus::Loaded;
                self.notify(NotificationKind::Success, T::CREATED_NOTICE);
                true
            }
            Err(e) => {
                warn!("creating in {} failed: {e}", T::COLLECTION);
                self.error = Some(e.to_string());
                self.settled = StoreStatus::Failed;
                self.notify(NotificationKind::Error, T::CREATE_FAILED_NOTICE);
                false
            }
        }
    }

    /// Hands queued notifications to the caller, leaving the queue empty.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.notifications.push(Notification {
            kind,
            message: message.to_string(),
        });
    }
}

fn persist<T: Record>(slot: &dyn KeyValueSlot, key: &str, record: &T) {
    let outcome = serde_json::to_string(record)
        .map_err(anyhow::Error::from)
        .and_then(|json| slot.set(key, &json));
    if let Err(e) = outcome {
        warn!("could not persist {key}: {e:#}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Loan;
    use crate::records::User;
    use crate::slot::MemorySlot;

    struct BrokenSlot;

    impl KeyValueSlot for BrokenSlot {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("quota exceeded")
        }
    }

    fn ada() -> User {
        User {
            id: "1".into(),
            name: "Ada".into(),
            account_balance: "1000".into(),
            ..Default::default()
        }
    }

    fn server_loan(id: &str) -> Loan {
        Loan {
            id: id.into(),
            name: "John Doe".into(),
            active_loan: "20000".into(),
            settled_loan: "0".into(),
            total_amount: "20000".into(),
            purpose: "Business".into(),
            tenure: "2025-06-01T00:00:00.000Z".into(),
            created_at: "2025-01-05T15:04:05.000Z".into(),
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let store = RemoteStore::<User>::new();
        assert!(store.status().is_idle());
        assert!(!store.is_loading());
        assert!(store.items().is_empty());
        assert_eq!(store.error(), None);
    }

    #[test]
    fn fetch_replaces_items_and_clears_loading() {
        let mut store = RemoteStore::<User>::new();
        let ticket = store.begin_fetch();
        assert!(store.is_loading());
        assert!(store.status().is_loading());

        assert!(store.finish_fetch(ticket, Ok(vec![ada()])));
        assert!(!store.is_loading());
        assert!(store.status().is_loaded());
        assert_eq!(store.items(), [ada()]);
    }

    #[test]
    fn fetching_twice_with_same_data_is_idempotent() {
        let mut store = RemoteStore::<User>::new();
        let ticket = store.begin_fetch();
        store.finish_fetch(ticket, Ok(vec![ada()]));
        let first = store.items().to_vec();

        let ticket = store.begin_fetch();
        store.finish_fetch(ticket, Ok(vec![ada()]));
        assert_eq!(store.items(), first.as_slice());
    }

    #[test]
    fn failed_fetch_keeps_items_and_sets_error() {
        let mut store = RemoteStore::<User>::new();
        let ticket = store.begin_fetch();
        store.finish_fetch(ticket, Ok(vec![ada()]));

        let ticket = store.begin_fetch();
        store.finish_fetch(ticket, Err(ApiError::Status(503)));
        assert!(store.status().is_failed());
        assert_eq!(store.error(), Some("Request failed with status code 503"));
        assert_eq!(store.items().len(), 1);

        let _retry = store.begin_fetch();
        assert_eq!(store.error(), None);
    }

    #[test]
    fn stale_fetch_response_is_discarded() {
        let mut store = RemoteStore::<User>::new();
        let old = store.begin_fetch();
        let new = store.begin_fetch();

        assert!(store.finish_fetch(new, Ok(vec![ada()])));
        assert!(!store.finish_fetch(old, Ok(Vec::new())));
        assert_eq!(store.items(), [ada()]);
        assert!(!store.is_loading());
    }

    #[test]
    fn loading_stays_true_until_the_newest_fetch_lands() {
        let mut store = RemoteStore::<User>::new();
        let old = store.begin_fetch();
        let new = store.begin_fetch();
        store.finish_fetch(old, Err(ApiError::Status(500)));
        assert!(store.is_loading());
        assert_eq!(store.error(), None);
        store.finish_fetch(new, Ok(Vec::new()));
        assert!(!store.is_loading());
    }

    #[test]
    fn successful_create_appends_persists_and_notifies_once() {
        let slot = MemorySlot::new();
        let mut store = RemoteStore::<Loan>::new();
        let ticket = store.begin_fetch();
        store.finish_fetch(ticket, Ok(vec![server_loan("1")]));

        let ticket = store.begin_create();
        assert!(store.is_loading());
        assert!(store.finish_create(ticket, Ok(server_loan("2")), &slot));

        assert!(!store.is_loading());
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.items()[1], server_loan("2"));

        let saved: Loan = serde_json::from_str(&slot.get("createdLoan").unwrap()).unwrap();
        assert_eq!(saved, server_loan("2"));

        let notes = store.drain_notifications();
        assert_eq!(
            notes,
            [Notification {
                kind: NotificationKind::Success,
                message: "Loan requested successfully!".into(),
            }]
        );
        assert!(store.drain_notifications().is_empty());
    }

    #[test]
    fn failed_create_sets_error_and_queues_error_notification() {
        let slot = MemorySlot::new();
        let mut store = RemoteStore::<Loan>::new();
        let ticket = store.begin_create();
        assert!(!store.finish_create(ticket, Err(ApiError::Status(400)), &slot));

        assert!(store.items().is_empty());
        assert!(store.status().is_failed());
        assert_eq!(store.error(), Some("Request failed with status code 400"));
        assert_eq!(slot.get("createdLoan"), None);

        let notes = store.drain_notifications();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].kind.is_error());
        assert_eq!(notes[0].message, "Failed to create the loan.");
    }

    #[test]
    fn persistence_failure_is_not_surfaced() {
        let mut store = RemoteStore::<Loan>::new();
        let ticket = store.begin_create();
        assert!(store.finish_create(ticket, Ok(server_loan("9")), &BrokenSlot));
        assert_eq!(store.error(), None);
        assert_eq!(store.items().len(), 1);
        assert!(store.drain_notifications()[0].kind.is_success());
    }

    #[test]
    fn revision_moves_only_when_items_change() {
        let slot = MemorySlot::new();
        let mut store = RemoteStore::<Loan>::new();
        assert_eq!(store.revision(), 0);

        let ticket = store.begin_fetch();
        assert_eq!(store.revision(), 0);
        store.finish_fetch(ticket, Ok(vec![server_loan("1")]));
        assert_eq!(store.revision(), 1);

        let ticket = store.begin_fetch();
        store.finish_fetch(ticket, Err(ApiError::Status(500)));
        let ticket = store.begin_create();
        store.finish_create(ticket, Err(ApiError::Status(400)), &slot);
        assert_eq!(store.revision(), 1);

        let ticket = store.begin_create();
        store.finish_create(ticket, Ok(server_loan("2")), &slot);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn create_is_independent_of_an_in_flight_fetch() {
        let slot = MemorySlot::new();
        let mut store = RemoteStore::<Loan>::new();
        let fetch = store.begin_fetch();
        let create = store.begin_create();

        store.finish_create(create, Ok(server_loan("2")), &slot);
        assert!(store.is_loading());

        store.finish_fetch(fetch, Ok(vec![server_loan("1"), server_loan("2")]));
        assert!(!store.is_loading());
        assert_eq!(store.items().len(), 2);
    }
}
