//! Folder session state machine.
//!
//! Tracks the load lifecycle of the folder addressed by the current route.
//! The machine holds no signals and does no I/O: callers begin a cycle,
//! perform the fetch, and settle the cycle with its outcome. Every cycle
//! carries a [`LoadTicket`]; a settle whose ticket was superseded by a later
//! `begin` is ignored, which keeps responses that arrive out of order from
//! overwriting newer state.

use crate::core::error::ApiError;
use crate::models::{Listing, ListingPayload};

/// Lifecycle state of the displayed folder's listing.
///
/// Exactly one of these holds at any time; there is no partially loaded
/// state and no stale listing kept behind an error.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionStatus {
    /// A load cycle is in flight; nothing to render yet.
    Loading,
    /// The listing arrived and is current.
    Loaded(Listing),
    /// The load failed; terminal until the folder changes or the caller
    /// explicitly begins a new cycle. There are no automatic retries.
    Failed(ApiError),
}

/// Correlation token for one load cycle.
///
/// Returned by [`FolderSession::begin`] and consumed by
/// [`FolderSession::settle`]. Tickets are deliberately not `Clone`: one
/// cycle, one ticket, one settle.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
}

/// State machine for the folder addressed by the current route.
#[derive(Clone, Debug, PartialEq)]
pub struct FolderSession {
    /// Folder identifier the session is bound to (`None` = root).
    folder: Option<String>,
    /// Monotonic request counter; bumped by every `begin`.
    epoch: u64,
    /// Current lifecycle state.
    status: SessionStatus,
}

impl FolderSession {
    /// Creates a session bound to the root folder, awaiting its first load.
    pub fn new() -> Self {
        Self {
            folder: None,
            epoch: 0,
            status: SessionStatus::Loading,
        }
    }

    /// Begins a load cycle for `folder`.
    ///
    /// Re-entry always discards the previous listing or error and moves back
    /// to `Loading`. The returned ticket is the only one `settle` will
    /// accept until the next `begin`.
    pub fn begin(&mut self, folder: Option<String>) -> LoadTicket {
        self.folder = folder;
        self.epoch += 1;
        self.status = SessionStatus::Loading;
        LoadTicket { epoch: self.epoch }
    }

    /// Whether `ticket` still names the in-flight cycle.
    ///
    /// False once a later `begin` superseded the ticket or the cycle was
    /// already settled. Callers check this before writing shared state so a
    /// stale response produces no write at all.
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.epoch == self.epoch && matches!(self.status, SessionStatus::Loading)
    }

    /// Applies the outcome of the cycle `ticket` belongs to.
    ///
    /// Returns `false` without touching any state when the ticket is no
    /// longer current. A success stores the partitioned listing; a failure
    /// stores the error and nothing else.
    pub fn settle(
        &mut self,
        ticket: &LoadTicket,
        result: Result<ListingPayload, ApiError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.status = match result {
            Ok(payload) => SessionStatus::Loaded(Listing::partition(payload)),
            Err(error) => SessionStatus::Failed(error),
        };
        true
    }

    /// Folder identifier this session is bound to (`None` = root).
    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    /// Current lifecycle state.
    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// The current listing, if the last load succeeded.
    pub fn listing(&self) -> Option<&Listing> {
        match &self.status {
            SessionStatus::Loaded(listing) => Some(listing),
            _ => None,
        }
    }

    /// The load error, if the last load failed.
    #[allow(dead_code)]
    pub fn error(&self) -> Option<&ApiError> {
        match &self.status {
            SessionStatus::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl Default for FolderSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FolderEntry, PathSegment};

    fn entry(id: &str, name: &str, folder: bool) -> FolderEntry {
        FolderEntry {
            id: id.to_string(),
            name: name.to_string(),
            folder,
        }
    }

    fn segment(id: &str, name: &str) -> PathSegment {
        PathSegment {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn payload(entries: Vec<FolderEntry>, path: Vec<PathSegment>) -> ListingPayload {
        ListingPayload {
            files: entries,
            path,
        }
    }

    // =========================================================================
    // Initial State
    // =========================================================================

    #[test]
    fn starts_loading_at_root() {
        let session = FolderSession::new();
        assert_eq!(session.folder(), None);
        assert!(matches!(session.status(), SessionStatus::Loading));
        assert!(session.listing().is_none());
        assert!(session.error().is_none());
    }

    // =========================================================================
    // Load Transitions
    // =========================================================================

    #[test]
    fn successful_load_partitions_and_stores_the_listing() {
        let mut session = FolderSession::new();
        let ticket = session.begin(Some("42".to_string()));

        let applied = session.settle(
            &ticket,
            Ok(payload(
                vec![entry("7", "Docs", true), entry("8", "readme.txt", false)],
                vec![segment("42", "Projects")],
            )),
        );

        assert!(applied);
        assert_eq!(session.folder(), Some("42"));
        let listing = session.listing().unwrap();
        assert_eq!(listing.folders, vec![entry("7", "Docs", true)]);
        assert_eq!(listing.files, vec![entry("8", "readme.txt", false)]);
        assert_eq!(listing.path, vec![segment("42", "Projects")]);
    }

    #[test]
    fn failed_load_keeps_the_error_and_no_listing() {
        let mut session = FolderSession::new();
        let ticket = session.begin(None);

        let applied = session.settle(
            &ticket,
            Err(ApiError::NetworkError("connection refused".to_string())),
        );

        assert!(applied);
        assert!(matches!(session.status(), SessionStatus::Failed(_)));
        assert_eq!(
            session.error(),
            Some(&ApiError::NetworkError("connection refused".to_string()))
        );
        assert!(session.listing().is_none());
    }

    #[test]
    fn malformed_payload_fails_the_same_way_as_a_network_error() {
        let mut session = FolderSession::new();
        let ticket = session.begin(Some("42".to_string()));

        session.settle(
            &ticket,
            Err(ApiError::JsonParseError("missing field `path`".to_string())),
        );

        assert!(matches!(session.status(), SessionStatus::Failed(_)));
    }

    // =========================================================================
    // Staleness and Idempotence
    // =========================================================================

    #[test]
    fn late_response_for_a_superseded_cycle_is_ignored() {
        let mut session = FolderSession::new();
        let ticket_a = session.begin(Some("a".to_string()));
        let ticket_b = session.begin(Some("b".to_string()));

        // B's response lands first and wins.
        assert!(session.settle(&ticket_b, Ok(payload(vec![entry("1", "b-child", true)], vec![]))));
        // A's response arrives afterwards and must not overwrite B.
        assert!(!session.settle(&ticket_a, Ok(payload(vec![entry("2", "a-child", true)], vec![]))));

        assert_eq!(session.folder(), Some("b"));
        assert_eq!(session.listing().unwrap().folders, vec![entry("1", "b-child", true)]);
    }

    #[test]
    fn stale_response_before_the_current_one_leaves_loading_intact() {
        let mut session = FolderSession::new();
        let ticket_a = session.begin(Some("a".to_string()));
        let ticket_b = session.begin(Some("b".to_string()));

        assert!(!session.is_current(&ticket_a));
        assert!(!session.settle(&ticket_a, Ok(payload(vec![], vec![]))));
        assert!(matches!(session.status(), SessionStatus::Loading));

        assert!(session.is_current(&ticket_b));
        assert!(session.settle(&ticket_b, Ok(payload(vec![], vec![]))));
        assert!(session.listing().is_some());
    }

    #[test]
    fn repeated_loads_of_the_same_folder_apply_only_the_last() {
        let mut session = FolderSession::new();
        let first = session.begin(Some("x".to_string()));
        let second = session.begin(Some("x".to_string()));

        assert!(!session.settle(&first, Ok(payload(vec![entry("1", "old", false)], vec![]))));
        assert!(session.settle(&second, Ok(payload(vec![entry("1", "new", false)], vec![]))));

        // Same final state as a single load: one entry, from the last response.
        let listing = session.listing().unwrap();
        assert_eq!(listing.files, vec![entry("1", "new", false)]);
    }

    #[test]
    fn a_cycle_settles_at_most_once() {
        let mut session = FolderSession::new();
        let ticket = session.begin(Some("42".to_string()));

        assert!(session.settle(&ticket, Ok(payload(vec![entry("1", "kept", true)], vec![]))));
        assert!(!session.settle(&ticket, Err(ApiError::Timeout)));

        assert_eq!(session.listing().unwrap().folders, vec![entry("1", "kept", true)]);
    }

    // =========================================================================
    // Re-entry
    // =========================================================================

    #[test]
    fn reentry_discards_the_previous_listing() {
        let mut session = FolderSession::new();
        let ticket = session.begin(Some("a".to_string()));
        session.settle(&ticket, Ok(payload(vec![entry("1", "child", true)], vec![])));
        assert!(session.listing().is_some());

        session.begin(Some("b".to_string()));
        assert!(matches!(session.status(), SessionStatus::Loading));
        assert!(session.listing().is_none());
        assert_eq!(session.folder(), Some("b"));
    }

    #[test]
    fn failure_is_terminal_until_a_new_cycle_begins() {
        let mut session = FolderSession::new();
        let ticket = session.begin(Some("a".to_string()));
        session.settle(&ticket, Err(ApiError::HttpError(500)));

        // The settled cycle accepts nothing further.
        assert!(!session.settle(&ticket, Ok(payload(vec![], vec![]))));
        assert!(matches!(session.status(), SessionStatus::Failed(_)));

        // Navigating back to the same folder starts a fresh cycle.
        let retry = session.begin(Some("a".to_string()));
        assert!(matches!(session.status(), SessionStatus::Loading));
        assert!(session.settle(&retry, Ok(payload(vec![], vec![]))));
        assert!(session.listing().is_some());
    }

    #[test]
    fn navigation_to_a_created_folder_binds_the_session_to_it() {
        let mut session = FolderSession::new();
        let ticket = session.begin(None);
        session.settle(&ticket, Ok(payload(vec![], vec![])));

        // After a successful create the browser navigates to the new id,
        // which re-enters the machine exactly like any other navigation.
        let created: crate::models::CreatedFolder =
            serde_json::from_str(r#"{"id": "99"}"#).unwrap();
        let ticket = session.begin(Some(created.id));

        assert_eq!(session.folder(), Some("99"));
        assert!(session.settle(&ticket, Ok(payload(vec![], vec![segment("99", "New")]))));
        assert_eq!(session.listing().unwrap().path, vec![segment("99", "New")]);
    }
}
