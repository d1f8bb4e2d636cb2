//! Meeting service: committing drafts and listing stored meetings.
//!
//! Persistence is best-effort. A commit always completes from the user's
//! point of view; [`CommitOutcome`] records whether the meeting actually
//! reached the store.

use meetbot_types::error::StoreError;
use meetbot_types::meeting::{
    CommitOutcome, Draft, MeetingRecord, PersistFailure, StoredMeeting,
};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use super::store::MeetingStore;

/// Commits and lists meetings over an optional [`MeetingStore`].
///
/// `store` is `None` when the store could not be reached at startup
/// (degraded mode). Generic over the store to keep meetbot-core free of
/// infrastructure dependencies.
pub struct MeetingService<M: MeetingStore> {
    store: Option<M>,
    /// Serializes read-count-then-append so concurrent commits in this
    /// process never compute the same id.
    commit_lock: Mutex<()>,
}

impl<M: MeetingStore> MeetingService<M> {
    pub fn new(store: Option<M>) -> Self {
        Self {
            store,
            commit_lock: Mutex::new(()),
        }
    }

    /// Whether the store connected at startup.
    pub fn is_available(&self) -> bool {
        self.store.is_some()
    }

    /// Access the underlying store.
    pub fn store(&self) -> Option<&M> {
        self.store.as_ref()
    }

    /// Persist a completed draft as a new meeting row.
    ///
    /// The id is the number of existing rows plus one. Never retries.
    pub async fn commit(&self, draft: &Draft) -> CommitOutcome {
        let Some(store) = &self.store else {
            info!(
                title = draft.title.as_deref().unwrap_or_default(),
                description = draft.description.as_deref().unwrap_or_default(),
                datetime = draft.datetime.as_deref().unwrap_or_default(),
                "Meeting created without saving (store unavailable)"
            );
            return CommitOutcome::NotPersisted {
                reason: PersistFailure::StoreUnavailable,
            };
        };

        let _guard = self.commit_lock.lock().await;

        match Self::append(store, draft).await {
            Ok(meeting_id) => {
                info!(
                    meeting_id,
                    title = draft.title.as_deref().unwrap_or_default(),
                    "Meeting saved"
                );
                CommitOutcome::Persisted { meeting_id }
            }
            Err(e) => {
                error!(error = %e, "Failed to save meeting");
                CommitOutcome::NotPersisted {
                    reason: PersistFailure::StoreFailed(e.to_string()),
                }
            }
        }
    }

    async fn append(store: &M, draft: &Draft) -> Result<u64, StoreError> {
        let existing = store.list_all_rows().await?;
        let meeting_id = existing.len() as u64 + 1;
        let record = MeetingRecord::from_draft(meeting_id, draft);
        store.append_row(&record.to_row()).await?;
        Ok(meeting_id)
    }

    /// All stored meetings in store order.
    ///
    /// Returns [`StoreError::Unavailable`] in degraded mode.
    pub async fn list(&self) -> Result<Vec<StoredMeeting>, StoreError> {
        let Some(store) = &self.store else {
            warn!("Meeting list requested but the store is unavailable");
            return Err(StoreError::Unavailable);
        };

        let rows = store.list_all_rows().await.map_err(|e| {
            error!(error = %e, "Failed to list meetings");
            e
        })?;
        info!(rows = rows.len(), "Listed meetings");
        Ok(rows)
    }
}
