//! In-process conversation state.
//!
//! `InMemoryDraftStore` keeps one [`Draft`] per user in a `DashMap` for the
//! lifetime of the process. Nothing is persisted; a restart forgets every
//! half-filled form.

use dashmap::DashMap;

use meetbot_core::draft_store::DraftStore;
use meetbot_types::error::RepositoryError;
use meetbot_types::meeting::{Draft, UserId};

/// Process-wide draft map.
///
/// Uses `DashMap` so updates from different chats do not contend on a
/// single lock.
#[derive(Default)]
pub struct InMemoryDraftStore {
    drafts: DashMap<UserId, Draft>,
}

impl InMemoryDraftStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for InMemoryDraftStore {
    async fn get(&self, user: UserId) -> Result<Option<Draft>, RepositoryError> {
        Ok(self.drafts.get(&user).map(|r| r.value().clone()))
    }

    async fn set(&self, user: UserId, draft: Draft) -> Result<(), RepositoryError> {
        tracing::debug!(user_id = %user, step = %draft.step, "draft stored");
        self.drafts.insert(user, draft);
        Ok(())
    }

    async fn remove(&self, user: UserId) -> Result<Option<Draft>, RepositoryError> {
        Ok(self.drafts.remove(&user).map(|(_, draft)| draft))
    }
}
