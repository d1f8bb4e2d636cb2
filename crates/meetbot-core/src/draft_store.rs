//! Conversation state store trait.
//!
//! Holds at most one in-progress [`Draft`] per user. Values are replaced or
//! removed, never merged. The in-memory implementation lives in
//! meetbot-infra; the dialogue controller receives the store by injection.

use std::future::Future;

use meetbot_types::error::RepositoryError;
use meetbot_types::meeting::{Draft, UserId};

/// Per-user draft storage.
///
/// Uses RPITIT (return position `impl Trait` in traits) consistent with
/// all async traits in this project.
pub trait DraftStore: Send + Sync {
    /// Load the user's current draft, if they are mid-flow.
    fn get(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<Option<Draft>, RepositoryError>> + Send;

    /// Store a draft for the user, replacing any existing one.
    fn set(
        &self,
        user: UserId,
        draft: Draft,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Remove the user's draft and return it.
    ///
    /// No-op (returns `None`) if the user has no draft.
    fn remove(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<Option<Draft>, RepositoryError>> + Send;
}
