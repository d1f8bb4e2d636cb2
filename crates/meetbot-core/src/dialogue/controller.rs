//! Dialogue controller: one inbound event in, one reply out.
//!
//! Commands bypass the step machine and act on the draft store directly.
//! Plain text is fed to the user's draft, or answered with a help hint when
//! the user has none. Store failures never escape: they become replies.

use meetbot_types::config::DialogueConfig;
use meetbot_types::dialogue::{Command, Inbound};
use meetbot_types::error::{RepositoryError, StoreError};
use meetbot_types::meeting::{CommitOutcome, Draft, Step, UserId};
use tracing::{error, info};

use super::machine::{Transition, advance};
use super::replies;
use crate::draft_store::DraftStore;
use crate::meeting::service::MeetingService;
use crate::meeting::store::MeetingStore;

/// The outbound reply for one inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Set when this event committed a draft.
    pub commit: Option<CommitOutcome>,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            commit: None,
        }
    }
}

/// Drives the meeting form for every user.
///
/// Generic over the draft store and meeting store; the binary pins them to
/// the meetbot-infra implementations.
pub struct DialogueController<D: DraftStore, M: MeetingStore> {
    drafts: D,
    meetings: MeetingService<M>,
    tokens: DialogueConfig,
}

impl<D: DraftStore, M: MeetingStore> DialogueController<D, M> {
    pub fn new(drafts: D, meetings: MeetingService<M>, tokens: DialogueConfig) -> Self {
        Self {
            drafts,
            meetings,
            tokens,
        }
    }

    /// Access the draft store.
    pub fn drafts(&self) -> &D {
        &self.drafts
    }

    /// Access the meeting service.
    pub fn meetings(&self) -> &MeetingService<M> {
        &self.meetings
    }

    /// Handle one inbound event from `user`.
    pub async fn handle(&self, user: UserId, inbound: Inbound) -> Reply {
        let result = match inbound {
            Inbound::Command(command) => {
                info!(user_id = %user, command = %command, "Command received");
                self.handle_command(user, command).await
            }
            Inbound::Text(text) => {
                info!(user_id = %user, text = %text, "Message received");
                self.handle_text(user, &text).await
            }
        };

        result.unwrap_or_else(|e| {
            error!(user_id = %user, error = %e, "Draft store failure");
            Reply::text(replies::INTERNAL_ERROR)
        })
    }

    async fn handle_command(
        &self,
        user: UserId,
        command: Command,
    ) -> Result<Reply, RepositoryError> {
        match command {
            Command::Start => Ok(Reply::text(replies::START)),
            Command::Help => Ok(Reply::text(replies::HELP)),
            Command::Create => {
                self.drafts.set(user, Draft::new()).await?;
                info!(user_id = %user, "Meeting creation started");
                Ok(Reply::text(replies::TITLE_PROMPT))
            }
            Command::Cancel => match self.drafts.remove(user).await? {
                Some(_) => {
                    info!(user_id = %user, "Meeting creation cancelled");
                    Ok(Reply::text(replies::CANCELLED))
                }
                None => Ok(Reply::text(replies::NOTHING_TO_CANCEL)),
            },
            Command::List => Ok(Reply::text(self.list_reply().await)),
        }
    }

    async fn list_reply(&self) -> String {
        match self.meetings.list().await {
            Ok(meetings) if meetings.is_empty() => replies::LIST_EMPTY.to_string(),
            Ok(meetings) => replies::meeting_list(&meetings),
            Err(StoreError::Unavailable) => replies::LIST_UNAVAILABLE.to_string(),
            Err(_) => replies::LIST_FAILED.to_string(),
        }
    }

    async fn handle_text(&self, user: UserId, text: &str) -> Result<Reply, RepositoryError> {
        let Some(draft) = self.drafts.get(user).await? else {
            return Ok(Reply::text(replies::NO_DRAFT_HINT));
        };

        let step = draft.step;
        match advance(draft, text, &self.tokens) {
            Transition::Advanced(draft) => {
                info!(user_id = %user, step = %step, next = %draft.step, "Draft advanced");
                let prompt = self.prompt_for(&draft);
                self.drafts.set(user, draft).await?;
                Ok(Reply::text(prompt))
            }
            Transition::Confirmed(draft) => {
                self.drafts.remove(user).await?;
                let outcome = self.meetings.commit(&draft).await;
                Ok(Reply {
                    text: replies::created(&draft, &outcome),
                    commit: Some(outcome),
                })
            }
            Transition::Declined => {
                self.drafts.remove(user).await?;
                info!(user_id = %user, "Meeting declined at confirmation");
                Ok(Reply::text(replies::DECLINED))
            }
        }
    }

    /// The question to ask for the draft's current step.
    fn prompt_for(&self, draft: &Draft) -> String {
        match draft.step {
            Step::Title => replies::TITLE_PROMPT.to_string(),
            Step::Description => replies::description_prompt(&self.tokens),
            Step::DateTime => replies::DATETIME_PROMPT.to_string(),
            Step::Confirm => replies::review(draft, &self.tokens),
        }
    }
}
