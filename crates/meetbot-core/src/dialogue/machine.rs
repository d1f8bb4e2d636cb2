//! The meeting form step machine.
//!
//! A pure function from (draft, text) to the next transition. No input is
//! ever rejected: every text advances the draft by exactly one step.

use meetbot_types::config::DialogueConfig;
use meetbot_types::meeting::{Draft, Step};

/// Result of feeding one text message to a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The draft moved to its next step and should be stored.
    Advanced(Draft),
    /// The user confirmed the review; the draft should be committed.
    Confirmed(Draft),
    /// The user declined the review; the draft should be discarded.
    Declined,
}

/// Case-insensitive comparison against a localized answer token.
///
/// The text is not trimmed, so `" да"` does not match `"да"`.
pub fn matches_token(text: &str, token: &str) -> bool {
    text.to_lowercase() == token.to_lowercase()
}

/// Advance a draft by one step with the user's text.
pub fn advance(mut draft: Draft, text: &str, tokens: &DialogueConfig) -> Transition {
    match draft.step {
        Step::Title => {
            draft.title = Some(text.to_string());
            draft.step = Step::Description;
            Transition::Advanced(draft)
        }
        Step::Description => {
            draft.description = if matches_token(text, &tokens.no_token) {
                Some(String::new())
            } else {
                Some(text.to_string())
            };
            draft.step = Step::DateTime;
            Transition::Advanced(draft)
        }
        Step::DateTime => {
            draft.datetime = Some(text.to_string());
            draft.step = Step::Confirm;
            Transition::Advanced(draft)
        }
        Step::Confirm => {
            if matches_token(text, &tokens.yes_token) {
                Transition::Confirmed(draft)
            } else {
                Transition::Declined
            }
        }
    }
}
