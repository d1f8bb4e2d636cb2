//! The meeting form conversation.
//!
//! `machine` holds the pure step transitions, `controller` applies them to
//! the injected stores, and `replies` renders every user-facing text.

pub mod controller;
pub mod machine;
pub mod replies;

pub use controller::{DialogueController, Reply};
