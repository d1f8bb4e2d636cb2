//! Dialogue logic and store trait definitions for meetbot.
//!
//! This crate defines the "ports" (store traits) that the infrastructure
//! layer implements, plus the meeting form state machine that drives them.
//! It depends only on `meetbot-types` -- never on `meetbot-infra` or any
//! network crate.

pub mod dialogue;
pub mod draft_store;
pub mod meeting;
