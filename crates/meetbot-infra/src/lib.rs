//! Infrastructure layer for meetbot.
//!
//! Contains implementations of the store traits defined in `meetbot-core`:
//! the in-memory draft store and the Google Sheets meeting store, plus
//! configuration and secret loading.

pub mod config;
pub mod memory;
pub mod secret;
pub mod sheets;
