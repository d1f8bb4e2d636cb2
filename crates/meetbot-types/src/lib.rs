//! Shared domain types for meetbot.
//!
//! This crate contains the types used across the meetbot workspace:
//! meeting drafts and records, inbound dialogue events, configuration,
//! and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod dialogue;
pub mod error;
pub mod meeting;
