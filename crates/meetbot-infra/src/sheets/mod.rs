//! Google Sheets meeting store.
//!
//! - `auth`: service-account JWT assertion flow with token caching
//! - `client`: [`SheetsMeetingStore`], the `MeetingStore` implementation
//! - `types`: Sheets API v4 wire types

pub mod auth;
pub mod client;
pub mod types;

pub use auth::{ServiceAccountAuth, ServiceAccountKey};
pub use client::{SheetsMeetingStore, build_http_client};
