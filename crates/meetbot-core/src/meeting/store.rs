//! Meeting store trait.
//!
//! The external table of meeting records. Implementations live in
//! meetbot-infra (Google Sheets).

use std::future::Future;

use meetbot_types::error::StoreError;
use meetbot_types::meeting::{CellValue, StoredMeeting};

/// Append-only access to the meeting table.
pub trait MeetingStore: Send + Sync {
    /// All data rows in store order (the header row excluded).
    fn list_all_rows(
        &self,
    ) -> impl Future<Output = Result<Vec<StoredMeeting>, StoreError>> + Send;

    /// Append one row after the last data row.
    fn append_row(
        &self,
        row: &[CellValue],
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
