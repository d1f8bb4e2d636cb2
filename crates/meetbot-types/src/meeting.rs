//! Meeting domain types: the in-progress draft, the committed record and the
//! rows read back from the meeting store.

use serde::{Deserialize, Serialize};

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Numeric identifier of the chat a conversation happens in.
///
/// In private chats this equals the user's id, so one draft per chat is
/// one draft per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Position of a draft within the four-stage meeting form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Title,
    Description,
    DateTime,
    Confirm,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Title => write!(f, "title"),
            Step::Description => write!(f, "description"),
            Step::DateTime => write!(f, "datetime"),
            Step::Confirm => write!(f, "confirm"),
        }
    }
}

/// A user's in-progress, uncommitted meeting form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub step: Step,
    pub title: Option<String>,
    /// `Some("")` when the user explicitly skipped the description.
    pub description: Option<String>,
    /// Free-form date/time text, stored exactly as typed.
    pub datetime: Option<String>,
}

impl Draft {
    /// A fresh draft waiting for its title.
    pub fn new() -> Self {
        Self {
            step: Step::Title,
            title: None,
            description: None,
            datetime: None,
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

/// Meeting lifecycle status as written to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Active,
    Cancelled,
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeetingStatus::Active => write!(f, "active"),
            MeetingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for MeetingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(MeetingStatus::Active),
            "cancelled" => Ok(MeetingStatus::Cancelled),
            other => Err(format!("invalid meeting status: '{other}'")),
        }
    }
}

/// Header row of the meetings worksheet, in column order.
pub const MEETING_COLUMNS: [&str; 7] = [
    "meeting_id",
    "title",
    "description",
    "datetime",
    "chat_ids",
    "reminders",
    "status",
];

/// A single scalar cell written to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(u64),
    Text(String),
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<u64> for CellValue {
    fn from(n: u64) -> Self {
        CellValue::Number(n)
    }
}

/// A committed meeting, as appended to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub meeting_id: u64,
    pub title: String,
    pub description: String,
    pub datetime: String,
    /// Reserved, always empty at creation.
    pub chat_ids: String,
    /// Reserved, always empty at creation.
    pub reminders: String,
    pub status: MeetingStatus,
}

impl MeetingRecord {
    /// Build an active record from a completed draft.
    ///
    /// Fields the draft never collected become empty strings.
    pub fn from_draft(meeting_id: u64, draft: &Draft) -> Self {
        Self {
            meeting_id,
            title: draft.title.clone().unwrap_or_default(),
            description: draft.description.clone().unwrap_or_default(),
            datetime: draft.datetime.clone().unwrap_or_default(),
            chat_ids: String::new(),
            reminders: String::new(),
            status: MeetingStatus::Active,
        }
    }

    /// The seven cells of this record in [`MEETING_COLUMNS`] order.
    pub fn to_row(&self) -> Vec<CellValue> {
        vec![
            CellValue::Number(self.meeting_id),
            self.title.as_str().into(),
            self.description.as_str().into(),
            self.datetime.as_str().into(),
            self.chat_ids.as_str().into(),
            self.reminders.as_str().into(),
            self.status.to_string().into(),
        ]
    }
}

/// A meeting row read back from the store.
///
/// The sheet is editable by hand, so every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMeeting {
    pub meeting_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub datetime: Option<String>,
    pub status: Option<String>,
}

impl StoredMeeting {
    /// Build a row from header → cell pairs. Unknown headers are ignored.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned();
        Self {
            meeting_id: get("meeting_id"),
            title: get("title"),
            description: get("description"),
            datetime: get("datetime"),
            status: get("status"),
        }
    }

    /// Parsed status, `None` when the cell is empty or unrecognised.
    pub fn status(&self) -> Option<MeetingStatus> {
        self.status.as_deref().and_then(|s| s.trim().parse().ok())
    }

    pub fn is_active(&self) -> bool {
        self.status() == Some(MeetingStatus::Active)
    }
}

/// Why a committed draft did not reach the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistFailure {
    /// The store never connected at startup.
    StoreUnavailable,
    /// A read or append failed at commit time.
    StoreFailed(String),
}

/// Result of committing a draft.
///
/// Commits never fail from the user's point of view; this records whether
/// the meeting actually reached the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Persisted { meeting_id: u64 },
    NotPersisted { reason: PersistFailure },
}

impl CommitOutcome {
    pub fn is_persisted(&self) -> bool {
        matches!(self, CommitOutcome::Persisted { .. })
    }
}
