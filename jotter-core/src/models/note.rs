use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::NoteId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw create payload. Fields are optional so that a missing field reaches
/// the validator as a field-level error instead of a deserialize failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Raw update payload; both fields optional, present fields must be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNoteInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Validated partial update. `None` leaves the stored value unchanged; a
/// `Some` value is guaranteed non-empty by the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}
