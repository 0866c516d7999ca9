//! Boundary validation for create/update payloads and path identifiers.
//!
//! Failures are ordered `{field, message}` lists, never errors in the
//! `Result`-chain sense; on success the validated payload flows through so
//! callers never handle unchecked input. Whitespace-only values count as
//! present; only the empty string is rejected.

use serde::{Deserialize, Serialize};

use crate::models::{CreateNoteInput, IdPolicy, NoteId, NotePatch, UpdateNoteInput};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Check a create payload: both fields required and non-empty.
pub fn validate_create(input: CreateNoteInput) -> Result<(String, String), Vec<FieldError>> {
    let mut errors = Vec::new();
    if !matches!(&input.title, Some(title) if !title.is_empty()) {
        errors.push(FieldError::new("title", "title is required"));
    }
    if !matches!(&input.content, Some(content) if !content.is_empty()) {
        errors.push(FieldError::new("content", "content is required"));
    }
    match (input.title, input.content) {
        (Some(title), Some(content)) if errors.is_empty() => Ok((title, content)),
        _ => Err(errors),
    }
}

/// Check an update payload: fields optional, but present fields must be
/// non-empty. An empty patch is valid and leaves both fields unchanged.
pub fn validate_update(input: UpdateNoteInput) -> Result<NotePatch, Vec<FieldError>> {
    let mut errors = Vec::new();
    if matches!(&input.title, Some(title) if title.is_empty()) {
        errors.push(FieldError::new("title", "title must not be empty"));
    }
    if matches!(&input.content, Some(content) if content.is_empty()) {
        errors.push(FieldError::new("content", "content must not be empty"));
    }
    if errors.is_empty() {
        Ok(NotePatch {
            title: input.title,
            content: input.content,
        })
    } else {
        Err(errors)
    }
}

/// Check a path identifier against the store's id scheme.
pub fn validate_id(policy: IdPolicy, raw: &str) -> Result<NoteId, Vec<FieldError>> {
    policy
        .parse_id(raw)
        .map_err(|err| vec![FieldError::new("id", err.to_string())])
}
