use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use jotter_core::validate::{validate_create, validate_id, validate_update};
use jotter_core::{CreateNoteInput, Note, NoteService, UpdateNoteInput};

use super::error::ApiError;

/// POST /notes
pub async fn create_note(
    State(service): State<NoteService>,
    body: Result<Json<CreateNoteInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let Json(input) = body?;
    let (title, content) = validate_create(input).map_err(ApiError::validation)?;
    let note = service.create_note(title, content);
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /notes
pub async fn list_notes(State(service): State<NoteService>) -> Json<Vec<Note>> {
    Json(service.list_notes())
}

/// GET /notes/{id}
pub async fn get_note(
    State(service): State<NoteService>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let id = validate_id(service.id_policy(), &id).map_err(ApiError::validation)?;
    let note = service.get_note(&id).ok_or(ApiError::NotFound)?;
    Ok(Json(note))
}

/// PUT /notes/{id}
///
/// The path id is checked before the body is touched, so a malformed id
/// reports as an id error even when the body is also bad.
pub async fn update_note(
    State(service): State<NoteService>,
    Path(id): Path<String>,
    body: Result<Json<UpdateNoteInput>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let id = validate_id(service.id_policy(), &id).map_err(ApiError::validation)?;
    let Json(input) = body?;
    let patch = validate_update(input).map_err(ApiError::validation)?;
    let note = service.update_note(&id, patch).ok_or(ApiError::NotFound)?;
    Ok(Json(note))
}

/// DELETE /notes/{id}
pub async fn delete_note(
    State(service): State<NoteService>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = validate_id(service.id_policy(), &id).map_err(ApiError::validation)?;
    if service.delete_note(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
