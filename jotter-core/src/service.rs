//! Note business logic.
//!
//! `NoteService` is the only component that touches the store. Expected
//! conditions (missing id, missing record) are ordinary return values,
//! never errors; the store's contract leaves nothing else to fail.

use std::sync::Arc;

use crate::models::{IdPolicy, Note, NoteId, NotePatch};
use crate::store::NoteStore;

/// Cloneable handle over a shared store; clones observe the same records.
#[derive(Debug, Clone)]
pub struct NoteService {
    store: Arc<NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<NoteStore>) -> Self {
        Self { store }
    }

    /// Convenience constructor owning a fresh store under the given policy.
    pub fn with_policy(policy: IdPolicy) -> Self {
        Self::new(Arc::new(NoteStore::new(policy)))
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.store.policy()
    }

    /// Create a note from already-validated fields.
    pub fn create_note(&self, title: String, content: String) -> Note {
        let note = self.store.insert(title, content);
        tracing::debug!(id = %note.id, "created note");
        note
    }

    pub fn list_notes(&self) -> Vec<Note> {
        self.store.all()
    }

    pub fn get_note(&self, id: &NoteId) -> Option<Note> {
        self.store.find(id)
    }

    /// Apply a validated partial update; `None` if no such note exists.
    pub fn update_note(&self, id: &NoteId, patch: NotePatch) -> Option<Note> {
        let note = self.store.update(id, patch);
        if note.is_some() {
            tracing::debug!(%id, "updated note");
        }
        note
    }

    /// Delete by id; false if no such note exists.
    pub fn delete_note(&self, id: &NoteId) -> bool {
        let deleted = self.store.remove(id);
        if deleted {
            tracing::debug!(%id, "deleted note");
        }
        deleted
    }
}
