//! In-memory note storage.
//!
//! The store owns the record collection and the id sequence. Mutations
//! serialize behind one write lock; reads share a read lock and return
//! snapshot clones, never live views.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::models::{IdPolicy, Note, NoteId, NotePatch};

#[derive(Debug)]
pub struct NoteStore {
    policy: IdPolicy,
    inner: RwLock<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    notes: Vec<Note>,
    next_seq: u64,
}

impl NoteStore {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            policy,
            inner: RwLock::new(StoreInner {
                notes: Vec::new(),
                next_seq: 1,
            }),
        }
    }

    /// The id scheme this store allocates under.
    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Allocate a fresh id, stamp both timestamps with the same instant,
    /// append the record, and return a clone of it.
    pub fn insert(&self, title: String, content: String) -> Note {
        let mut inner = self.write();
        let id = match self.policy {
            IdPolicy::Sequential => {
                let id = NoteId::Seq(inner.next_seq);
                inner.next_seq += 1;
                id
            }
            IdPolicy::Random => NoteId::Random(Uuid::new_v4()),
        };
        let now = Utc::now();
        let note = Note {
            id,
            title,
            content,
            created_at: now,
            updated_at: now,
        };
        inner.notes.push(note.clone());
        note
    }

    /// Snapshot of all records in insertion order.
    pub fn all(&self) -> Vec<Note> {
        self.read().notes.clone()
    }

    /// Look up a record by id; absence is a normal outcome.
    pub fn find(&self, id: &NoteId) -> Option<Note> {
        self.read().notes.iter().find(|note| note.id == *id).cloned()
    }

    /// Overwrite the fields provided by the patch and refresh `updated_at`.
    ///
    /// Absent and empty patch fields leave the stored value unchanged, so
    /// no call path can blank a field or fall back to a stale default.
    pub fn update(&self, id: &NoteId, patch: NotePatch) -> Option<Note> {
        let mut inner = self.write();
        let note = inner.notes.iter_mut().find(|note| note.id == *id)?;
        if let Some(title) = patch.title.filter(|title| !title.is_empty()) {
            note.title = title;
        }
        if let Some(content) = patch.content.filter(|content| !content.is_empty()) {
            note.content = content;
        }
        note.updated_at = Utc::now();
        Some(note.clone())
    }

    /// Remove a record by id; true iff it existed.
    pub fn remove(&self, id: &NoteId) -> bool {
        let mut inner = self.write();
        let before = inner.notes.len();
        inner.notes.retain(|note| note.id != *id);
        inner.notes.len() != before
    }

    pub fn len(&self) -> usize {
        self.read().notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Poisoned locks still hold valid data (records are plain owned values,
    // written whole), so recover the guard rather than unwind every later
    // request.
    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Test-only hook: panic while holding the write lock.
    #[cfg(test)]
    fn poison_write_lock(&self) {
        let _guard = self.write();
        panic!("poisoning the store lock");
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}
