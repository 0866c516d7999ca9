//! Core library for jotter.
//!
//! This crate provides the note domain model, request validation, and the
//! in-memory store for jotter, independent of any transport layer.
//!
//! # Usage
//!
//! ```
//! use jotter_core::{IdPolicy, NoteService};
//!
//! let service = NoteService::with_policy(IdPolicy::Sequential);
//! let note = service.create_note("shopping".into(), "eggs, flour".into());
//! assert_eq!(service.list_notes(), vec![note]);
//! ```

pub mod models;
pub mod service;
pub mod store;
pub mod validate;

// Re-export commonly used types at crate root
pub use models::{
    CreateNoteInput, IdPolicy, Note, NoteId, NotePatch, ParseIdError, UpdateNoteInput,
};
pub use service::NoteService;
pub use store::NoteStore;
pub use validate::FieldError;
