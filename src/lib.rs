//! HTTP front end for the jotter note service.
//!
//! The domain model, validation, and storage live in `jotter-core`; this
//! crate adds the axum surface, the response envelope, and the `jotterd`
//! binary.

pub mod api;
