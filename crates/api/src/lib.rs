//! Engine-facing API for the dossier catalog
//!
//! This crate provides:
//! - ProfileCatalog: the single query port callers program against
//! - StoreCatalog: store-backed implementation (preferred; pushes
//!   filtering to storage)
//! - BatchCatalog: bulk-fetch fallback backed by the in-memory pipeline
//! - Envelope: the `{success, data, count, error}` response wrapper
//!
//! Callers are agnostic to which backend answers; the two must agree on
//! semantics for any input set and query.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod envelope;

pub use catalog::{BatchCatalog, ProfileCatalog, StoreCatalog};
pub use envelope::Envelope;
