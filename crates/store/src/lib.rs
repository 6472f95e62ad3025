//! Durable profile storage for the dossier catalog engine
//!
//! This crate provides:
//! - CatalogDb: the injected persistence handle with explicit lifecycle
//! - ProfileStore: stateless query facade over `Arc<CatalogDb>`
//! - matcher: the case-insensitive substring search predicate
//! - journal: append-only JSON Lines durability
//!
//! # Usage
//!
//! ```ignore
//! use dossier_store::{CatalogDb, ProfileStore};
//!
//! let db = CatalogDb::open("/data/dossier")?;
//! let store = ProfileStore::new(db.clone());
//! let id = store.insert(draft)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod db;
pub mod journal;
pub mod matcher;
pub mod store;

pub use db::{CatalogConfig, CatalogDb, JOURNAL_FILE_NAME};
pub use journal::Journal;
pub use matcher::{contains_ci, profile_matches};
pub use store::ProfileStore;
