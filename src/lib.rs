//! Dossier - embedded catalog engine for threat-actor profile records
//!
//! Dossier stores profile entities and answers four query shapes against
//! them: point lookup (by internal id or actor key), free-text search,
//! faceted filtering, and grouped statistics, all under one deterministic
//! ordering and pagination contract.
//!
//! # Quick Start
//!
//! ```ignore
//! use dossier::{CatalogDb, ProfileCatalog, ProfileDraft, StoreCatalog};
//!
//! let db = CatalogDb::open("/data/dossier")?;
//! let catalog = StoreCatalog::new(db.clone());
//!
//! catalog.store().insert(
//!     ProfileDraft::new("zodiac-killer", "Zodiac Killer", "HIGH")
//!         .categories(["Serial Killers", "Unsolved"]),
//! )?;
//!
//! let stats = catalog.statistics()?;
//! db.close()?;
//! ```
//!
//! # Architecture
//!
//! Callers program against the [`ProfileCatalog`] port. [`StoreCatalog`]
//! backs it with the durable store (preferred; filtering happens at
//! storage). [`BatchCatalog`] backs it with one bulk snapshot and the
//! in-memory pipeline, for callers that only have flat-listing access.
//! Both backends are held to the same semantics by the parity tests.

// Re-export the public API
pub use dossier_api::{BatchCatalog, Envelope, ProfileCatalog, StoreCatalog};
pub use dossier_core::{
    normalize_level, recency_order, severity_rank, ActivePeriod, Capture, Error, ModusOperandi,
    Narrative, Origin, Page, Perpetrator, Profile, ProfileDraft, ProfileId, Result, Statistics,
    DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT, SEARCH_RESULT_LIMIT,
};
pub use dossier_query::{compute_statistics, statistics_from_batch, SortKey};
pub use dossier_store::{CatalogConfig, CatalogDb, ProfileStore};
