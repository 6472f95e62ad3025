//! Core types for the dossier catalog engine
//!
//! This crate defines the foundational types used throughout the system:
//! - Profile: the cataloged record, with its opaque narrative sub-structures
//! - ProfileId: storage-assigned unique identifier
//! - Page: validated pagination bounds
//! - Statistics: the grouped-count summary document
//! - Error: error type hierarchy
//! - level: severity ranking and normalization helpers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod level;
pub mod profile;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use level::{normalize_level, severity_rank, UNKNOWN_LEVEL_RANK};
pub use profile::{
    recency_order, ActivePeriod, Capture, ModusOperandi, Narrative, Origin, Perpetrator, Profile,
    ProfileDraft,
};
pub use stats::Statistics;
pub use types::{Page, ProfileId, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT, SEARCH_RESULT_LIMIT};
