//! In-memory query pipeline and aggregation for the dossier catalog
//!
//! This crate provides:
//! - pipeline: filter, stable sort, pagination and search over an
//!   already-fetched batch of profiles (the thin-client fallback path)
//! - aggregate: grouped statistics with explicit category un-nesting
//!
//! Both are pure functions over a supplied snapshot; they never mutate
//! their input and are trivially safe under concurrent invocation. The
//! pipeline must reproduce, bit-for-bit in ordering, what the store's own
//! query path would have produced for the same input.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod pipeline;

pub use aggregate::compute_statistics;
pub use pipeline::{
    filter_by_category, filter_by_threat_level, paginate, search, sort_by,
    statistics_from_batch, SortKey,
};
