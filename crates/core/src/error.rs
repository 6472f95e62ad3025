//! Error types for the dossier catalog engine
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! The engine never retries or swallows an error; callers decide whether a
//! `StoreUnavailable` is worth retrying or whether any other kind maps
//! directly to a user-facing message.

use std::io;
use thiserror::Error;

/// Result type alias for dossier operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the dossier catalog engine
#[derive(Debug, Error)]
pub enum Error {
    /// Point lookup miss (by internal id or actor key)
    #[error("not found: {0}")]
    NotFound(String),

    /// Insert collision on a caller-assigned actor key
    #[error("duplicate actor key: {0}")]
    DuplicateKey(String),

    /// Malformed caller input (pagination bounds, blank search text, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Underlying persistence unreachable or unusable
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Data corruption detected (journal replay inconsistencies)
    #[error("data corruption: {0}")]
    Corruption(String),

    /// I/O error (journal file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
