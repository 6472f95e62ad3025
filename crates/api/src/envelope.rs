//! Response envelope
//!
//! Every response crossing the engine boundary is wrapped in
//! `{ success, data?, count?, error? }`. A failed response carries a
//! human-readable error and no data. The transport layer decides how to
//! map the envelope onto its wire format; the engine only builds it.

use dossier_core::Result;
use serde::{Deserialize, Serialize};

/// Uniform response wrapper for catalog operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Payload, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Number of records in `data`, for sequence payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Human-readable error, present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful response carrying a payload.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            error: None,
        }
    }

    /// Successful response carrying a payload and its record count.
    pub fn ok_with_count(data: T, count: usize) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: Some(count),
            error: None,
        }
    }

    /// Failed response carrying an error message and no data.
    pub fn fail(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            error: Some(error.to_string()),
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// Wrap a sequence result, counting on success.
    pub fn from_sequence(result: Result<Vec<T>>) -> Self {
        match result {
            Ok(items) => {
                let count = items.len();
                Self::ok_with_count(items, count)
            }
            Err(e) => Self::fail(e),
        }
    }
}

impl<T> From<Result<T>> for Envelope<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::fail(e),
        }
    }
}
