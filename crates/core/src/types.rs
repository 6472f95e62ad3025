//! Identifier and pagination types
//!
//! This module defines:
//! - ProfileId: storage-assigned unique identifier (UUID v4 wrapper)
//! - Page: validated limit/offset pagination bounds

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Default number of profiles returned by a list query when the caller
/// does not specify a limit.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Maximum list limit. Caller limits above this are clamped, not rejected.
pub const MAX_LIST_LIMIT: usize = 500;

/// Fixed cap on free-text search results, bounding query cost.
pub const SEARCH_RESULT_LIMIT: usize = 20;

/// Storage-assigned unique identifier for a profile
///
/// A ProfileId is a wrapper around a UUID v4, assigned once at insert and
/// immutable afterwards. It is distinct from the caller-assigned actor key;
/// lookups work by either. The derived `Ord` gives the deterministic
/// tie-break used by recency ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProfileId(Uuid);

impl ProfileId {
    /// Create a new random ProfileId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a ProfileId from a string representation
    ///
    /// Accepts standard UUID format (with or without hyphens).
    /// Returns None if the string is not a valid UUID.
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }

    /// Get the raw bytes of this ProfileId
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated pagination bounds for list queries
///
/// Constructed from raw caller integers so that negative input is
/// representable and rejected with `InvalidArgument` instead of silently
/// wrapping. `limit` defaults to [`DEFAULT_LIST_LIMIT`] and is clamped to
/// [`MAX_LIST_LIMIT`]; `offset` defaults to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Maximum number of records to return
    pub limit: usize,
    /// Number of records to skip before the first returned one
    pub offset: usize,
}

impl Page {
    /// Build a Page from raw caller-supplied bounds
    ///
    /// # Errors
    /// Returns `InvalidArgument` if either bound is negative.
    pub fn from_raw(limit: Option<i64>, offset: Option<i64>) -> Result<Self> {
        let limit = match limit {
            None => DEFAULT_LIST_LIMIT,
            Some(l) if l < 0 => {
                return Err(Error::InvalidArgument(format!(
                    "limit must be non-negative, got {l}"
                )))
            }
            Some(l) => (l as usize).min(MAX_LIST_LIMIT),
        };
        let offset = match offset {
            None => 0,
            Some(o) if o < 0 => {
                return Err(Error::InvalidArgument(format!(
                    "offset must be non-negative, got {o}"
                )))
            }
            Some(o) => o as usize,
        };
        Ok(Self { limit, offset })
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}
