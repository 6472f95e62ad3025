//! The statistics summary document
//!
//! Grouping keys are drawn verbatim from the stored data's own casing; no
//! fixed enumeration of levels or categories is assumed. `BTreeMap` keeps
//! the serialized form deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics over a set of profiles
///
/// `by_category` counts un-nested category memberships, so its value sum
/// generally exceeds `total` when profiles carry multiple categories; a
/// profile with zero categories contributes to no category bucket but is
/// still counted in `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Count of all profiles in the input
    pub total: u64,
    /// Profile count per threat level label (one bucket per profile)
    pub by_threat_level: BTreeMap<String, u64>,
    /// Membership count per category label (one bucket per membership)
    pub by_category: BTreeMap<String, u64>,
}

impl Statistics {
    /// Statistics of an empty collection
    pub fn empty() -> Self {
        Self::default()
    }
}
