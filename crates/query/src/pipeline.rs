//! Client-parity filter, sort, pagination and search
//!
//! This is the second, independent implementation of the query semantics,
//! for callers that only have bulk read access: fetch the flat listing
//! once, then filter/sort/paginate here. Every function must agree with
//! the store's own query path for the same input; the parity suite in the
//! workspace `tests/` directory holds both to the same property table.
//!
//! All sorts are stable: equally-ranked profiles keep their input order,
//! so a filter step never reorders what the caller is already displaying.

use crate::aggregate;
use dossier_core::{
    normalize_level, severity_rank, Error, Page, Profile, Result, Statistics,
    SEARCH_RESULT_LIMIT,
};
use dossier_store::matcher;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported sort keys, parsed from their wire names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// `"name"`: display name, lexicographic ascending (ordinal,
    /// locale-insensitive)
    DisplayName,
    /// `"threat-desc"`: severity order CRITICAL, EXTREME, HIGH, MEDIUM,
    /// LOW; unknown labels last
    ThreatDesc,
    /// `"date"`: created_at descending, most recent first
    Recency,
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(Self::DisplayName),
            "threat-desc" => Ok(Self::ThreatDesc),
            "date" => Ok(Self::Recency),
            other => Err(Error::InvalidArgument(format!(
                "unknown sort key: {other}"
            ))),
        }
    }
}

/// Profiles whose threat level matches `level` case-insensitively.
///
/// Input relative order is preserved.
pub fn filter_by_threat_level(profiles: &[Profile], level: &str) -> Vec<Profile> {
    let want = normalize_level(level);
    profiles
        .iter()
        .filter(|p| normalize_level(&p.threat_level) == want)
        .cloned()
        .collect()
}

/// Profiles carrying `category` (case-sensitive exact membership).
///
/// Input relative order is preserved.
pub fn filter_by_category(profiles: &[Profile], category: &str) -> Vec<Profile> {
    profiles
        .iter()
        .filter(|p| p.categories.iter().any(|c| c == category))
        .cloned()
        .collect()
}

/// Stable sort by the given key; ties keep input relative order.
pub fn sort_by(profiles: &[Profile], key: SortKey) -> Vec<Profile> {
    let mut sorted = profiles.to_vec();
    match key {
        SortKey::DisplayName => sorted.sort_by(|a, b| a.display_name.cmp(&b.display_name)),
        SortKey::ThreatDesc => sorted.sort_by_key(|p| severity_rank(&p.threat_level)),
        SortKey::Recency => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    sorted
}

/// Apply the store's pagination contract to a batch.
pub fn paginate(profiles: &[Profile], page: Page) -> Vec<Profile> {
    profiles
        .iter()
        .skip(page.offset)
        .take(page.limit)
        .cloned()
        .collect()
}

/// Client-parity free-text search: same predicate, same cap, same
/// blank-query error as the store.
pub fn search(profiles: &[Profile], query: &str) -> Result<Vec<Profile>> {
    if query.trim().is_empty() {
        return Err(Error::InvalidArgument(
            "search query must be non-empty".to_string(),
        ));
    }
    Ok(profiles
        .iter()
        .filter(|p| matcher::profile_matches(p, query))
        .take(SEARCH_RESULT_LIMIT)
        .cloned()
        .collect())
}

/// Statistics derived from the batch the caller is holding.
///
/// Delegates to the one aggregation implementation so the two query paths
/// cannot drift. Always derive these from the same batch being displayed,
/// never from a separately cached full fetch, or the totals diverge from
/// what the user sees filtered on screen.
pub fn statistics_from_batch(profiles: &[Profile]) -> Statistics {
    aggregate::compute_statistics(profiles)
}
