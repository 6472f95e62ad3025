//! Grouped statistics over a profile snapshot
//!
//! Category grouping is an explicit expand-then-group two-step: every
//! profile is first un-nested into one row per category membership, then
//! the rows are grouped. The sum of category counts therefore exceeding
//! `total` is intentional, not an accounting bug. A profile with zero
//! categories contributes to no category bucket but stays in `total`.
//!
//! Grouping keys are taken verbatim from the stored casing. Filters
//! normalize threat levels; statistics do not, so mixed stored casing
//! shows up as distinct buckets.

use dossier_core::{Profile, Statistics};
use std::collections::BTreeMap;

/// Compute summary statistics over the supplied profiles.
///
/// `by_threat_level` assigns each profile to exactly one bucket, so its
/// value sum always equals `total`. An empty input yields zeroed
/// statistics.
pub fn compute_statistics(profiles: &[Profile]) -> Statistics {
    let total = profiles.len() as u64;

    let mut by_threat_level: BTreeMap<String, u64> = BTreeMap::new();
    for profile in profiles {
        *by_threat_level
            .entry(profile.threat_level.clone())
            .or_insert(0) += 1;
    }

    // Expand: one row per category membership.
    let memberships: Vec<&String> = profiles
        .iter()
        .flat_map(|profile| profile.categories.iter())
        .collect();

    // Group the expanded rows.
    let mut by_category: BTreeMap<String, u64> = BTreeMap::new();
    for category in memberships {
        *by_category.entry(category.clone()).or_insert(0) += 1;
    }

    Statistics {
        total,
        by_threat_level,
        by_category,
    }
}
