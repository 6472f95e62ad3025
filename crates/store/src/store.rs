//! ProfileStore: stateless query facade over `Arc<CatalogDb>`
//!
//! ## Design: STATELESS FACADE
//!
//! ProfileStore holds ONLY `Arc<CatalogDb>`. No internal state, no caches,
//! no locks of its own. All data lives in the handle's maps; the journal
//! write path is the only serialized step.
//!
//! ## Ordering
//!
//! Every scan-shaped operation (`list`, `search`, both filters, `all`)
//! returns profiles in recency order: `created_at` descending, ties broken
//! by `id` ascending. Repeated queries over unchanged state return
//! identical sequences.

use crate::db::CatalogDb;
use crate::matcher;
use chrono::Utc;
use dossier_core::{
    normalize_level, recency_order, Error, Page, Profile, ProfileDraft, ProfileId, Result,
};
use std::sync::Arc;
use tracing::debug;

/// Stateless query facade over a catalog handle
///
/// Cheap to clone and to construct; multiple stores over the same handle
/// are safe and see the same data.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    db: Arc<CatalogDb>,
}

impl ProfileStore {
    /// Create a store facade over an opened catalog handle.
    pub fn new(db: Arc<CatalogDb>) -> Self {
        Self { db }
    }

    /// Insert a new profile, assigning its id and creation timestamp.
    ///
    /// The actor key reservation is atomic: of two concurrent inserts with
    /// the same key, exactly one succeeds and the other observes
    /// `DuplicateKey`. A failed journal append rolls the reservation back
    /// and surfaces as `StoreUnavailable`.
    ///
    /// # Errors
    /// - `InvalidArgument` if `display_name` or `actor_key` is blank
    /// - `DuplicateKey` if the actor key is already taken
    /// - `StoreUnavailable` if the journal append fails
    pub fn insert(&self, draft: ProfileDraft) -> Result<ProfileId> {
        use dashmap::mapref::entry::Entry;

        if draft.display_name.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "display_name must be non-empty".to_string(),
            ));
        }
        if draft.actor_key.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "actor_key must be non-empty".to_string(),
            ));
        }

        let id = ProfileId::new();
        match self.db.key_index().entry(draft.actor_key.clone()) {
            Entry::Occupied(_) => return Err(Error::DuplicateKey(draft.actor_key)),
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        let profile = draft.into_profile(id, Utc::now());
        if let Some(journal) = self.db.journal() {
            if let Err(e) = journal.append(&profile) {
                self.db.key_index().remove(&profile.actor_key);
                return Err(Error::StoreUnavailable(format!("journal append: {e}")));
            }
        }
        debug!(%id, actor_key = %profile.actor_key, "profile inserted");
        self.db.profiles().insert(id, profile);
        Ok(id)
    }

    /// Point lookup by storage-assigned internal id.
    pub fn get_by_id(&self, id: &ProfileId) -> Result<Profile> {
        self.db
            .profiles()
            .get(id)
            .map(|entry| entry.clone())
            .ok_or_else(|| Error::NotFound(format!("no profile with id {id}")))
    }

    /// Point lookup by caller-assigned actor key.
    pub fn get_by_actor_key(&self, key: &str) -> Result<Profile> {
        let id = self
            .db
            .key_index()
            .get(key)
            .map(|entry| *entry.value())
            .ok_or_else(|| Error::NotFound(format!("no profile with actor key {key}")))?;
        self.get_by_id(&id)
    }

    /// Full snapshot in recency order. Feeds the aggregation path and the
    /// bulk-fetch fallback.
    pub fn all(&self) -> Vec<Profile> {
        let mut profiles: Vec<Profile> = self
            .db
            .profiles()
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        profiles.sort_unstable_by(recency_order);
        profiles
    }

    /// Paginated listing in recency order.
    pub fn list(&self, page: Page) -> Vec<Profile> {
        self.all()
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .collect()
    }

    /// Free-text search over display name, aliases and actor key.
    ///
    /// Capped at the configured search limit (20 by default) to bound
    /// cost. Results keep recency order.
    ///
    /// # Errors
    /// `InvalidArgument` on empty or whitespace-only query text; a blank
    /// query is a caller error, not "match everything".
    pub fn search(&self, query: &str) -> Result<Vec<Profile>> {
        if query.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "search query must be non-empty".to_string(),
            ));
        }
        Ok(self
            .all()
            .into_iter()
            .filter(|p| matcher::profile_matches(p, query))
            .take(self.db.config().search_limit)
            .collect())
    }

    /// Profiles whose threat level matches `level` case-insensitively,
    /// in recency order.
    pub fn filter_by_threat_level(&self, level: &str) -> Vec<Profile> {
        let want = normalize_level(level);
        self.all()
            .into_iter()
            .filter(|p| normalize_level(&p.threat_level) == want)
            .collect()
    }

    /// Profiles carrying `category` (case-sensitive exact membership),
    /// in recency order.
    pub fn filter_by_category(&self, category: &str) -> Vec<Profile> {
        self.all()
            .into_iter()
            .filter(|p| p.categories.iter().any(|c| c == category))
            .collect()
    }

    /// Number of profiles in the catalog.
    pub fn count(&self) -> usize {
        self.db.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::DEFAULT_LIST_LIMIT;
    use std::thread;
    use std::time::Duration;

    fn store() -> ProfileStore {
        ProfileStore::new(CatalogDb::ephemeral())
    }

    fn draft(key: &str, name: &str, level: &str) -> ProfileDraft {
        ProfileDraft::new(key, name, level)
    }

    // Spacing inserts apart keeps created_at strictly decreasing in the
    // ordering-sensitive assertions below.
    fn spaced_insert(store: &ProfileStore, d: ProfileDraft) -> ProfileId {
        let id = store.insert(d).unwrap();
        thread::sleep(Duration::from_millis(2));
        id
    }

    #[test]
    fn test_insert_and_point_lookups() {
        let store = store();
        let id = store
            .insert(draft("zodiac-killer", "Zodiac Killer", "HIGH"))
            .unwrap();

        let by_id = store.get_by_id(&id).unwrap();
        assert_eq!(by_id.display_name, "Zodiac Killer");

        let by_key = store.get_by_actor_key("zodiac-killer").unwrap();
        assert_eq!(by_key.id, id);
    }

    #[test]
    fn test_lookup_misses_are_not_found() {
        let store = store();
        assert!(matches!(
            store.get_by_id(&ProfileId::new()),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            store.get_by_actor_key("nobody"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_insert_blank_fields_rejected() {
        let store = store();
        assert!(matches!(
            store.insert(draft("k", "   ", "LOW")),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            store.insert(draft("", "Name", "LOW")),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_duplicate_key_leaves_store_unchanged() {
        let store = store();
        store.insert(draft("same", "First", "LOW")).unwrap();
        let err = store.insert(draft("same", "Second", "HIGH")).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey(_)));
        assert_eq!(store.count(), 1);
        assert_eq!(store.get_by_actor_key("same").unwrap().display_name, "First");
    }

    #[test]
    fn test_concurrent_duplicate_insert_exactly_one_wins() {
        let store = store();
        let successes: usize = thread::scope(|s| {
            let handles: Vec<_> = (0..2)
                .map(|i| {
                    let store = store.clone();
                    s.spawn(move || {
                        store
                            .insert(draft("racing-key", &format!("Racer {i}"), "LOW"))
                            .is_ok()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|&ok| ok)
                .count()
        });
        assert_eq!(successes, 1);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_list_recency_order_and_pagination() {
        let store = store();
        spaced_insert(&store, draft("a", "Alpha", "LOW"));
        spaced_insert(&store, draft("b", "Beta", "LOW"));
        spaced_insert(&store, draft("c", "Gamma", "LOW"));

        let all = store.list(Page::default());
        let keys: Vec<&str> = all.iter().map(|p| p.actor_key.as_str()).collect();
        assert_eq!(keys, vec!["c", "b", "a"]);

        let page = store.list(Page { limit: 1, offset: 1 });
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].actor_key, "b");
    }

    #[test]
    fn test_list_default_limit_caps_results() {
        let store = store();
        for i in 0..(DEFAULT_LIST_LIMIT + 5) {
            store.insert(draft(&format!("k{i}"), "Name", "LOW")).unwrap();
        }
        assert_eq!(store.list(Page::default()).len(), DEFAULT_LIST_LIMIT);
    }

    #[test]
    fn test_list_is_stable_across_calls() {
        let store = store();
        for i in 0..10 {
            store.insert(draft(&format!("k{i}"), "Name", "LOW")).unwrap();
        }
        let page = Page { limit: 5, offset: 2 };
        assert_eq!(store.list(page), store.list(page));
    }

    #[test]
    fn test_search_blank_query_rejected() {
        let store = store();
        assert!(matches!(store.search(""), Err(Error::InvalidArgument(_))));
        assert!(matches!(store.search("   "), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_search_matches_name_alias_and_key() {
        let store = store();
        store
            .insert(draft("rn-1", "Richard Ramirez", "EXTREME").aliases(["Night Stalker"]))
            .unwrap();
        store.insert(draft("javier-cartel", "Unknown", "HIGH")).unwrap();
        store.insert(draft("other", "Someone Else", "LOW")).unwrap();

        assert_eq!(store.search("ramirez").unwrap().len(), 1);
        assert_eq!(store.search("STALKER").unwrap().len(), 1);
        assert_eq!(store.search("javier").unwrap().len(), 1);
        assert!(store.search("nobody-here").unwrap().is_empty());
    }

    #[test]
    fn test_search_capped_at_limit() {
        let store = store();
        for i in 0..25 {
            store
                .insert(draft(&format!("actor-{i}"), "Common Name", "LOW"))
                .unwrap();
        }
        assert_eq!(store.search("common").unwrap().len(), 20);
    }

    #[test]
    fn test_filter_by_threat_level_case_insensitive() {
        let store = store();
        spaced_insert(&store, draft("a", "A", "HIGH"));
        spaced_insert(&store, draft("b", "B", "High"));
        spaced_insert(&store, draft("c", "C", "LOW"));

        let high = store.filter_by_threat_level("high");
        let keys: Vec<&str> = high.iter().map(|p| p.actor_key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_filter_by_category_exact_membership() {
        let store = store();
        store
            .insert(draft("a", "A", "HIGH").categories(["Serial Killers", "Unsolved"]))
            .unwrap();
        store
            .insert(draft("b", "B", "HIGH").categories(["serial killers"]))
            .unwrap();

        // Case-sensitive exact match; "serial killers" is a different label.
        let hits = store.filter_by_category("Serial Killers");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].actor_key, "a");
    }

    #[test]
    fn test_filter_idempotent() {
        let store = store();
        store.insert(draft("a", "A", "HIGH").categories(["X"])).unwrap();
        store.insert(draft("b", "B", "HIGH").categories(["X", "Y"])).unwrap();
        assert_eq!(
            store.filter_by_category("X"),
            store.filter_by_category("X")
        );
    }
}
