//! Store/batch parity
//!
//! The same query against the store-backed catalog and the batch-backed
//! catalog must return identical sequences and identical statistics. This
//! suite holds both backends to one property table so semantic drift is
//! caught mechanically.

use dossier::{
    BatchCatalog, CatalogDb, Error, Page, ProfileCatalog, ProfileDraft, SortKey, StoreCatalog,
};
use dossier_query::pipeline;
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn populated() -> StoreCatalog {
    let catalog = StoreCatalog::new(CatalogDb::ephemeral());
    let store = catalog.store();
    store
        .insert(
            ProfileDraft::new("zodiac-killer", "Zodiac Killer", "HIGH")
                .aliases(["The Zodiac"])
                .categories(["Serial Killers", "Unsolved"]),
        )
        .unwrap();
    store
        .insert(
            ProfileDraft::new("btk", "Dennis Rader", "EXTREME")
                .aliases(["BTK", "Bind Torture Kill"])
                .categories(["Serial Killers"]),
        )
        .unwrap();
    store
        .insert(
            ProfileDraft::new("lockbit", "LockBit Group", "CRITICAL")
                .categories(["Ransomware", "Organized Crime"]),
        )
        .unwrap();
    store
        .insert(ProfileDraft::new("pickpocket", "Unknown Pickpocket", "low"))
        .unwrap();
    catalog
}

fn batch_of(store: &StoreCatalog) -> BatchCatalog {
    // The fallback path: one bulk fetch, everything else client-side.
    BatchCatalog::new(store.store().all())
}

// ============================================================================
// Fixture Parity
// ============================================================================

#[test]
fn list_parity_across_pages() {
    let store = populated();
    let batch = batch_of(&store);
    for (limit, offset) in [(0, 0), (2, 0), (2, 2), (10, 0), (10, 3), (10, 99)] {
        let page = Page { limit, offset };
        assert_eq!(store.list(page).unwrap(), batch.list(page).unwrap());
    }
}

#[test]
fn search_parity_including_cap_and_errors() {
    let store = populated();
    let batch = batch_of(&store);

    for query in ["zodiac", "KILL", "bind", "lock", "xyzzy"] {
        assert_eq!(
            store.search(query).unwrap(),
            batch.search(query).unwrap(),
            "search({query}) diverged"
        );
    }
    assert!(matches!(store.search(" "), Err(Error::InvalidArgument(_))));
    assert!(matches!(batch.search(" "), Err(Error::InvalidArgument(_))));
}

#[test]
fn filter_parity() {
    let store = populated();
    let batch = batch_of(&store);

    for level in ["CRITICAL", "extreme", "High", "LOW", "UNUSED"] {
        assert_eq!(
            store.by_threat_level(level).unwrap(),
            batch.by_threat_level(level).unwrap()
        );
    }
    for category in ["Serial Killers", "Ransomware", "serial killers", "Nope"] {
        assert_eq!(
            store.by_category(category).unwrap(),
            batch.by_category(category).unwrap()
        );
    }
}

#[test]
fn point_lookup_parity() {
    let store = populated();
    let batch = batch_of(&store);

    let profile = store.by_actor_key("btk").unwrap();
    assert_eq!(batch.by_actor_key("btk").unwrap(), profile);
    assert_eq!(batch.by_id(&profile.id).unwrap(), profile);
}

#[test]
fn statistics_parity() {
    let store = populated();
    let batch = batch_of(&store);
    assert_eq!(store.statistics().unwrap(), batch.statistics().unwrap());
}

#[test]
fn threat_desc_sort_visits_severity_groups_in_order() {
    let store = populated();
    let sorted = pipeline::sort_by(&store.store().all(), SortKey::ThreatDesc);

    let levels: Vec<String> = sorted
        .iter()
        .map(|p| p.threat_level.to_uppercase())
        .collect();
    assert_eq!(levels, vec!["CRITICAL", "EXTREME", "HIGH", "LOW"]);
}

// ============================================================================
// Property-Based Parity
// ============================================================================

fn level_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("CRITICAL".to_string()),
        Just("EXTREME".to_string()),
        Just("HIGH".to_string()),
        Just("High".to_string()),
        Just("medium".to_string()),
        Just("LOW".to_string()),
        Just("NOVEL".to_string()),
    ]
}

fn categories_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("Serial Killers".to_string()),
            Just("Ransomware".to_string()),
            Just("Cults".to_string()),
            Just("Organized Crime".to_string()),
        ],
        0..3,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_store_and_batch_agree(
        profiles in prop::collection::vec(
            ("[A-Za-z]{1,10}", level_strategy(), categories_strategy()),
            0..25,
        ),
        limit in 0usize..30,
        offset in 0usize..30,
        filter_level in level_strategy(),
        query in "[a-z]{1,3}",
    ) {
        let store = StoreCatalog::new(CatalogDb::ephemeral());
        for (i, (name, level, categories)) in profiles.iter().enumerate() {
            store
                .store()
                .insert(
                    ProfileDraft::new(format!("actor-{i}"), name.clone(), level.clone())
                        .categories(categories.clone()),
                )
                .unwrap();
        }
        let batch = BatchCatalog::new(store.store().all());

        let page = Page { limit, offset };
        prop_assert_eq!(store.list(page).unwrap(), batch.list(page).unwrap());
        prop_assert_eq!(
            store.by_threat_level(&filter_level).unwrap(),
            batch.by_threat_level(&filter_level).unwrap()
        );
        prop_assert_eq!(store.search(&query).unwrap(), batch.search(&query).unwrap());
        prop_assert_eq!(store.statistics().unwrap(), batch.statistics().unwrap());
    }
}
