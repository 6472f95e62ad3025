//! The catalog query port and its two backends
//!
//! One abstract interface, two backing strategies:
//!
//! | Backend | When | How |
//! |---------|------|-----|
//! | [`StoreCatalog`] | caller can issue narrow queries | delegates to `ProfileStore`, statistics over the full collection |
//! | [`BatchCatalog`] | caller only has a flat listing | one bulk snapshot + the in-memory pipeline |
//!
//! The parity suite in the workspace `tests/` directory holds both to the
//! same property table, so semantic drift between them is caught
//! mechanically rather than by inspection.

use dossier_core::{recency_order, Error, Page, Profile, ProfileId, Result, Statistics};
use dossier_query::{aggregate, pipeline};
use dossier_store::{CatalogDb, ProfileStore};
use std::sync::Arc;

/// The engine-facing query port
///
/// The four query shapes (point lookup, free-text search, faceted filter,
/// grouped statistics) plus the listing contract, regardless of backend.
pub trait ProfileCatalog {
    /// Paginated listing in recency order
    fn list(&self, page: Page) -> Result<Vec<Profile>>;
    /// Free-text search over display name, aliases and actor key
    fn search(&self, query: &str) -> Result<Vec<Profile>>;
    /// Point lookup by internal id
    fn by_id(&self, id: &ProfileId) -> Result<Profile>;
    /// Point lookup by actor key
    fn by_actor_key(&self, key: &str) -> Result<Profile>;
    /// Case-insensitive threat level filter, recency order
    fn by_threat_level(&self, level: &str) -> Result<Vec<Profile>>;
    /// Case-sensitive category membership filter, recency order
    fn by_category(&self, category: &str) -> Result<Vec<Profile>>;
    /// Grouped statistics over the backing collection
    fn statistics(&self) -> Result<Statistics>;
}

/// Store-backed catalog: the preferred path, pushes filtering to storage.
#[derive(Debug, Clone)]
pub struct StoreCatalog {
    store: ProfileStore,
}

impl StoreCatalog {
    /// Build a catalog over an opened handle.
    pub fn new(db: Arc<CatalogDb>) -> Self {
        Self {
            store: ProfileStore::new(db),
        }
    }

    /// The underlying store, for insert access.
    pub fn store(&self) -> &ProfileStore {
        &self.store
    }
}

impl ProfileCatalog for StoreCatalog {
    fn list(&self, page: Page) -> Result<Vec<Profile>> {
        Ok(self.store.list(page))
    }

    fn search(&self, query: &str) -> Result<Vec<Profile>> {
        self.store.search(query)
    }

    fn by_id(&self, id: &ProfileId) -> Result<Profile> {
        self.store.get_by_id(id)
    }

    fn by_actor_key(&self, key: &str) -> Result<Profile> {
        self.store.get_by_actor_key(key)
    }

    fn by_threat_level(&self, level: &str) -> Result<Vec<Profile>> {
        Ok(self.store.filter_by_threat_level(level))
    }

    fn by_category(&self, category: &str) -> Result<Vec<Profile>> {
        Ok(self.store.filter_by_category(category))
    }

    fn statistics(&self) -> Result<Statistics> {
        Ok(aggregate::compute_statistics(&self.store.all()))
    }
}

/// Batch-backed catalog: the thin-client fallback.
///
/// Holds one bulk snapshot (typically the full listing result) and answers
/// every query shape from it via the in-memory pipeline. Statistics are
/// derived from this same batch, never from a separate fetch.
#[derive(Debug, Clone)]
pub struct BatchCatalog {
    batch: Vec<Profile>,
}

impl BatchCatalog {
    /// Build a catalog over a fetched batch.
    ///
    /// The batch is normalized into canonical recency order so that
    /// listing and filtering reproduce the store's ordering bit-for-bit
    /// even when the snapshot arrived unordered.
    pub fn new(mut batch: Vec<Profile>) -> Self {
        batch.sort_by(recency_order);
        Self { batch }
    }

    /// The held snapshot, in canonical recency order.
    pub fn batch(&self) -> &[Profile] {
        &self.batch
    }
}

impl ProfileCatalog for BatchCatalog {
    fn list(&self, page: Page) -> Result<Vec<Profile>> {
        Ok(pipeline::paginate(&self.batch, page))
    }

    fn search(&self, query: &str) -> Result<Vec<Profile>> {
        pipeline::search(&self.batch, query)
    }

    fn by_id(&self, id: &ProfileId) -> Result<Profile> {
        self.batch
            .iter()
            .find(|p| p.id == *id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("no profile with id {id}")))
    }

    fn by_actor_key(&self, key: &str) -> Result<Profile> {
        self.batch
            .iter()
            .find(|p| p.actor_key == key)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("no profile with actor key {key}")))
    }

    fn by_threat_level(&self, level: &str) -> Result<Vec<Profile>> {
        Ok(pipeline::filter_by_threat_level(&self.batch, level))
    }

    fn by_category(&self, category: &str) -> Result<Vec<Profile>> {
        Ok(pipeline::filter_by_category(&self.batch, category))
    }

    fn statistics(&self) -> Result<Statistics> {
        Ok(pipeline::statistics_from_batch(&self.batch))
    }
}
