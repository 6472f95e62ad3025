//! CatalogDb: the injected persistence handle
//!
//! ## Lifecycle
//!
//! Opened once at process start via [`CatalogDb::open`] (which replays the
//! journal) or [`CatalogDb::ephemeral`] (no files), closed at shutdown via
//! [`CatalogDb::close`]. Engine operations take the handle as an explicit
//! dependency; there is no ambient global state.
//!
//! ## Layout
//!
//! - `profiles`: DashMap keyed by internal id — lock-free reads, sharded
//!   writes, O(1) point lookup.
//! - `key_index`: DashMap from actor key to internal id. Its entry API is
//!   what makes duplicate-key rejection atomic under concurrent inserts:
//!   exactly one racing insert reserves the slot.
//! - `journal`: optional append-only log behind a mutex-guarded writer.

use crate::journal::Journal;
use dashmap::DashMap;
use dossier_core::{Error, Profile, ProfileId, Result, SEARCH_RESULT_LIMIT};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Journal file name placed in the catalog data directory.
pub const JOURNAL_FILE_NAME: &str = "profiles.jsonl";

/// Configuration for a catalog handle
///
/// Plain defaults with field overrides; no config file is read.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Journal file name inside the data directory
    pub journal_file: String,
    /// Cap on free-text search results
    pub search_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            journal_file: JOURNAL_FILE_NAME.to_string(),
            search_limit: SEARCH_RESULT_LIMIT,
        }
    }
}

/// The persistence handle backing [`crate::ProfileStore`]
///
/// All state lives here; the store facade is stateless. Multiple facades
/// over the same handle are safe, and all read operations run fully in
/// parallel with inserts.
#[derive(Debug)]
pub struct CatalogDb {
    profiles: DashMap<ProfileId, Profile>,
    key_index: DashMap<String, ProfileId>,
    journal: Option<Journal>,
    config: CatalogConfig,
}

impl CatalogDb {
    /// Open a durable catalog in `dir` with default configuration.
    ///
    /// Creates the directory if needed and replays the journal.
    pub fn open(dir: impl AsRef<Path>) -> Result<Arc<Self>> {
        Self::open_with_config(dir, CatalogConfig::default())
    }

    /// Open a durable catalog in `dir` with explicit configuration.
    pub fn open_with_config(dir: impl AsRef<Path>, config: CatalogConfig) -> Result<Arc<Self>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::StoreUnavailable(format!("cannot create {}: {e}", dir.display())))?;

        let (journal, replayed) = Journal::open(dir.join(&config.journal_file))?;
        let db = Self {
            profiles: DashMap::new(),
            key_index: DashMap::new(),
            journal: Some(journal),
            config,
        };
        for profile in replayed {
            db.load_replayed(profile)?;
        }
        info!(profiles = db.len(), path = %dir.display(), "catalog opened");
        Ok(Arc::new(db))
    }

    /// Open an in-memory catalog with no backing files.
    pub fn ephemeral() -> Arc<Self> {
        Arc::new(Self {
            profiles: DashMap::new(),
            key_index: DashMap::new(),
            journal: None,
            config: CatalogConfig::default(),
        })
    }

    /// Flush pending journal writes. Call at shutdown.
    pub fn close(&self) -> Result<()> {
        if let Some(journal) = &self.journal {
            journal.flush()?;
        }
        info!(profiles = self.len(), "catalog closed");
        Ok(())
    }

    fn load_replayed(&self, profile: Profile) -> Result<()> {
        use dashmap::mapref::entry::Entry;
        match self.key_index.entry(profile.actor_key.clone()) {
            Entry::Occupied(_) => {
                return Err(Error::Corruption(format!(
                    "journal contains duplicate actor key: {}",
                    profile.actor_key
                )))
            }
            Entry::Vacant(slot) => {
                slot.insert(profile.id);
            }
        }
        self.profiles.insert(profile.id, profile);
        Ok(())
    }

    /// Number of profiles currently held.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the catalog holds no profiles.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub(crate) fn profiles(&self) -> &DashMap<ProfileId, Profile> {
        &self.profiles
    }

    pub(crate) fn key_index(&self) -> &DashMap<String, ProfileId> {
        &self.key_index
    }

    pub(crate) fn journal(&self) -> Option<&Journal> {
        self.journal.as_ref()
    }

    pub(crate) fn config(&self) -> &CatalogConfig {
        &self.config
    }
}
