//! The asset metadata cache.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use algo_types::{AssetId, AssetMetadata, RawAssetRecord, ASSET_ID_ALGO};
use tracing::{debug, info, warn};

use crate::{AssetSource, RegistryError};

/// Cache of asset id → metadata.
///
/// Entries are never evicted. A lazily resolved entry is never replaced by a
/// later resolution of the same id (first writer wins); only [`preload`]
/// overwrites existing entries.
///
/// The source is queried without holding the cache lock, so two threads
/// resolving the same unknown id may both hit the source. Both then read back
/// whichever entry was inserted first.
///
/// [`preload`]: AssetRegistry::preload
pub struct AssetRegistry {
    assets: RwLock<HashMap<AssetId, AssetMetadata>>,
    source: Arc<dyn AssetSource>,
}

impl AssetRegistry {
    /// Create a registry seeded with the native currency.
    pub fn new(source: Arc<dyn AssetSource>) -> Self {
        let mut assets = HashMap::new();
        assets.insert(ASSET_ID_ALGO, AssetMetadata::algorand());
        Self {
            assets: RwLock::new(assets),
            source,
        }
    }

    /// Metadata for `id`, querying the source on a cache miss.
    pub fn resolve(&self, id: AssetId) -> Result<AssetMetadata, RegistryError> {
        if let Some(meta) = self.get(id) {
            return Ok(meta);
        }

        debug!(asset_id = %id, "asset metadata not cached, querying source");
        let record = self
            .source
            .get_asset(id)
            .map_err(|source| RegistryError::Source { id, source })?
            .ok_or(RegistryError::NotFound(id))?;
        let meta = record
            .parse()
            .map_err(|source| RegistryError::InvalidMetadata { id, source })?;

        let mut assets = self.assets.write().unwrap_or_else(PoisonError::into_inner);
        Ok(assets.entry(id).or_insert(meta).clone())
    }

    /// Seed the cache from account holdings, overwriting existing entries.
    ///
    /// Only records with a plain `unit-name` are used. Returns the number of
    /// entries written.
    pub fn preload<'a, I>(&self, records: I) -> usize
    where
        I: IntoIterator<Item = &'a RawAssetRecord>,
    {
        let mut assets = self.assets.write().unwrap_or_else(PoisonError::into_inner);
        let mut loaded = 0;
        for record in records {
            if !record.has_direct_unit_name() {
                continue;
            }
            let Some(id) = record.asset_id else {
                warn!("skipping preload record without asset-id");
                continue;
            };
            match record.parse_direct() {
                Ok(meta) => {
                    assets.insert(id, meta);
                    loaded += 1;
                }
                Err(e) => warn!(asset_id = %id, error = %e, "skipping preload record"),
            }
        }
        info!(loaded, cached = assets.len(), "preloaded asset metadata");
        loaded
    }

    /// Cached metadata for `id`, without querying the source.
    pub fn get(&self, id: AssetId) -> Option<AssetMetadata> {
        self.assets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    pub fn contains(&self, id: AssetId) -> bool {
        self.assets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&id)
    }

    /// Number of cached entries, including the native currency.
    pub fn len(&self) -> usize {
        self.assets.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
