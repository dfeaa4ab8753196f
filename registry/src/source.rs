//! The external metadata capability consumed by the registry.

use algo_types::{AssetId, RawAssetRecord};

use crate::SourceError;

/// Fetches raw asset metadata by id.
///
/// Implementations own transport concerns (timeouts, retries, auth). The
/// registry calls [`AssetSource::get_asset`] at most once per successful
/// resolution and never while holding its cache lock.
pub trait AssetSource: Send + Sync {
    /// Returns `Ok(None)` when the source has no asset with this id.
    fn get_asset(&self, id: AssetId) -> Result<Option<RawAssetRecord>, SourceError>;
}
