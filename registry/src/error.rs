use algo_types::{AssetId, MetadataError};
use thiserror::Error;

/// Failure reported by a metadata source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("metadata source unreachable: {0}")]
    Unreachable(String),

    #[error("metadata request failed: {0}")]
    RequestFailed(String),

    #[error("invalid response from metadata source: {0}")]
    InvalidResponse(String),
}

/// Failure to resolve metadata for an asset id.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid asset: id {0} not found")]
    NotFound(AssetId),

    #[error("invalid asset: id {id}: {source}")]
    InvalidMetadata {
        id: AssetId,
        #[source]
        source: MetadataError,
    },

    #[error("invalid asset: id {id}: {source}")]
    Source {
        id: AssetId,
        #[source]
        source: SourceError,
    },
}

impl RegistryError {
    /// The asset id whose resolution failed.
    pub fn asset_id(&self) -> AssetId {
        match self {
            Self::NotFound(id) => *id,
            Self::InvalidMetadata { id, .. } | Self::Source { id, .. } => *id,
        }
    }
}
