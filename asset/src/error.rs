//! Asset value errors.

use algo_registry::RegistryError;
use algo_types::AssetId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid asset: id {id}")]
    InvalidAsset {
        id: AssetId,
        #[source]
        source: RegistryError,
    },

    #[error("cannot combine different assets: {left} and {right}")]
    AssetMismatch { left: AssetId, right: AssetId },

    #[error("asset amount cannot be negative: {available} - {requested}")]
    NegativeResult { available: u64, requested: u64 },

    #[error("asset amount overflows base units")]
    Overflow,
}
