//! Asset identifiers.
//!
//! Algorand identifies every asset by an unsigned 64-bit index. Index 0 is
//! reserved for the native currency, ALGO.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier of an on-chain asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(u64);

/// The native currency.
pub const ASSET_ID_ALGO: AssetId = AssetId(0);

impl AssetId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Whether this id refers to the native currency.
    pub fn is_native(&self) -> bool {
        self.0 == ASSET_ID_ALGO.0
    }
}

impl From<u64> for AssetId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl TryFrom<i64> for AssetId {
    type Error = i64;

    /// Fails with the rejected value when it is negative.
    fn try_from(id: i64) -> Result<Self, Self::Error> {
        u64::try_from(id).map(Self).map_err(|_| id)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
