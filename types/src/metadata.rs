//! Resolved asset metadata.

use serde::{Deserialize, Serialize};

/// Highest number of decimals an Algorand Standard Asset may declare.
pub const MAX_DECIMALS: u8 = 19;

/// Display metadata of an asset, as resolved from an indexer or preloaded.
///
/// The unit symbol is stored exactly as published on chain; consumers that
/// need a printable ticker strip non-ASCII characters themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub display_name: String,
    pub unit_symbol: String,
    pub decimals: u8,
}

impl AssetMetadata {
    pub fn new(
        display_name: impl Into<String>,
        unit_symbol: impl Into<String>,
        decimals: u8,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            unit_symbol: unit_symbol.into(),
            decimals,
        }
    }

    /// Metadata of the native currency.
    pub fn algorand() -> Self {
        Self::new("Algorand", "ALGO", 6)
    }
}
