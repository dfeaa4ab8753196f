//! Raw asset records as published by indexers and account queries.
//!
//! The indexer returns asset parameters in one of two shapes:
//! - direct: `name` and `unit-name` as plain strings;
//! - encoded: `name-b64` and `unit-name-b64` as base64 byte strings, used when
//!   the on-chain bytes are not valid UTF-8.
//!
//! Both shapes carry `decimals`. Account holdings additionally carry `asset-id`.

use serde::{Deserialize, Serialize};

use crate::encoding::b64_decode_ascii;
use crate::{AssetId, AssetMetadata, MetadataError, MAX_DECIMALS};

/// Loosely-typed asset record. Every field is optional; [`RawAssetRecord::parse`]
/// decides whether the record is usable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAssetRecord {
    #[serde(rename = "asset-id", default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<AssetId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "unit-name", default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,

    #[serde(rename = "name-b64", default, skip_serializing_if = "Option::is_none")]
    pub name_b64: Option<String>,

    #[serde(rename = "unit-name-b64", default, skip_serializing_if = "Option::is_none")]
    pub unit_name_b64: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<i64>,
}

impl RawAssetRecord {
    /// Build a direct-shape record.
    pub fn direct(name: impl Into<String>, unit_name: impl Into<String>, decimals: i64) -> Self {
        Self {
            name: Some(name.into()),
            unit_name: Some(unit_name.into()),
            decimals: Some(decimals),
            ..Self::default()
        }
    }

    /// Build an encoded-shape record.
    pub fn encoded(
        name_b64: impl Into<String>,
        unit_name_b64: impl Into<String>,
        decimals: i64,
    ) -> Self {
        Self {
            name_b64: Some(name_b64.into()),
            unit_name_b64: Some(unit_name_b64.into()),
            decimals: Some(decimals),
            ..Self::default()
        }
    }

    pub fn with_asset_id(mut self, id: AssetId) -> Self {
        self.asset_id = Some(id);
        self
    }

    /// Whether the record carries a plain `unit-name` field.
    pub fn has_direct_unit_name(&self) -> bool {
        self.unit_name.is_some()
    }

    /// Interpret the record under the direct shape, falling back to the encoded one.
    pub fn parse(&self) -> Result<AssetMetadata, MetadataError> {
        let (display_name, unit_symbol) = match (
            &self.name,
            &self.unit_name,
            &self.name_b64,
            &self.unit_name_b64,
        ) {
            (Some(name), Some(unit_name), _, _) => (name.clone(), unit_name.clone()),
            (_, _, Some(name_b64), Some(unit_name_b64)) => {
                (b64_decode_ascii(name_b64)?, b64_decode_ascii(unit_name_b64)?)
            }
            _ => return Err(MetadataError::MissingNames),
        };

        Ok(AssetMetadata {
            display_name,
            unit_symbol,
            decimals: self.parse_decimals()?,
        })
    }

    /// Interpret the record under the direct shape only.
    pub fn parse_direct(&self) -> Result<AssetMetadata, MetadataError> {
        let unit_symbol = self.unit_name.clone().ok_or(MetadataError::MissingField("unit-name"))?;
        let display_name = self.name.clone().ok_or(MetadataError::MissingField("name"))?;
        Ok(AssetMetadata {
            display_name,
            unit_symbol,
            decimals: self.parse_decimals()?,
        })
    }

    fn parse_decimals(&self) -> Result<u8, MetadataError> {
        let decimals = self.decimals.ok_or(MetadataError::MissingField("decimals"))?;
        match u8::try_from(decimals) {
            Ok(d) if d <= MAX_DECIMALS => Ok(d),
            _ => Err(MetadataError::InvalidDecimals(decimals)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_direct_shape() {
        let record = RawAssetRecord::direct("USDC", "USDC", 6);
        assert_eq!(record.parse().unwrap(), AssetMetadata::new("USDC", "USDC", 6));
    }

    #[test]
    fn parses_encoded_shape() {
        // "Tinyman Pool ALGO-USDC" / "TM1POOL"
        let record = RawAssetRecord::encoded("VGlueW1hbiBQb29sIEFMR08tVVNEQw==", "VE0xUE9PTA==", 6);
        let meta = record.parse().unwrap();
        assert_eq!(meta.display_name, "Tinyman Pool ALGO-USDC");
        assert_eq!(meta.unit_symbol, "TM1POOL");
    }

    #[test]
    fn direct_shape_wins_over_encoded() {
        let record = RawAssetRecord {
            name_b64: Some("QQ==".into()),
            unit_name_b64: Some("QQ==".into()),
            ..RawAssetRecord::direct("Plain", "PLN", 2)
        };
        assert_eq!(record.parse().unwrap().unit_symbol, "PLN");
    }

    #[test]
    fn incomplete_shapes_are_rejected() {
        let record = RawAssetRecord {
            name: Some("only a name".into()),
            unit_name_b64: Some("QQ==".into()),
            decimals: Some(0),
            ..RawAssetRecord::default()
        };
        assert_eq!(record.parse(), Err(MetadataError::MissingNames));
    }

    #[test]
    fn missing_or_invalid_decimals_are_rejected() {
        let mut record = RawAssetRecord::direct("X", "X", 0);
        record.decimals = None;
        assert_eq!(record.parse(), Err(MetadataError::MissingField("decimals")));

        record.decimals = Some(-1);
        assert_eq!(record.parse(), Err(MetadataError::InvalidDecimals(-1)));

        record.decimals = Some(20);
        assert_eq!(record.parse(), Err(MetadataError::InvalidDecimals(20)));
    }

    #[test]
    fn deserializes_indexer_params() {
        let json = r#"{
            "creator": "ABC",
            "decimals": 6,
            "name": "USDC",
            "name-b64": "VVNEQw==",
            "total": 18446744073709551615,
            "unit-name": "USDC",
            "unit-name-b64": "VVNEQw=="
        }"#;
        let record: RawAssetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.asset_id, None);
        assert_eq!(record.parse().unwrap(), AssetMetadata::new("USDC", "USDC", 6));
    }

    #[test]
    fn deserializes_account_holding() {
        let json = r#"{
            "asset-id": 31566704,
            "amount": 5,
            "name": "USDC",
            "unit-name": "USDC",
            "decimals": 6
        }"#;
        let record: RawAssetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.asset_id, Some(AssetId::new(31566704)));
        assert!(record.has_direct_unit_name());
    }
}
