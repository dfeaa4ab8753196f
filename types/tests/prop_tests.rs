use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use proptest::prelude::*;

use algo_types::{b64_decode_ascii, AssetId, MetadataError, RawAssetRecord, MAX_DECIMALS};

proptest! {
    /// Signed ids convert exactly when non-negative.
    #[test]
    fn signed_id_conversion(id in any::<i64>()) {
        match AssetId::try_from(id) {
            Ok(asset_id) => prop_assert_eq!(asset_id.as_u64() as i64, id),
            Err(rejected) => {
                prop_assert!(id < 0);
                prop_assert_eq!(rejected, id);
            }
        }
    }

    /// Decimals are accepted exactly in 0..=MAX_DECIMALS.
    #[test]
    fn decimals_range(decimals in any::<i64>()) {
        let result = RawAssetRecord::direct("Name", "UNIT", decimals).parse();
        if (0..=i64::from(MAX_DECIMALS)).contains(&decimals) {
            prop_assert_eq!(result.unwrap().decimals as i64, decimals);
        } else {
            prop_assert_eq!(result, Err(MetadataError::InvalidDecimals(decimals)));
        }
    }

    /// Decoding never yields non-ASCII text and preserves ASCII input.
    #[test]
    fn b64_decode_keeps_only_ascii(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let decoded = b64_decode_ascii(&STANDARD.encode(&bytes)).unwrap();
        prop_assert!(decoded.is_ascii());
        let expected: Vec<u8> = bytes.iter().copied().filter(u8::is_ascii).collect();
        prop_assert_eq!(decoded.as_bytes(), expected.as_slice());
    }
}
