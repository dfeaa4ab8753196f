//! Decoding of base64-encoded on-chain byte strings.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::MetadataError;

/// Decode a base64 string and keep only its ASCII bytes.
///
/// On-chain asset names are arbitrary bytes; anything outside ASCII is dropped.
pub fn b64_decode_ascii(encoded: &str) -> Result<String, MetadataError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| MetadataError::InvalidBase64(e.to_string()))?;
    Ok(bytes
        .into_iter()
        .filter(u8::is_ascii)
        .map(char::from)
        .collect())
}
