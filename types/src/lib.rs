//! Fundamental types for Algorand asset accounting.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! asset identifiers, resolved asset metadata, and the raw metadata records
//! returned by indexers and account queries.

pub mod asset_id;
pub mod encoding;
pub mod error;
pub mod metadata;
pub mod record;

pub use asset_id::{AssetId, ASSET_ID_ALGO};
pub use encoding::b64_decode_ascii;
pub use error::MetadataError;
pub use metadata::{AssetMetadata, MAX_DECIMALS};
pub use record::RawAssetRecord;
