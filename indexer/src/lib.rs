//! Algorand indexer access.
//!
//! [`IndexerClient`] is the production [`AssetSource`](algo_registry::AssetSource):
//! it looks asset parameters up with `GET /v2/assets/{id}` and hands the raw
//! record to the registry. Requests are blocking and never retried; a failed
//! lookup surfaces as a resolution failure for that asset.

pub mod client;
pub mod config;
pub mod error;

pub use client::IndexerClient;
pub use config::IndexerConfig;
pub use error::IndexerError;
