//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies are abstracted behind traits. This crate provides
//! test-friendly implementations that:
//! - Return programmed values
//! - Record how they were called
//! - Never touch the network
//!
//! Usage: swap the indexer client for a nullable in tests.

pub mod asset_source;

pub use asset_source::NullAssetSource;
