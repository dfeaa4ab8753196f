//! Asset metadata registry.
//!
//! The registry is the single source of truth for asset display metadata. It is
//! seeded with the native currency, fills itself lazily from an [`AssetSource`]
//! the first time an unknown id is referenced, and can be bulk-seeded from
//! account holdings via [`AssetRegistry::preload`].
//!
//! A registry is an explicit object: share it through an `Arc` with every code
//! path that constructs asset values. Tests build their own isolated instance.

pub mod error;
pub mod registry;
pub mod source;

pub use error::{RegistryError, SourceError};
pub use registry::AssetRegistry;
pub use source::AssetSource;
