//! Asset values for Algorand accounting.
//!
//! An [`AssetValue`] pairs an asset id with an amount in integer base units.
//! Metadata (decimals, unit symbol, display name) is resolved through an
//! [`AssetRegistry`](algo_registry::AssetRegistry) once, at construction.
//!
//! Invariants enforced by every constructor and mutator:
//! - the base amount is never negative; operations that would make it so fail
//! - binary operations require both operands to carry the same asset id
//! - amounts never wrap; overflowing u64 base units is an error
//!
//! The [`lp`] module recognises liquidity-pool tokens of the supported DEX
//! protocols and recovers the pair of assets a pool token represents.

pub mod error;
pub mod lp;
pub mod operand;
pub mod value;

pub use error::AssetError;
pub use lp::{is_lp_token, lp_pair, LpPair};
pub use operand::{Operand, Scalar};
pub use value::AssetValue;
