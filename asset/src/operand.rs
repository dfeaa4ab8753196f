//! Right-hand operands of asset arithmetic.

use crate::AssetValue;

/// Operand of `add` / `subtract`: either raw base units or a value of the same asset.
///
/// Raw units are signed so that callers holding signed amounts get an
/// `InvalidArgument` error instead of a silent cast.
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a> {
    Units(i128),
    Value(&'a AssetValue),
}

impl From<i32> for Operand<'_> {
    fn from(units: i32) -> Self {
        Self::Units(units.into())
    }
}

impl From<i64> for Operand<'_> {
    fn from(units: i64) -> Self {
        Self::Units(units.into())
    }
}

impl From<u64> for Operand<'_> {
    fn from(units: u64) -> Self {
        Self::Units(units.into())
    }
}

impl<'a> From<&'a AssetValue> for Operand<'a> {
    fn from(value: &'a AssetValue) -> Self {
        Self::Value(value)
    }
}

/// Factor of `multiply`: an integer or a float.
///
/// Integers are signed and wide enough for any `u64` factor; negative ones
/// are rejected by `multiply`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    Int(i128),
    Float(f64),
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Int(n.into())
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Self::Int(n.into())
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}
