//! The asset value type.

use std::fmt;

use algo_registry::AssetRegistry;
use algo_types::{AssetId, AssetMetadata, ASSET_ID_ALGO};
use serde::Serialize;
use tracing::warn;

use crate::{lp, AssetError, LpPair, Operand, Scalar};

/// An amount of a single asset, held in integer base units.
///
/// Metadata is copied from the registry when the value is built and is not
/// re-resolved afterwards. Only the base amount changes, and only through the
/// arithmetic methods. Non-assigning methods return a fresh value; the
/// `*_assign` methods mutate in place and return `&mut self`.
#[derive(Clone, Debug, Serialize)]
pub struct AssetValue {
    id: AssetId,
    base_amount: u64,
    decimals: u8,
    unit_symbol: String,
    display_name: String,
}

impl AssetValue {
    /// Build a value, resolving metadata through `registry`.
    pub fn new(
        registry: &AssetRegistry,
        id: AssetId,
        base_amount: u64,
    ) -> Result<Self, AssetError> {
        let meta = registry.resolve(id).map_err(|source| {
            warn!(asset_id = %id, error = %source, "asset metadata resolution failed");
            AssetError::InvalidAsset { id, source }
        })?;
        Ok(Self::from_metadata(id, base_amount, &meta))
    }

    /// A zero amount of `id`.
    pub fn zero(registry: &AssetRegistry, id: AssetId) -> Result<Self, AssetError> {
        Self::new(registry, id, 0)
    }

    /// An amount of the native currency, in microalgos.
    pub fn algo(registry: &AssetRegistry, base_amount: u64) -> Result<Self, AssetError> {
        Self::new(registry, ASSET_ID_ALGO, base_amount)
    }

    /// Build a value from signed inputs, as found in loosely-typed records.
    ///
    /// Negative ids and amounts fail with `InvalidArgument` before the registry
    /// is consulted.
    pub fn from_signed(
        registry: &AssetRegistry,
        id: i64,
        base_amount: i128,
    ) -> Result<Self, AssetError> {
        let id = AssetId::try_from(id).map_err(|id| {
            AssetError::InvalidArgument(format!("asset id must not be negative, got {id}"))
        })?;
        let base_amount = non_negative_units(base_amount)?;
        Self::new(registry, id, base_amount)
    }

    fn from_metadata(id: AssetId, base_amount: u64, meta: &AssetMetadata) -> Self {
        Self {
            id,
            base_amount,
            decimals: meta.decimals,
            unit_symbol: meta.unit_symbol.chars().filter(char::is_ascii).collect(),
            display_name: meta.display_name.clone(),
        }
    }

    pub fn id(&self) -> AssetId {
        self.id
    }

    pub fn base_amount(&self) -> u64 {
        self.base_amount
    }

    /// The amount scaled by `10^decimals`.
    pub fn decimal_amount(&self) -> f64 {
        self.base_amount as f64 / 10f64.powi(i32::from(self.decimals))
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Ticker with non-ASCII characters removed.
    pub fn unit_symbol(&self) -> &str {
        &self.unit_symbol
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_zero(&self) -> bool {
        self.base_amount == 0
    }

    pub fn add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, AssetError> {
        let mut sum = self.clone();
        sum.add_assign(rhs)?;
        Ok(sum)
    }

    pub fn add_assign<'a>(&mut self, rhs: impl Into<Operand<'a>>) -> Result<&mut Self, AssetError> {
        let units = self.operand_units(rhs.into())?;
        self.base_amount = self.base_amount.checked_add(units).ok_or(AssetError::Overflow)?;
        Ok(self)
    }

    pub fn subtract<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, AssetError> {
        let mut difference = self.clone();
        difference.subtract_assign(rhs)?;
        Ok(difference)
    }

    pub fn subtract_assign<'a>(
        &mut self,
        rhs: impl Into<Operand<'a>>,
    ) -> Result<&mut Self, AssetError> {
        let units = self.operand_units(rhs.into())?;
        self.base_amount = self
            .base_amount
            .checked_sub(units)
            .ok_or(AssetError::NegativeResult {
                available: self.base_amount,
                requested: units,
            })?;
        Ok(self)
    }

    /// Scale the amount. Fractional base units are truncated.
    pub fn multiply(&self, factor: impl Into<Scalar>) -> Result<Self, AssetError> {
        let mut product = self.clone();
        product.multiply_assign(factor)?;
        Ok(product)
    }

    pub fn multiply_assign(&mut self, factor: impl Into<Scalar>) -> Result<&mut Self, AssetError> {
        self.base_amount = match factor.into() {
            Scalar::Int(n) => scale_by_int(self.base_amount, n)?,
            Scalar::Float(x) => scale_by_float(self.base_amount, x)?,
        };
        Ok(self)
    }

    /// Whether the unit symbol names a known LP token family.
    pub fn is_lp_token(&self) -> bool {
        lp::is_lp_token(self)
    }

    /// Canonical `LP_<family>_<asset1>_<asset2>` name, if decodable.
    pub fn lp_pair(&self) -> Option<String> {
        lp::lp_pair(self)
    }

    /// The pool's underlying pair, if decodable.
    pub fn lp_assets(&self) -> Option<LpPair> {
        lp::decode_lp_pair(self)
    }

    fn operand_units(&self, rhs: Operand<'_>) -> Result<u64, AssetError> {
        match rhs {
            Operand::Units(units) => non_negative_units(units),
            Operand::Value(other) if other.id != self.id => Err(AssetError::AssetMismatch {
                left: self.id,
                right: other.id,
            }),
            Operand::Value(other) => Ok(other.base_amount),
        }
    }
}

fn scale_by_int(amount: u64, n: i128) -> Result<u64, AssetError> {
    let n = u128::try_from(n).map_err(|_| {
        AssetError::InvalidArgument(format!("factor must not be negative, got {n}"))
    })?;
    let product = u128::from(amount).checked_mul(n).ok_or(AssetError::Overflow)?;
    u64::try_from(product).map_err(|_| AssetError::Overflow)
}

/// Exact `trunc(amount * x)`.
///
/// `x` is split into `mantissa * 2^exponent`; the product with a u64 amount
/// fits in u128 (at most 117 bits), so only the final shift truncates.
fn scale_by_float(amount: u64, x: f64) -> Result<u64, AssetError> {
    if !x.is_finite() || x < 0.0 {
        return Err(AssetError::InvalidArgument(format!(
            "factor must be a finite non-negative number, got {x}"
        )));
    }

    let bits = x.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };

    let product = u128::from(amount) * u128::from(mantissa);
    if product == 0 {
        return Ok(0);
    }
    let scaled = if exponent >= 0 {
        let shift = exponent.unsigned_abs();
        if shift >= product.leading_zeros() {
            return Err(AssetError::Overflow);
        }
        product << shift
    } else {
        product.checked_shr(exponent.unsigned_abs()).unwrap_or(0)
    };
    u64::try_from(scaled).map_err(|_| AssetError::Overflow)
}

fn non_negative_units(units: i128) -> Result<u64, AssetError> {
    if units < 0 {
        return Err(AssetError::InvalidArgument(format!(
            "amount must not be negative, got {units}"
        )));
    }
    u64::try_from(units).map_err(|_| AssetError::Overflow)
}

impl fmt::Display for AssetValue {
    /// The decimal amount with exactly `decimals` fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.decimals == 0 {
            return write!(f, "{}", self.base_amount);
        }
        let scale = 10u64.pow(u32::from(self.decimals));
        write!(
            f,
            "{}.{:0width$}",
            self.base_amount / scale,
            self.base_amount % scale,
            width = usize::from(self.decimals)
        )
    }
}
