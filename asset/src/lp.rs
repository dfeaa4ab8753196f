//! Liquidity-pool token recognition.
//!
//! DEX protocols mint LP tokens whose unit symbol identifies the protocol and
//! whose display name spells out the pooled pair, e.g. unit `TM1POOL`, name
//! `Tinyman Pool ALGO-USDC`. Several unit symbols (protocol versions) may share
//! one family tag and naming pattern.
//!
//! AlgoFi (`AF-POOL`) names are unreliable for some pools, so a table of known
//! pool ids takes precedence over the name for that family.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use algo_types::AssetId;
use regex::Regex;
use serde::Serialize;

use crate::AssetValue;

const AF_POOL: &str = "AF-POOL";

/// (unit symbol, display name pattern, family tag)
const LP_TOKEN_NAMING: &[(&str, &str, &str)] = &[
    ("TM1POOL", r"^Tinyman Pool (?P<asset1>\w*)-(?P<asset2>\w*)$", "TM"),
    ("TMPOOL11", r"^TinymanPool1.1 (?P<asset1>\w*)-(?P<asset2>\w*)$", "TM"),
    ("TMPOOL2", r"^TinymanPool2.0 (?P<asset1>\w*)-(?P<asset2>\w*)$", "TM"),
    ("PLP", r"^(?P<asset1>\w*)\/(?P<asset2>\w*) PACT LP Token$", "P"),
    ("SIPLP", r"^(?P<asset1>\w*)\/(?P<asset2>\w*) \[SI\] PACT LP TKN$", "P"),
    (AF_POOL, r"^AF-POOL-(?P<asset1>\w*)-(?P<asset2>\w*)-\d+\.\d+BP$", "AF"),
    ("HMBL1LT", r"^HUMBLE LP - (?P<asset1>\w*)\/(?P<asset2>\w*)$", "HMB"),
    ("HMBL2LT", r"^HUMBLE LP - (?P<asset1>\w*)\/(?P<asset2>\w*)$", "HMB"),
];

/// AlgoFi pools whose pair is known by id.
const AF_POOL_PAIRS: &[(u64, &str, &str)] = &[
    (658337286, "USDC", "STBL"),
    (659677515, "USDT", "STBL"),
    (659678778, "USDT", "USDC"),
    (841171328, "STBL2", "USDC"),
    (855717054, "STBL2", "ALGO"),
    (870151164, "STBL2", "goBTC"),
    (870150187, "STBL2", "goETH"),
    (900924035, "BANK", "STBL2"),
    (919950894, "ALGO", "USDC"),
    (962367827, "ALGO", "BANK"),
];

/// Naming convention of one LP unit symbol.
#[derive(Debug)]
pub struct LpNaming {
    pub family: &'static str,
    pub pattern: Regex,
}

static LP_TOKENS: LazyLock<HashMap<&'static str, LpNaming>> = LazyLock::new(|| {
    LP_TOKEN_NAMING
        .iter()
        .map(|&(unit_symbol, pattern, family)| {
            let pattern = Regex::new(pattern).expect("LP naming patterns are valid");
            (unit_symbol, LpNaming { family, pattern })
        })
        .collect()
});

/// The two assets pooled by an LP token.
///
/// Displays as `LP_<family>_<asset1>_<asset2>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LpPair {
    pub family: &'static str,
    pub asset1: String,
    pub asset2: String,
}

impl fmt::Display for LpPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LP_{}_{}_{}", self.family, self.asset1, self.asset2)
    }
}

/// Naming convention registered for `unit_symbol`.
pub fn lp_naming(unit_symbol: &str) -> Option<&'static LpNaming> {
    LP_TOKENS.get(unit_symbol)
}

/// Pair of a known AlgoFi pool.
pub fn af_pool_pair(id: AssetId) -> Option<(&'static str, &'static str)> {
    AF_POOL_PAIRS
        .iter()
        .find(|(pool_id, _, _)| *pool_id == id.as_u64())
        .map(|&(_, asset1, asset2)| (asset1, asset2))
}

pub fn is_lp_token(value: &AssetValue) -> bool {
    lp_naming(value.unit_symbol()).is_some()
}

/// Canonical pair name of an LP token.
///
/// `None` both for tokens that are not LP tokens and for LP tokens whose
/// name does not follow their protocol's convention; use [`is_lp_token`] to
/// tell them apart.
pub fn lp_pair(value: &AssetValue) -> Option<String> {
    decode_lp_pair(value).map(|pair| pair.to_string())
}

pub fn decode_lp_pair(value: &AssetValue) -> Option<LpPair> {
    decode(value.id(), value.unit_symbol(), value.display_name())
}

fn decode(id: AssetId, unit_symbol: &str, display_name: &str) -> Option<LpPair> {
    let naming = lp_naming(unit_symbol)?;

    if unit_symbol == AF_POOL {
        if let Some((asset1, asset2)) = af_pool_pair(id) {
            return Some(LpPair {
                family: naming.family,
                asset1: asset1.to_string(),
                asset2: asset2.to_string(),
            });
        }
    }

    let captures = naming.pattern.captures(display_name)?;
    Some(LpPair {
        family: naming.family,
        asset1: captures.name("asset1")?.as_str().to_string(),
        asset2: captures.name("asset2")?.as_str().to_string(),
    })
}
