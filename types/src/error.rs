//! Errors raised while interpreting raw asset metadata.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetadataError {
    #[error("record has neither direct nor base64-encoded name fields")]
    MissingNames,

    #[error("record is missing field `{0}`")]
    MissingField(&'static str),

    #[error("invalid base64 in asset metadata: {0}")]
    InvalidBase64(String),

    #[error("invalid decimals {0}: must be between 0 and 19")]
    InvalidDecimals(i64),
}
