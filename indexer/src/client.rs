//! Blocking HTTP client for the indexer's asset endpoint.

use algo_registry::{AssetSource, SourceError};
use algo_types::{AssetId, RawAssetRecord};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::{IndexerConfig, IndexerError};

const API_TOKEN_HEADER: &str = "x-indexer-api-token";

/// Client for `GET {base_url}/v2/assets/{id}`.
pub struct IndexerClient {
    http_client: Client,
    base_url: String,
}

/// Raw JSON response of the asset lookup endpoint.
///
/// `{"asset": {"index": 31566704, "params": {...}}, "current-round": ...}`
#[derive(Debug, Deserialize)]
struct AssetResponse {
    asset: IndexerAsset,
}

#[derive(Debug, Deserialize)]
struct IndexerAsset {
    index: AssetId,
    params: RawAssetRecord,
}

impl AssetResponse {
    fn into_record(self) -> RawAssetRecord {
        self.asset.params.with_asset_id(self.asset.index)
    }
}

impl IndexerClient {
    pub fn new(config: &IndexerConfig) -> Result<Self, IndexerError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| IndexerError::Config(format!("invalid api_key: {e}")))?;
            headers.insert(API_TOKEN_HEADER, value);
        }

        let http_client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| IndexerError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn asset_url(&self, id: AssetId) -> String {
        format!("{}/v2/assets/{}", self.base_url, id)
    }
}

impl AssetSource for IndexerClient {
    fn get_asset(&self, id: AssetId) -> Result<Option<RawAssetRecord>, SourceError> {
        let url = self.asset_url(id);
        debug!(%url, "querying indexer for asset");

        let response = self.http_client.get(&url).send().map_err(|e| {
            if e.is_timeout() {
                SourceError::Unreachable(format!("request timed out: {e}"))
            } else if e.is_connect() {
                SourceError::Unreachable(format!("connection failed: {e}"))
            } else {
                SourceError::RequestFailed(e.to_string())
            }
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(SourceError::RequestFailed(format!(
                "HTTP status {}",
                response.status()
            )));
        }

        let body: AssetResponse = response.json().map_err(|e| {
            SourceError::InvalidResponse(format!("failed to parse asset response: {e}"))
        })?;
        Ok(Some(body.into_record()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_from_default_config() {
        let client = IndexerClient::new(&IndexerConfig::default()).unwrap();
        assert_eq!(
            client.asset_url(AssetId::new(31566704)),
            "https://mainnet-idx.algonode.cloud/v2/assets/31566704"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = IndexerConfig {
            base_url: "http://localhost:8980/".to_string(),
            ..IndexerConfig::default()
        };
        let client = IndexerClient::new(&config).unwrap();
        assert_eq!(client.asset_url(AssetId::new(1)), "http://localhost:8980/v2/assets/1");
    }

    #[test]
    fn invalid_api_key_is_rejected() {
        let config = IndexerConfig {
            api_key: Some("bad\nkey".to_string()),
            ..IndexerConfig::default()
        };
        assert!(matches!(IndexerClient::new(&config), Err(IndexerError::Config(_))));
    }

    #[test]
    fn asset_response_deserialization() {
        let json = r#"{
            "asset": {
                "created-at-round": 8874561,
                "deleted": false,
                "index": 552647097,
                "params": {
                    "creator": "ABC",
                    "decimals": 6,
                    "name-b64": "VGlueW1hbiBQb29sIEFMR08tVVNEQw==",
                    "total": 18446744073709551615,
                    "unit-name-b64": "VE0xUE9PTA=="
                }
            },
            "current-round": 40000000
        }"#;
        let resp: AssetResponse = serde_json::from_str(json).unwrap();
        let record = resp.into_record();
        assert_eq!(record.asset_id, Some(AssetId::new(552647097)));
        assert_eq!(record.parse().unwrap().unit_symbol, "TM1POOL");
    }

    #[test]
    fn unreachable_indexer_is_a_source_error() {
        let config = IndexerConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 2,
            connect_timeout_secs: 1,
            ..IndexerConfig::default()
        };
        let client = IndexerClient::new(&config).unwrap();
        assert!(client.get_asset(AssetId::new(1)).is_err());
    }
}
