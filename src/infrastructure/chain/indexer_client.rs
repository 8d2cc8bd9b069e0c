//! Indexer REST client for asset metadata and account holdings

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::traits::ChainIndexer;
use crate::shared::errors::ChainError;
use crate::shared::types::{AssetHolding, AssetMetadata};

/// `/v2/assets/{id}` response wrapper
#[derive(Debug, Deserialize)]
struct AssetResponse {
    asset: AssetBody,
}

#[derive(Debug, Deserialize)]
struct AssetBody {
    params: AssetParams,
}

#[derive(Debug, Deserialize)]
struct AssetParams {
    creator: String,
    decimals: u8,
    #[serde(rename = "unit-name", default)]
    unit_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// `/v2/accounts/{address}` response wrapper
#[derive(Debug, Deserialize)]
struct AccountResponse {
    account: AccountBody,
}

#[derive(Debug, Deserialize)]
struct AccountBody {
    #[serde(default)]
    assets: Vec<AccountAsset>,
}

#[derive(Debug, Deserialize)]
struct AccountAsset {
    #[serde(rename = "asset-id")]
    asset_id: u64,
    amount: u64,
}

/// HTTP client against an Algorand indexer endpoint
pub struct IndexerHttpClient {
    http_client: Client,
    base_url: String,
}

impl IndexerHttpClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            http_client,
            base_url,
        }
    }

    fn map_err(err: reqwest::Error) -> ChainError {
        if err.is_timeout() {
            ChainError::Timeout
        } else {
            ChainError::Http(err.to_string())
        }
    }
}

#[async_trait]
impl ChainIndexer for IndexerHttpClient {
    async fn asset_metadata(&self, asset_id: u64) -> Result<AssetMetadata, ChainError> {
        let url = format!("{}/v2/assets/{}", self.base_url, asset_id);
        debug!("fetching asset metadata from {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(Self::map_err)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ChainError::AssetNotFound(asset_id));
        }
        if !response.status().is_success() {
            return Err(ChainError::Http(format!(
                "indexer returned status {}",
                response.status()
            )));
        }

        let body: AssetResponse = response
            .json()
            .await
            .map_err(|e| ChainError::MalformedResponse(e.to_string()))?;

        Ok(AssetMetadata {
            creator: body.asset.params.creator,
            decimals: body.asset.params.decimals,
            unit_name: body.asset.params.unit_name.unwrap_or_default(),
            name: body.asset.params.name.unwrap_or_default(),
        })
    }

    async fn account_assets(&self, address: &str) -> Result<Vec<AssetHolding>, ChainError> {
        let url = format!("{}/v2/accounts/{}", self.base_url, address);
        debug!("fetching account holdings from {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(Self::map_err)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ChainError::AccountNotFound(address.to_string()));
        }
        if !response.status().is_success() {
            return Err(ChainError::Http(format!(
                "indexer returned status {}",
                response.status()
            )));
        }

        let body: AccountResponse = response
            .json()
            .await
            .map_err(|e| ChainError::MalformedResponse(e.to_string()))?;

        Ok(body
            .account
            .assets
            .into_iter()
            .map(|a| AssetHolding {
                asset_id: a.asset_id,
                balance: a.amount,
            })
            .collect())
    }
}
