//! AMM analytics API client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::shared::errors::PoolStateError;

/// Trait for AMM pool lookups
#[async_trait]
pub trait AmmClient: Send + Sync {
    /// Fetch the raw pool object for an asset pair.
    ///
    /// `Ok(None)` means no pool exists for the pair; transport and
    /// decoding problems are surfaced as typed errors, never collapsed
    /// into the not-found case.
    async fn fetch_pool(&self, asset1_id: u64, asset2_id: u64) -> Result<Option<Value>, PoolStateError>;
}

/// Paginated pool listing response
#[derive(Debug, Deserialize)]
struct PoolListResponse {
    #[serde(default)]
    results: Vec<Value>,
}

/// HTTP client against the AMM analytics API
pub struct HttpAmmClient {
    http_client: Client,
    base_url: String,
}

impl HttpAmmClient {
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

    fn map_err(err: reqwest::Error) -> PoolStateError {
        if err.is_timeout() {
            PoolStateError::Timeout
        } else {
            PoolStateError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl AmmClient for HttpAmmClient {
    async fn fetch_pool(&self, asset1_id: u64, asset2_id: u64) -> Result<Option<Value>, PoolStateError> {
        let url = format!(
            "{}/pools/?asset_1={}&asset_2={}",
            self.base_url, asset1_id, asset2_id
        );
        debug!("fetching pool info from {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(Self::map_err)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(PoolStateError::Network(format!(
                "AMM API returned status {}",
                response.status()
            )));
        }

        let body: PoolListResponse = response
            .json()
            .await
            .map_err(|e| PoolStateError::MalformedResponse(e.to_string()))?;

        Ok(body.results.into_iter().next())
    }
}
