use async_trait::async_trait;

use crate::shared::errors::ChainError;
use crate::shared::types::{AssetHolding, AssetMetadata};

/// Trait for on-chain metadata lookups
/// This provides a unified interface over indexer implementations
#[async_trait]
pub trait ChainIndexer: Send + Sync {
    /// Fetch an asset's creator, decimals and naming metadata
    async fn asset_metadata(&self, asset_id: u64) -> Result<AssetMetadata, ChainError>;

    /// List the assets held by an account, with raw balances
    async fn account_assets(&self, address: &str) -> Result<Vec<AssetHolding>, ChainError>;
}
