//! Live pool state retrieval

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::amm_client::AmmClient;
use super::pool_info_reader::PoolInfoReader;
use crate::domain::valuation::amm_math::base_to_decimal;
use crate::infrastructure::chain::ChainIndexer;
use crate::shared::errors::{ChainError, PoolStateError};
use crate::shared::types::{PoolState, NATIVE_ASSET_ID, NATIVE_DECIMALS};

/// Fetches total LP supply and per-asset reserves for a resolved pool.
///
/// The slowest, most failure-prone step of a valuation: every call is
/// timeout-bounded so one hanging pool lookup cannot stall the whole
/// wallet scan.
pub struct PoolStateFetcher {
    amm: Arc<dyn AmmClient>,
    chain: Arc<dyn ChainIndexer>,
    reader: Box<dyn PoolInfoReader>,
    call_timeout: Duration,
}

impl PoolStateFetcher {
    pub fn new(
        amm: Arc<dyn AmmClient>,
        chain: Arc<dyn ChainIndexer>,
        reader: Box<dyn PoolInfoReader>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            amm,
            chain,
            reader,
            call_timeout,
        }
    }

    /// Fetch live state for the pool backing `lp_asset_id`.
    ///
    /// Returned amounts are decimal units; raw integer amounts from the
    /// pool object are scaled by each asset's on-chain decimals.
    pub async fn fetch_pool_state(
        &self,
        pool_account: Option<&str>,
        lp_asset_id: u64,
        asset1_id: u64,
        asset2_id: u64,
    ) -> Result<PoolState, PoolStateError> {
        debug!(
            "fetching pool state for LP {} (pair {} / {}, pool account {:?})",
            lp_asset_id, asset1_id, asset2_id, pool_account
        );

        let info = tokio::time::timeout(
            self.call_timeout,
            self.amm.fetch_pool(asset1_id, asset2_id),
        )
        .await
        .map_err(|_| PoolStateError::Timeout)??
        .ok_or(PoolStateError::PoolNotFound(asset1_id, asset2_id))?;

        let issued_raw = self
            .reader
            .issued_lp_tokens(&info)
            .ok_or_else(|| PoolStateError::MalformedResponse("no issued LP supply field".to_string()))?;
        let reserve1_raw = self
            .reader
            .asset1_reserves(&info)
            .ok_or_else(|| PoolStateError::MalformedResponse("no asset-1 reserves field".to_string()))?;
        let reserve2_raw = self
            .reader
            .asset2_reserves(&info)
            .ok_or_else(|| PoolStateError::MalformedResponse("no asset-2 reserves field".to_string()))?;

        let lp_decimals = self.decimals_of(lp_asset_id).await?;
        let decimals1 = self.decimals_of(asset1_id).await?;
        let decimals2 = self.decimals_of(asset2_id).await?;

        Ok(PoolState {
            total_lp_supply: base_to_decimal(issued_raw, lp_decimals),
            reserve1: base_to_decimal(reserve1_raw, decimals1),
            reserve2: base_to_decimal(reserve2_raw, decimals2),
        })
    }

    /// The native coin has fixed decimals and no on-chain asset record.
    async fn decimals_of(&self, asset_id: u64) -> Result<u8, PoolStateError> {
        if asset_id == NATIVE_ASSET_ID {
            return Ok(NATIVE_DECIMALS);
        }
        let metadata = tokio::time::timeout(self.call_timeout, self.chain.asset_metadata(asset_id))
            .await
            .map_err(|_| PoolStateError::Timeout)?
            .map_err(|e| match e {
                ChainError::Timeout => PoolStateError::Timeout,
                other => PoolStateError::Network(other.to_string()),
            })?;
        Ok(metadata.decimals)
    }
}
