//! Common types used across the application

use serde::{Deserialize, Serialize};

/// The native coin's asset id (ALGO)
pub const NATIVE_ASSET_ID: u64 = 0;

/// Decimal places of the native coin
pub const NATIVE_DECIMALS: u8 = 6;

/// An LP token held by the wallet under analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpToken {
    /// Ticker / unit name, e.g. "TMPOOL2"
    pub ticker: String,
    /// Pool display name, conventionally "<protocol> <ASSET1>-<ASSET2>"
    pub name: String,
    /// Decimal units of the LP token owned by the wallet
    pub held_amount: f64,
    /// On-chain asset id of the LP token itself
    pub asset_id: u64,
}

/// Resolved underlying pair of a liquidity pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolIdentity {
    pub asset1_id: Option<u64>,
    pub asset2_id: Option<u64>,
    /// Parsed from the LP display name; may be wrong when the name
    /// omits the split character
    pub asset1_ticker: String,
    pub asset2_ticker: String,
    /// Address custodying the pool's reserves, when known
    pub pool_account: Option<String>,
}

/// Live pool state, in decimal units. Never cached beyond a single
/// valuation - reserves change every block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolState {
    pub total_lp_supply: f64,
    pub reserve1: f64,
    pub reserve2: f64,
}

impl PoolState {
    /// Holder's proportional share of the pool, valid only while
    /// `total_lp_supply > 0`.
    pub fn share_of(&self, held_amount: f64) -> Option<f64> {
        if self.total_lp_supply > 0.0 {
            Some(held_amount / self.total_lp_supply)
        } else {
            None
        }
    }
}

/// One leg of a decomposed LP position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegBreakdown {
    pub ticker: String,
    /// Decimal units attributable to the holder
    pub amount: f64,
    pub usd_value: f64,
}

/// Decomposition of an LP holding into its two constituent assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpBreakdown {
    pub lp_ticker: String,
    pub lp_amount: f64,
    pub asset1: LegBreakdown,
    pub asset2: LegBreakdown,
    /// Always the exact sum of the two leg USD values
    pub total_usd: f64,
}

impl LpBreakdown {
    /// Build a breakdown; `total_usd` is constructed as the sum of the
    /// legs and never computed independently.
    pub fn new(lp_ticker: &str, lp_amount: f64, asset1: LegBreakdown, asset2: LegBreakdown) -> Self {
        let total_usd = asset1.usd_value + asset2.usd_value;
        Self {
            lp_ticker: lp_ticker.to_string(),
            lp_amount,
            asset1,
            asset2,
            total_usd,
        }
    }
}

/// On-chain asset metadata as returned by the indexer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub creator: String,
    pub decimals: u8,
    pub unit_name: String,
    pub name: String,
}

/// One asset position held by an account
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetHolding {
    pub asset_id: u64,
    /// Raw base units, not decimal-adjusted
    pub balance: u64,
}
