//! Application services and use cases

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::domain::classify::{auto_classify, ComponentClassifier, ComponentRecord, SovereigntyCategory};
use crate::domain::oracle::PriceOracle;
use crate::domain::resolver::PoolResolver;
use crate::domain::valuation::LpValuationEngine;
use crate::infrastructure::amm::{reader_for_shape, AmmClient, PoolStateFetcher};
use crate::infrastructure::chain::ChainIndexer;
use crate::shared::config::EngineConfig;
use crate::shared::errors::AppError;
use crate::shared::types::LpToken;

/// Outcome of analyzing one LP position.
///
/// A position that cannot be valued is still reported with its amount
/// data - it contributes $0 to the portfolio, it is never dropped and
/// never an error to the wallet-scan caller.
#[derive(Debug, Clone, PartialEq)]
pub enum LpPositionReport {
    Valued {
        breakdown: crate::shared::types::LpBreakdown,
        components: Vec<(SovereigntyCategory, ComponentRecord)>,
    },
    Unvalued {
        ticker: String,
        amount: f64,
    },
}

/// Application service tying valuation and classification together
pub struct LpAnalysisService {
    engine: LpValuationEngine,
}

impl LpAnalysisService {
    pub fn new(engine: LpValuationEngine) -> Self {
        Self { engine }
    }

    /// Wire up the service from configuration and live collaborators
    pub fn from_config(
        config: &EngineConfig,
        chain: Arc<dyn ChainIndexer>,
        amm: Arc<dyn AmmClient>,
    ) -> Result<Self, AppError> {
        let call_timeout = Duration::from_millis(config.request_timeout_ms);
        let resolver = PoolResolver::new(
            chain.clone(),
            Duration::from_secs(config.pool_cache_ttl_secs),
        );
        let fetcher = PoolStateFetcher::new(
            amm,
            chain,
            reader_for_shape(&config.pool_info_shape)?,
            call_timeout,
        );
        Ok(Self::new(LpValuationEngine::new(resolver, fetcher)))
    }

    /// Value and classify one LP position, end to end.
    pub async fn analyze_position(&self, lp: &LpToken, oracle: &dyn PriceOracle) -> LpPositionReport {
        match self.engine.estimate_lp_value(lp, oracle).await {
            Some(breakdown) => {
                let components = ComponentClassifier::classify_components(&breakdown, auto_classify);
                info!(
                    "valued LP {} at ${:.2} ({} + {})",
                    lp.ticker, breakdown.total_usd, breakdown.asset1.ticker, breakdown.asset2.ticker
                );
                LpPositionReport::Valued {
                    breakdown,
                    components,
                }
            }
            None => {
                info!(
                    "LP {} could not be valued, reporting amount only",
                    lp.ticker
                );
                LpPositionReport::Unvalued {
                    ticker: lp.ticker.clone(),
                    amount: lp.held_amount,
                }
            }
        }
    }
}
