//! Best-effort USD valuation and decomposition of one LP holding

use tracing::{debug, warn};

use crate::domain::oracle::PriceOracle;
use crate::domain::resolver::{known_asset_id, parse_pair_tickers, PoolResolver};
use crate::domain::valuation::amm_math::{geometric_mean_lp_price, ZERO_VALUE_GUARD_USD};
use crate::infrastructure::amm::PoolStateFetcher;
use crate::shared::types::{LegBreakdown, LpBreakdown, LpToken, PoolIdentity};

/// Orchestrates resolution, live state fetching and pricing into an
/// `LpBreakdown`.
///
/// Valuation tiers, in order:
/// 1. live reserves - holder share of actual pool state,
/// 2. geometric-mean estimate from the two leg prices alone,
/// 3. `None` - the position cannot be valued.
///
/// A failed valuation never propagates as an error: the wallet scan must
/// survive any single position.
pub struct LpValuationEngine {
    resolver: PoolResolver,
    fetcher: PoolStateFetcher,
}

impl LpValuationEngine {
    pub fn new(resolver: PoolResolver, fetcher: PoolStateFetcher) -> Self {
        Self { resolver, fetcher }
    }

    /// Produce a breakdown of `lp` into its two constituent assets, or
    /// `None` when no tier can value it.
    pub async fn estimate_lp_value(&self, lp: &LpToken, oracle: &dyn PriceOracle) -> Option<LpBreakdown> {
        // Without a parseable pair name there is nothing to decompose.
        let (ticker1, ticker2) = parse_pair_tickers(&lp.name)?;

        let identity = match self.resolver.resolve_pool(lp.asset_id, &lp.name).await {
            Ok(identity) => identity,
            Err(e) => {
                warn!("pool resolution failed for {} ({}): {}", lp.ticker, lp.asset_id, e);
                PoolIdentity {
                    asset1_id: None,
                    asset2_id: None,
                    asset1_ticker: ticker1.clone(),
                    asset2_ticker: ticker2.clone(),
                    pool_account: None,
                }
            }
        };

        // The static table only fills ids the chain could not provide.
        let asset1_id = identity.asset1_id.or_else(|| known_asset_id(&ticker1));
        let asset2_id = identity.asset2_id.or_else(|| known_asset_id(&ticker2));

        let price1 = oracle.price_usd(&ticker1, asset1_id).unwrap_or(0.0);
        let price2 = oracle.price_usd(&ticker2, asset2_id).unwrap_or(0.0);

        // Primary tier: proportional share of live reserves.
        if let (Some(a1), Some(a2)) = (asset1_id, asset2_id) {
            match self
                .fetcher
                .fetch_pool_state(identity.pool_account.as_deref(), lp.asset_id, a1, a2)
                .await
            {
                Ok(state) => {
                    if let Some(share) = state.share_of(lp.held_amount) {
                        let potential_total_usd =
                            share * (state.reserve1 * price1 + state.reserve2 * price2);
                        if potential_total_usd > ZERO_VALUE_GUARD_USD {
                            let amount1 = share * state.reserve1;
                            let amount2 = share * state.reserve2;
                            return Some(LpBreakdown::new(
                                &lp.ticker,
                                lp.held_amount,
                                LegBreakdown {
                                    ticker: ticker1,
                                    amount: amount1,
                                    usd_value: amount1 * price1,
                                },
                                LegBreakdown {
                                    ticker: ticker2,
                                    amount: amount2,
                                    usd_value: amount2 * price2,
                                },
                            ));
                        }
                        // Likely an SDK integration bug rather than a real
                        // near-worthless position.
                        warn!(
                            "zero-value guard tripped for {}: live state priced at ${:.6}, \
                             falling back to geometric-mean estimate",
                            lp.ticker, potential_total_usd
                        );
                    }
                }
                Err(e) => {
                    debug!(
                        "pool state unavailable for {} ({} / {}): {}, falling back",
                        lp.ticker, a1, a2, e
                    );
                }
            }
        }

        self.estimate_from_prices(lp, &ticker1, &ticker2, price1, price2)
    }

    /// Fallback tier: value one LP unit as twice the geometric mean of
    /// the leg prices and split 50/50 by USD.
    fn estimate_from_prices(
        &self,
        lp: &LpToken,
        ticker1: &str,
        ticker2: &str,
        price1: f64,
        price2: f64,
    ) -> Option<LpBreakdown> {
        let unit_value = geometric_mean_lp_price(price1, price2)?;
        let total_usd = lp.held_amount * unit_value;
        let leg_usd = total_usd / 2.0;

        Some(LpBreakdown::new(
            &lp.ticker,
            lp.held_amount,
            LegBreakdown {
                ticker: ticker1.to_string(),
                amount: leg_usd / price1,
                usd_value: leg_usd,
            },
            LegBreakdown {
                ticker: ticker2.to_string(),
                amount: leg_usd / price2,
                usd_value: leg_usd,
            },
        ))
    }
}
