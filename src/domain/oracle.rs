//! Price oracle seam

/// USD price source for a ticker / asset id.
///
/// External collaborator: retries and caching live behind this trait,
/// not in the valuation core. Implementations must tolerate unknown
/// assets by returning `None`.
pub trait PriceOracle: Send + Sync {
    fn price_usd(&self, ticker: &str, asset_id: Option<u64>) -> Option<f64>;
}

/// Fixed price table, useful for tests and the one-shot binary
pub struct StaticPriceOracle {
    prices: std::collections::HashMap<String, f64>,
}

impl StaticPriceOracle {
    pub fn new(prices: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            prices: prices
                .into_iter()
                .map(|(t, p)| (t.to_ascii_uppercase(), p))
                .collect(),
        }
    }
}

impl PriceOracle for StaticPriceOracle {
    fn price_usd(&self, ticker: &str, _asset_id: Option<u64>) -> Option<f64> {
        self.prices.get(&ticker.to_ascii_uppercase()).copied()
    }
}
