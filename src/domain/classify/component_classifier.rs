//! Re-classification of decomposed LP legs

use crate::domain::classify::SovereigntyCategory;
use crate::shared::types::{LegBreakdown, LpBreakdown};
use serde::{Deserialize, Serialize};

/// A pseudo-holding produced from one LP leg.
///
/// Mergeable into category totals like a directly-held asset, while the
/// annotated name keeps it traceable to its source LP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// `"{ticker} (from {lp_ticker})"`
    pub name: String,
    pub ticker: String,
    pub amount: f64,
    pub usd_value: f64,
}

/// Turns an `LpBreakdown` into two independently classifiable
/// pseudo-holdings.
pub struct ComponentClassifier;

impl ComponentClassifier {
    /// Classify both legs of a breakdown.
    ///
    /// `classify_fn` receives `None` for the asset id: a decomposed leg
    /// has no real on-chain id of its own, and the sentinel forces the
    /// auto-classification rules instead of any manual-override table
    /// keyed by id.
    pub fn classify_components<F>(
        breakdown: &LpBreakdown,
        classify_fn: F,
    ) -> Vec<(SovereigntyCategory, ComponentRecord)>
    where
        F: Fn(&str, Option<u64>) -> SovereigntyCategory,
    {
        [&breakdown.asset1, &breakdown.asset2]
            .into_iter()
            .map(|leg| {
                let category = classify_fn(&leg.ticker, None);
                (category, Self::record_for(leg, &breakdown.lp_ticker))
            })
            .collect()
    }

    fn record_for(leg: &LegBreakdown, lp_ticker: &str) -> ComponentRecord {
        ComponentRecord {
            name: format!("{} (from {})", leg.ticker, lp_ticker),
            ticker: leg.ticker.clone(),
            amount: leg.amount,
            usd_value: leg.usd_value,
        }
    }
}
