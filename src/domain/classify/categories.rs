//! Sovereignty categories and default auto-classification rules

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four buckets every wallet asset is sorted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SovereigntyCategory {
    HardMoney,
    Productive,
    Nft,
    Speculative,
}

impl fmt::Display for SovereigntyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SovereigntyCategory::HardMoney => "hard_money",
            SovereigntyCategory::Productive => "productive",
            SovereigntyCategory::Nft => "nft",
            SovereigntyCategory::Speculative => "speculative",
        };
        write!(f, "{}", label)
    }
}

/// Ticker-based auto-classification.
///
/// This is the rule set a decomposed LP leg goes through: legs carry no
/// real asset id, so manual per-asset overrides never apply to them.
/// NFTs cannot be recognized from a ticker alone and never come out of
/// an AMM pool leg; everything unrecognized is speculative.
pub fn auto_classify(ticker: &str, _asset_id: Option<u64>) -> SovereigntyCategory {
    match ticker.to_ascii_uppercase().as_str() {
        "GOLD$" | "SILVER$" | "GOBTC" | "WBTC" | "BTC" => SovereigntyCategory::HardMoney,
        "XALGO" | "TALGO" | "MALGO" => SovereigntyCategory::Productive,
        _ => SovereigntyCategory::Speculative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_money_tickers() {
        assert_eq!(auto_classify("GOLD$", None), SovereigntyCategory::HardMoney);
        assert_eq!(auto_classify("goBTC", None), SovereigntyCategory::HardMoney);
    }

    #[test]
    fn test_staking_derivatives_are_productive() {
        assert_eq!(auto_classify("xALGO", None), SovereigntyCategory::Productive);
    }

    #[test]
    fn test_unknown_defaults_to_speculative() {
        assert_eq!(auto_classify("WEIRD", None), SovereigntyCategory::Speculative);
        assert_eq!(auto_classify("USDC", None), SovereigntyCategory::Speculative);
    }
}
