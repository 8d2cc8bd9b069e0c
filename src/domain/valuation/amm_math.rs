//! AMM pricing math

/// Lower bound for a live-reserve valuation to be considered
/// economically meaningful. A mis-denominated SDK response can produce a
/// numerically valid near-zero total; accepting it would corrupt
/// downstream sovereignty scores.
pub const ZERO_VALUE_GUARD_USD: f64 = 0.01;

/// Fair value of one LP unit at constant-product equilibrium:
/// `2 * sqrt(price1 * price2)`.
///
/// Requires both leg prices; with only one price the identity collapses.
/// Assumes a 50/50-by-value pool, so it over- or under-states weighted
/// pools - a known limitation of the fallback tier.
pub fn geometric_mean_lp_price(price1: f64, price2: f64) -> Option<f64> {
    if price1 > 0.0 && price2 > 0.0 {
        Some(2.0 * (price1 * price2).sqrt())
    } else {
        None
    }
}

/// Convert raw base units to decimal units using the asset's on-chain
/// decimal-places metadata.
pub fn base_to_decimal(raw: u64, decimals: u8) -> f64 {
    raw as f64 / 10_f64.powi(decimals as i32)
}
