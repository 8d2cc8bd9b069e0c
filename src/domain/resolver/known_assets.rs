//! Static fallback table of well-known ticker -> asset id mappings
//!
//! Used only when on-chain pair resolution fails. Membership of this
//! table is a product decision; do not extend it without product input.

use crate::shared::types::NATIVE_ASSET_ID;

/// Look up a well-known asset id by ticker, case-insensitively.
pub fn known_asset_id(ticker: &str) -> Option<u64> {
    match ticker.to_ascii_uppercase().as_str() {
        "ALGO" => Some(NATIVE_ASSET_ID),
        "USDC" => Some(31_566_704),
        "USDT" => Some(312_769),
        "GOLD$" => Some(246_516_580),
        "SILVER$" => Some(246_519_683),
        "GOBTC" => Some(386_192_725),
        "GOETH" => Some(386_195_940),
        "XALGO" => Some(1_134_696_561),
        _ => None,
    }
}
