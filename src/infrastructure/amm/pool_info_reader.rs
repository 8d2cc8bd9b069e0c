//! Defensive readers over AMM pool-info response shapes
//!
//! The AMM SDK's field names drift between minor versions (snake_case
//! vs camelCase, numbered variants). Each shape gets its own reader,
//! selected once at startup, instead of scattering multi-key probing
//! through the valuation logic.

use serde_json::Value;

use crate::shared::errors::AppError;

/// Extracts supply and reserves from a raw pool-info object
pub trait PoolInfoReader: Send + Sync {
    fn issued_lp_tokens(&self, info: &Value) -> Option<u64>;
    fn asset1_reserves(&self, info: &Value) -> Option<u64>;
    fn asset2_reserves(&self, info: &Value) -> Option<u64>;
}

/// Numeric fields arrive as JSON numbers or decimal strings depending
/// on the API version.
fn read_u64(info: &Value, keys: &[&str]) -> Option<u64> {
    for key in keys {
        match info.get(*key) {
            Some(Value::Number(n)) => {
                if let Some(v) = n.as_u64() {
                    return Some(v);
                }
            }
            Some(Value::String(s)) => {
                if let Ok(v) = s.parse::<u64>() {
                    return Some(v);
                }
            }
            _ => {}
        }
    }
    None
}

/// v1 analytics API shape: snake_case with numbered reserve keys
pub struct V1PoolInfoReader;

impl PoolInfoReader for V1PoolInfoReader {
    fn issued_lp_tokens(&self, info: &Value) -> Option<u64> {
        read_u64(info, &["issued_pool_tokens", "issued_liquidity"])
    }

    fn asset1_reserves(&self, info: &Value) -> Option<u64> {
        read_u64(info, &["asset_1_reserves", "asset1_reserves"])
    }

    fn asset2_reserves(&self, info: &Value) -> Option<u64> {
        read_u64(info, &["asset_2_reserves", "asset2_reserves"])
    }
}

/// v2 API shape: camelCase
pub struct V2PoolInfoReader;

impl PoolInfoReader for V2PoolInfoReader {
    fn issued_lp_tokens(&self, info: &Value) -> Option<u64> {
        read_u64(info, &["issuedPoolTokens", "issuedLiquidity"])
    }

    fn asset1_reserves(&self, info: &Value) -> Option<u64> {
        read_u64(info, &["asset1Reserves", "assetOneReserves"])
    }

    fn asset2_reserves(&self, info: &Value) -> Option<u64> {
        read_u64(info, &["asset2Reserves", "assetTwoReserves"])
    }
}

/// Select the reader matching the configured API shape
pub fn reader_for_shape(shape: &str) -> Result<Box<dyn PoolInfoReader>, AppError> {
    match shape {
        "v1" => Ok(Box::new(V1PoolInfoReader)),
        "v2" => Ok(Box::new(V2PoolInfoReader)),
        other => Err(AppError::ConfigError(format!(
            "unknown pool info shape: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_v1_reads_string_amounts() {
        let info = json!({
            "issued_pool_tokens": "100000000",
            "asset_1_reserves": "500",
            "asset_2_reserves": "600",
        });
        let reader = V1PoolInfoReader;
        assert_eq!(reader.issued_lp_tokens(&info), Some(100_000_000));
        assert_eq!(reader.asset1_reserves(&info), Some(500));
        assert_eq!(reader.asset2_reserves(&info), Some(600));
    }

    #[test]
    fn test_v1_falls_back_to_alternate_spelling() {
        let info = json!({
            "issued_liquidity": 77,
            "asset1_reserves": 500,
            "asset2_reserves": 600,
        });
        let reader = V1PoolInfoReader;
        assert_eq!(reader.issued_lp_tokens(&info), Some(77));
        assert_eq!(reader.asset1_reserves(&info), Some(500));
    }

    #[test]
    fn test_v2_reads_camel_case() {
        let info = json!({
            "issuedPoolTokens": 88,
            "asset1Reserves": "500",
            "asset2Reserves": "600",
        });
        let reader = V2PoolInfoReader;
        assert_eq!(reader.issued_lp_tokens(&info), Some(88));
        assert_eq!(reader.asset2_reserves(&info), Some(600));
    }

    #[test]
    fn test_missing_fields_yield_none() {
        let info = json!({"unrelated": 1});
        let reader = V1PoolInfoReader;
        assert_eq!(reader.issued_lp_tokens(&info), None);
        assert_eq!(reader.asset1_reserves(&info), None);
    }

    #[test]
    fn test_unknown_shape_rejected() {
        assert!(reader_for_shape("v3").is_err());
        assert!(reader_for_shape("v1").is_ok());
    }
}
