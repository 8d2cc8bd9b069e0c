use crate::shared::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fs;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Indexer REST endpoint for asset metadata and account holdings
    pub indexer_url: String,
    /// AMM analytics API endpoint for pool objects
    pub amm_api_url: String,
    /// Per-call timeout for all network requests
    pub request_timeout_ms: u64,
    /// TTL for the pool-identity cache
    pub pool_cache_ttl_secs: u64,
    /// Pool-info response shape: "v1" (snake_case) or "v2" (camelCase)
    pub pool_info_shape: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            indexer_url: "https://mainnet-idx.algonode.cloud".to_string(),
            amm_api_url: "https://mainnet.analytics.tinyman.org/api/v1".to_string(),
            request_timeout_ms: 5000,
            pool_cache_ttl_secs: 86400,
            pool_info_shape: "v1".to_string(),
        }
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file
    pub fn load_config(path: &str) -> Result<EngineConfig, AppError> {
        let config_content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let config: EngineConfig = toml::from_str(&config_content)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let raw = r#"
            indexer_url = "https://idx.example.org"
            amm_api_url = "https://amm.example.org/api/v1"
            request_timeout_ms = 3000
            pool_cache_ttl_secs = 600
            pool_info_shape = "v2"
        "#;
        let config: EngineConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.indexer_url, "https://idx.example.org");
        assert_eq!(config.request_timeout_ms, 3000);
        assert_eq!(config.pool_info_shape, "v2");
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.request_timeout_ms, 5000);
        assert_eq!(config.pool_info_shape, "v1");
    }
}
