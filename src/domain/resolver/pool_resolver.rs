//! LP token -> underlying pair resolution

use std::sync::Arc;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use tracing::{debug, warn};

use crate::infrastructure::chain::ChainIndexer;
use crate::shared::cache::TtlCache;
use crate::shared::errors::ResolveError;
use crate::shared::types::{PoolIdentity, NATIVE_ASSET_ID};

/// Extract the `TICKER1-TICKER2` (or `TICKER1/TICKER2`) pair out of an
/// LP display name, e.g. `"TinymanPool2.0 xALGO-ALGO"`.
///
/// Tickers are returned uppercased. Returns `None` when the name has no
/// parseable separator.
pub fn parse_pair_tickers(lp_name: &str) -> Option<(String, String)> {
    static PAIR_RE: OnceLock<Regex> = OnceLock::new();
    let re = PAIR_RE.get_or_init(|| {
        // Two alphanumeric runs split on a dash or slash. `$` is part of
        // several commodity tickers (GOLD$, SILVER$).
        Regex::new(r"(?i)([A-Z0-9$]+)\s*[-/]\s*([A-Z0-9$]+)").unwrap()
    });

    let caps = re.captures(lp_name)?;
    Some((
        caps[1].to_ascii_uppercase(),
        caps[2].to_ascii_uppercase(),
    ))
}

/// Resolves which two assets an LP token represents.
///
/// Resolution strategy, in order of reliability:
/// 1. the pool account's nonzero-balance holdings (authoritative),
/// 2. ticker extraction from the display name (ids stay unknown).
pub struct PoolResolver {
    chain: Arc<dyn ChainIndexer>,
    /// Pool pairing is immutable for the life of the pool, so resolved
    /// identities are cached per resolver instance.
    identity_cache: TtlCache<u64, PoolIdentity>,
}

impl PoolResolver {
    pub fn new(chain: Arc<dyn ChainIndexer>, cache_ttl: Duration) -> Self {
        Self::with_cache(chain, TtlCache::new(cache_ttl))
    }

    pub fn with_cache(chain: Arc<dyn ChainIndexer>, identity_cache: TtlCache<u64, PoolIdentity>) -> Self {
        Self {
            chain,
            identity_cache,
        }
    }

    /// Map an LP token to the pair of underlying asset ids it represents.
    ///
    /// A `MetadataUnavailable` error means this position cannot be valued
    /// and should be skipped; it must not abort the wallet scan. An `Ok`
    /// identity with `None` ids means "resolved but ids unknown" - the
    /// caller decides which fallback tier applies.
    pub async fn resolve_pool(&self, lp_asset_id: u64, lp_name: &str) -> Result<PoolIdentity, ResolveError> {
        if let Some(identity) = self.identity_cache.get(&lp_asset_id) {
            debug!("pool identity cache hit for asset {}", lp_asset_id);
            return Ok(identity);
        }

        let metadata = self
            .chain
            .asset_metadata(lp_asset_id)
            .await
            .map_err(ResolveError::from)?;

        // Name parsing yields tickers but never ids; the on-chain display
        // name is the second chance when the wallet-supplied name has no
        // separator.
        let (asset1_ticker, asset2_ticker) = parse_pair_tickers(lp_name)
            .or_else(|| parse_pair_tickers(&metadata.name))
            .unwrap_or_default();

        // Authoritative signal: the assets the pool account holds with a
        // nonzero balance ARE the reserve pair. The LP token itself also
        // sits in the pool account (unissued supply) and is excluded.
        let (asset1_id, asset2_id) = match self.chain.account_assets(&metadata.creator).await {
            Ok(holdings) => {
                let reserves: Vec<u64> = holdings
                    .iter()
                    .filter(|h| h.balance > 0 && h.asset_id != lp_asset_id)
                    .map(|h| h.asset_id)
                    .collect();

                match reserves.as_slice() {
                    [a, b] => (Some(*a), Some(*b)),
                    // A single ASA reserve means the other leg is the
                    // native coin, which is not listed as an asset holding.
                    [a] => (Some(*a), Some(NATIVE_ASSET_ID)),
                    _ => {
                        warn!(
                            "ambiguous reserve count ({}) in pool account {} for LP asset {}",
                            reserves.len(),
                            metadata.creator,
                            lp_asset_id
                        );
                        (None, None)
                    }
                }
            }
            Err(e) => {
                warn!(
                    "pool account lookup failed for LP asset {}: {}",
                    lp_asset_id, e
                );
                (None, None)
            }
        };

        let identity = PoolIdentity {
            asset1_id,
            asset2_id,
            asset1_ticker,
            asset2_ticker,
            pool_account: Some(metadata.creator),
        };

        self.identity_cache.insert(lp_asset_id, identity.clone());
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::ChainError;
    use crate::shared::types::{AssetHolding, AssetMetadata};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockIndexer {
        assets: HashMap<u64, AssetMetadata>,
        accounts: HashMap<String, Vec<AssetHolding>>,
        metadata_calls: AtomicUsize,
    }

    impl MockIndexer {
        fn new() -> Self {
            Self {
                assets: HashMap::new(),
                accounts: HashMap::new(),
                metadata_calls: AtomicUsize::new(0),
            }
        }

        fn with_lp_asset(mut self, asset_id: u64, creator: &str, name: &str) -> Self {
            self.assets.insert(
                asset_id,
                AssetMetadata {
                    creator: creator.to_string(),
                    decimals: 6,
                    unit_name: "TMPOOL2".to_string(),
                    name: name.to_string(),
                },
            );
            self
        }

        fn with_account(mut self, address: &str, holdings: Vec<AssetHolding>) -> Self {
            self.accounts.insert(address.to_string(), holdings);
            self
        }
    }

    #[async_trait]
    impl ChainIndexer for MockIndexer {
        async fn asset_metadata(&self, asset_id: u64) -> Result<AssetMetadata, ChainError> {
            self.metadata_calls.fetch_add(1, Ordering::SeqCst);
            self.assets
                .get(&asset_id)
                .cloned()
                .ok_or(ChainError::AssetNotFound(asset_id))
        }

        async fn account_assets(&self, address: &str) -> Result<Vec<AssetHolding>, ChainError> {
            self.accounts
                .get(address)
                .cloned()
                .ok_or_else(|| ChainError::AccountNotFound(address.to_string()))
        }
    }

    fn holding(asset_id: u64, balance: u64) -> AssetHolding {
        AssetHolding { asset_id, balance }
    }

    #[test]
    fn test_parse_pair_tickers() {
        assert_eq!(
            parse_pair_tickers("TinymanPool2.0 xALGO-ALGO"),
            Some(("XALGO".to_string(), "ALGO".to_string()))
        );
        assert_eq!(
            parse_pair_tickers("Pact GOLD$/USDC"),
            Some(("GOLD$".to_string(), "USDC".to_string()))
        );
        assert_eq!(parse_pair_tickers("MysteryPool"), None);
    }

    #[tokio::test]
    async fn test_two_reserve_assets_are_the_pair() {
        let indexer = MockIndexer::new()
            .with_lp_asset(700, "POOLADDR", "TinymanPool2.0 goBTC-USDC")
            .with_account(
                "POOLADDR",
                vec![holding(700, 5_000), holding(386_192_725, 10), holding(31_566_704, 900)],
            );
        let resolver = PoolResolver::new(Arc::new(indexer), Duration::from_secs(60));

        let identity = resolver
            .resolve_pool(700, "TinymanPool2.0 goBTC-USDC")
            .await
            .unwrap();
        assert_eq!(identity.asset1_id, Some(386_192_725));
        assert_eq!(identity.asset2_id, Some(31_566_704));
        assert_eq!(identity.asset1_ticker, "GOBTC");
        assert_eq!(identity.asset2_ticker, "USDC");
        assert_eq!(identity.pool_account.as_deref(), Some("POOLADDR"));
    }

    #[tokio::test]
    async fn test_single_reserve_defaults_second_leg_to_native() {
        let indexer = MockIndexer::new()
            .with_lp_asset(700, "POOLADDR", "Pool xALGO-ALGO")
            .with_account("POOLADDR", vec![holding(700, 1), holding(1_134_696_561, 42)]);
        let resolver = PoolResolver::new(Arc::new(indexer), Duration::from_secs(60));

        let identity = resolver.resolve_pool(700, "Pool xALGO-ALGO").await.unwrap();
        assert_eq!(identity.asset1_id, Some(1_134_696_561));
        assert_eq!(identity.asset2_id, Some(NATIVE_ASSET_ID));
    }

    #[tokio::test]
    async fn test_metadata_failure_is_distinct() {
        let indexer = MockIndexer::new();
        let resolver = PoolResolver::new(Arc::new(indexer), Duration::from_secs(60));

        let err = resolver.resolve_pool(999, "Pool A-B").await.unwrap_err();
        assert!(matches!(err, ResolveError::MetadataUnavailable(_)));
    }

    #[tokio::test]
    async fn test_account_failure_leaves_ids_unknown() {
        let indexer = MockIndexer::new().with_lp_asset(700, "GONE", "Pool A-B");
        let resolver = PoolResolver::new(Arc::new(indexer), Duration::from_secs(60));

        let identity = resolver.resolve_pool(700, "Pool A-B").await.unwrap();
        assert_eq!(identity.asset1_id, None);
        assert_eq!(identity.asset2_id, None);
        assert_eq!(identity.asset1_ticker, "A");
    }

    #[tokio::test]
    async fn test_ambiguous_reserves_leave_ids_unknown() {
        let indexer = MockIndexer::new()
            .with_lp_asset(700, "POOLADDR", "Pool A-B")
            .with_account(
                "POOLADDR",
                vec![holding(1, 10), holding(2, 10), holding(3, 10)],
            );
        let resolver = PoolResolver::new(Arc::new(indexer), Duration::from_secs(60));

        let identity = resolver.resolve_pool(700, "Pool A-B").await.unwrap();
        assert_eq!(identity.asset1_id, None);
        assert_eq!(identity.asset2_id, None);
    }

    #[tokio::test]
    async fn test_resolved_identity_is_cached() {
        let indexer = MockIndexer::new()
            .with_lp_asset(700, "POOLADDR", "Pool A-B")
            .with_account("POOLADDR", vec![holding(1, 10), holding(2, 10)]);
        let indexer = Arc::new(indexer);
        let resolver = PoolResolver::new(indexer.clone(), Duration::from_secs(60));

        let first = resolver.resolve_pool(700, "Pool A-B").await.unwrap();
        let second = resolver.resolve_pool(700, "Pool A-B").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(indexer.metadata_calls.load(Ordering::SeqCst), 1);
    }
}
