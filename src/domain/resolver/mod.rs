//! Pool resolution - mapping an LP token to its underlying pair

mod known_assets;
mod pool_resolver;

pub use known_assets::known_asset_id;
pub use pool_resolver::{parse_pair_tickers, PoolResolver};
