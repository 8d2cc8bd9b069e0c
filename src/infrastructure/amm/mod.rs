//! AMM client integration and pool state retrieval

mod amm_client;
mod pool_info_reader;
mod pool_state_fetcher;

pub use amm_client::{AmmClient, HttpAmmClient};
pub use pool_info_reader::{reader_for_shape, PoolInfoReader, V1PoolInfoReader, V2PoolInfoReader};
pub use pool_state_fetcher::PoolStateFetcher;
