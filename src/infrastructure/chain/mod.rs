//! On-chain metadata access

mod indexer_client;
mod traits;

pub use indexer_client::IndexerHttpClient;
pub use traits::ChainIndexer;
