//! Lpscope - Algorand LP valuation and sovereignty classification core
//! Built with Domain-Driven Design principles

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export main types for convenience
pub use application::{LpAnalysisService, LpPositionReport};
pub use domain::classify::{ComponentClassifier, ComponentRecord, SovereigntyCategory};
pub use domain::oracle::PriceOracle;
pub use domain::resolver::PoolResolver;
pub use domain::valuation::LpValuationEngine;
pub use infrastructure::amm::PoolStateFetcher;
pub use shared::types::{LpBreakdown, LpToken, PoolIdentity, PoolState};
