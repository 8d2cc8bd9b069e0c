//! Error handling for the application

use thiserror::Error;

/// Chain lookup errors (indexer / node REST calls)
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("asset not found: {0}")]
    AssetNotFound(u64),

    #[error("account not found: {0}")]
    AccountNotFound(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Pool resolution errors
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("LP asset metadata unavailable: {0}")]
    MetadataUnavailable(String),

    #[error("underlying pair could not be resolved")]
    PairUnresolved,
}

/// Pool state fetch errors
#[derive(Error, Debug)]
pub enum PoolStateError {
    #[error("no pool exists for assets {0} / {1}")]
    PoolNotFound(u64, u64),

    #[error("pool state request timed out")]
    Timeout,

    #[error("AMM client error: {0}")]
    Network(String),

    #[error("malformed pool info: {0}")]
    MalformedResponse(String),
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Chain error: {0}")]
    ChainError(String),

    #[error("Valuation error: {0}")]
    ValuationError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<ChainError> for AppError {
    fn from(err: ChainError) -> Self {
        AppError::ChainError(err.to_string())
    }
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        AppError::ValuationError(err.to_string())
    }
}

impl From<PoolStateError> for AppError {
    fn from(err: PoolStateError) -> Self {
        AppError::ValuationError(err.to_string())
    }
}

impl From<ChainError> for ResolveError {
    fn from(err: ChainError) -> Self {
        ResolveError::MetadataUnavailable(err.to_string())
    }
}
