//! Infrastructure layer - external service integrations

pub mod amm;
pub mod chain;
