//! Domain layer - core business logic and entities

pub mod classify;
pub mod oracle;
pub mod resolver;
pub mod valuation;
