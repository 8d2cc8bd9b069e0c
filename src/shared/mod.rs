//! Shared components - common types, errors, and utilities

pub mod cache;
pub mod config;
pub mod errors;
pub mod types;
