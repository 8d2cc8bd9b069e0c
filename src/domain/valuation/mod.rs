//! LP valuation - orchestration and AMM pricing math

pub mod amm_math;
mod valuation_engine;

pub use valuation_engine::LpValuationEngine;
