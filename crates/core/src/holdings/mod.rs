//! Holding records and their normalized valuation.

mod holdings_model;
mod valuation;

pub use holdings_model::*;
pub use valuation::*;
