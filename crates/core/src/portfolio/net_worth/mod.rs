//! Net worth aggregation module.
//!
//! Combines normalized holdings of every asset class into portfolio totals
//! with a per-class breakdown in canonical order.

mod net_worth_calculator;
mod net_worth_model;

pub use net_worth_calculator::*;
pub use net_worth_model::*;
