//! Per-class dashboard summaries over already-filtered records.

mod summaries_calculator;
mod summaries_model;

pub use summaries_calculator::*;
pub use summaries_model::*;

#[cfg(test)]
mod summaries_calculator_tests;
