//! Concentration and diversification scoring over any weighted set.

mod concentration_calculator;
mod concentration_model;

pub use concentration_calculator::*;
pub use concentration_model::*;

#[cfg(test)]
mod concentration_calculator_tests;
