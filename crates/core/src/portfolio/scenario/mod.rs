//! What-if scenario simulation.

mod scenario_calculator;
mod scenario_model;

pub use scenario_calculator::*;
pub use scenario_model::*;
