//! Behavioral and grade scorers for dashboard badges.

mod scoring_model;
mod scorers;

pub use scoring_model::*;
pub use scorers::*;
