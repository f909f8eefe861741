//! Analytics settings: thresholds and scenario parameters.

mod settings_model;

pub use settings_model::*;
