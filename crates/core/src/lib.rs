//! Wealthlens Core - cross-asset wealth aggregation and analytics.
//!
//! Pure calculators over holding records of five asset classes (shares,
//! crypto, real estate, bonds, business): net worth, concentration risk,
//! what-if scenarios, badge scorers and per-class dashboard figures. The
//! store-facing edges (seeding and optimistic reconciliation) sit behind
//! traits so the calculators never depend on them.

pub mod constants;
pub mod errors;
pub mod holdings;
pub mod portfolio;
pub mod reconcile;
pub mod scoring;
pub mod seeding;
pub mod settings;
pub mod utils;

// Re-export common types from holding and portfolio modules
pub use holdings::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
