//! Portfolio-level calculators.

pub mod concentration;
pub mod net_worth;
pub mod scenario;
pub mod summaries;

pub use concentration::*;
pub use net_worth::*;
pub use scenario::*;
pub use summaries::*;
