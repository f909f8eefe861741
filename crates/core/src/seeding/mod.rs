//! Ensure-seeded bootstrap of a user's holding table.

mod seeding_model;
mod seeding_service;
mod seeding_traits;

pub use seeding_model::{SeedContext, SeedOutcome};
pub use seeding_service::SeedService;
pub use seeding_traits::HoldingStoreTrait;
