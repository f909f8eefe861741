use async_trait::async_trait;

use super::seeding_model::SeedContext;
use crate::errors::Result;
use crate::holdings::Holding;

/// Table-store operations needed to seed a holding table.
#[async_trait]
pub trait HoldingStoreTrait: Send + Sync {
    /// Number of rows in the user's table for the context's asset class.
    async fn count_holdings(&self, ctx: &SeedContext) -> Result<usize>;
    /// Inserts rows into the user's table and returns how many were written.
    async fn insert_holdings(&self, ctx: &SeedContext, holdings: Vec<Holding>) -> Result<usize>;
}
