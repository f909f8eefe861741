use std::sync::Arc;

use log::{debug, warn};

use super::seeding_model::{SeedContext, SeedOutcome};
use super::seeding_traits::HoldingStoreTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::holdings::Holding;

/// Writes default holdings into a user's empty table.
///
/// Seeding is keyed on the store's own row count, so it is idempotent across
/// devices and sessions: once a table has rows it is never seeded again.
pub struct SeedService {
    store: Arc<dyn HoldingStoreTrait>,
}

impl SeedService {
    pub fn new(store: Arc<dyn HoldingStoreTrait>) -> Self {
        Self { store }
    }

    pub async fn ensure_seeded(
        &self,
        ctx: &SeedContext,
        defaults: Vec<Holding>,
    ) -> Result<SeedOutcome> {
        if ctx.user_id.trim().is_empty() {
            return Err(ValidationError::MissingField("user_id".to_string()).into());
        }

        if let Some(stray) = defaults
            .iter()
            .find(|h| h.asset_class() != ctx.asset_class)
        {
            return Err(Error::Seed(format!(
                "default holding '{}' is {} but the table holds {}",
                stray.id(),
                stray.asset_class(),
                ctx.asset_class
            )));
        }

        let existing = self.store.count_holdings(ctx).await?;
        if existing > 0 {
            debug!(
                "{} table for user {} already has {} rows",
                ctx.asset_class, ctx.user_id, existing
            );
            return Ok(SeedOutcome::AlreadySeeded { existing });
        }

        let expected = defaults.len();
        let inserted = self.store.insert_holdings(ctx, defaults).await?;
        if inserted != expected {
            warn!(
                "Seeded {} of {} default {} holdings for user {}",
                inserted, expected, ctx.asset_class, ctx.user_id
            );
        } else {
            debug!(
                "Seeded {} default {} holdings for user {}",
                inserted, ctx.asset_class, ctx.user_id
            );
        }
        Ok(SeedOutcome::Seeded { inserted })
    }
}
