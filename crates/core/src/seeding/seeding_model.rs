use serde::{Deserialize, Serialize};

use crate::holdings::AssetClass;

/// The table being seeded: one asset class of one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedContext {
    pub user_id: String,
    pub asset_class: AssetClass,
}

impl SeedContext {
    pub fn new(user_id: impl Into<String>, asset_class: AssetClass) -> Self {
        Self {
            user_id: user_id.into(),
            asset_class,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "outcome")]
pub enum SeedOutcome {
    /// The table already had rows; nothing was written
    AlreadySeeded { existing: usize },
    /// Defaults were written to an empty table
    Seeded { inserted: usize },
}
