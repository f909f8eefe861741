use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::holdings::Holding;

/// Records addressable by a stable id.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Holding {
    fn key(&self) -> &str {
        self.id()
    }
}

/// Handle for a change that the store has not yet confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TentativeId(Uuid);

impl TentativeId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TentativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A change shown to the user before the store acknowledges it.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange<T> {
    /// Insert a record, or replace the one with the same key
    Upsert(T),
    /// Remove the record with this key
    Remove(String),
}
