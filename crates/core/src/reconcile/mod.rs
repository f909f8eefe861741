//! Two-phase optimistic updates against the holding store.

mod optimistic_book;
mod reconcile_model;

pub use optimistic_book::OptimisticBook;
pub use reconcile_model::{Keyed, PendingChange, TentativeId};
