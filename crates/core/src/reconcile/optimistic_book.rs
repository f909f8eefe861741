//! Confirmed records plus an ordered log of tentative changes.
//!
//! The visible view is recomputed from the confirmed records by replaying the
//! pending log, so rolling back one change never disturbs the others.

use log::debug;

use super::reconcile_model::{Keyed, PendingChange, TentativeId};
use crate::errors::{Error, Result};

fn upsert<T: Keyed>(records: &mut Vec<T>, record: T) {
    match records.iter().position(|r| r.key() == record.key()) {
        Some(i) => records[i] = record,
        None => records.push(record),
    }
}

fn remove<T: Keyed>(records: &mut Vec<T>, key: &str) {
    records.retain(|r| r.key() != key);
}

#[derive(Debug, Clone)]
pub struct OptimisticBook<T> {
    confirmed: Vec<T>,
    pending: Vec<(TentativeId, PendingChange<T>)>,
}

impl<T> Default for OptimisticBook<T> {
    fn default() -> Self {
        Self {
            confirmed: Vec::new(),
            pending: Vec::new(),
        }
    }
}

impl<T: Keyed + Clone> OptimisticBook<T> {
    pub fn new(confirmed: Vec<T>) -> Self {
        Self {
            confirmed,
            pending: Vec::new(),
        }
    }

    /// Shows `change` immediately and returns the handle to settle it with.
    pub fn apply(&mut self, change: PendingChange<T>) -> TentativeId {
        let id = TentativeId::new();
        self.pending.push((id, change));
        debug!("Applied tentative change {} ({} pending)", id, self.pending.len());
        id
    }

    /// Settles a tentative change with the store's result.
    ///
    /// For an upsert, `server_record` (the row as stored, possibly with a
    /// store-assigned id) replaces the tentative record; `None` keeps the
    /// tentative record as sent. For a removal, `None` removes the record
    /// and `Some` keeps the store's copy.
    pub fn confirm(&mut self, id: TentativeId, server_record: Option<T>) -> Result<()> {
        let change = self.take_pending(id)?;
        match (change, server_record) {
            (_, Some(record)) => upsert(&mut self.confirmed, record),
            (PendingChange::Upsert(record), None) => upsert(&mut self.confirmed, record),
            (PendingChange::Remove(key), None) => remove(&mut self.confirmed, &key),
        }
        debug!("Confirmed change {} ({} pending)", id, self.pending.len());
        Ok(())
    }

    /// Discards a tentative change; the view falls back to the confirmed state.
    pub fn rollback(&mut self, id: TentativeId) -> Result<()> {
        self.take_pending(id)?;
        debug!("Rolled back change {} ({} pending)", id, self.pending.len());
        Ok(())
    }

    /// Confirmed records with every pending change replayed in order.
    pub fn visible(&self) -> Vec<T> {
        let mut view = self.confirmed.clone();
        for (_, change) in &self.pending {
            match change {
                PendingChange::Upsert(record) => upsert(&mut view, record.clone()),
                PendingChange::Remove(key) => remove(&mut view, key),
            }
        }
        view
    }

    pub fn confirmed(&self) -> &[T] {
        &self.confirmed
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn take_pending(&mut self, id: TentativeId) -> Result<PendingChange<T>> {
        let index = self
            .pending
            .iter()
            .position(|(pending_id, _)| *pending_id == id)
            .ok_or_else(|| Error::Reconcile(format!("unknown tentative change {}", id)))?;
        Ok(self.pending.remove(index).1)
    }
}
