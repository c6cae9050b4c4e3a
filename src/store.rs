// src/store.rs
//
// In-memory collection of extracted artworks. Session-scoped: rebuilt from
// upstream markup on every load, nothing on disk. All mutation happens on
// the UI thread; workers only hand finished record vectors over a channel.

use thiserror::Error;

use crate::extract::{ArtworkRecord, ArtworkStatus};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no artwork with id {0:?}")]
    NotFound(String),
}

#[derive(Clone, Debug, Default)]
pub struct ArtworkStore {
    records: Vec<ArtworkRecord>,
}

impl ArtworkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with one extraction pass's output.
    /// Consumers never observe a partial mix of old and new records.
    pub fn load(&mut self, records: Vec<ArtworkRecord>) {
        self.records = records;
    }

    /// Records in insertion order, stable until the next `load`.
    pub fn all(&self) -> &[ArtworkRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&ArtworkRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Set a record's status. Idempotent: setting the same status again is
    /// a no-op, not an error. Unknown ids leave the store untouched.
    pub fn update_status(&mut self, id: &str, status: ArtworkStatus) -> Result<(), StoreError> {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(r) => {
                r.status = status;
                Ok(())
            }
            None => Err(StoreError::NotFound(s!(id))),
        }
    }
}
