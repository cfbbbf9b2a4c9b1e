//! Reservation store: CRUD over one JSON array under one storage key.
//!
//! Nothing is cached. Every call reads the full collection, edits it in
//! memory and writes the full collection back. There is no locking across
//! that read-modify-write; with more than one writer the last one wins.

use std::sync::Arc;

use chrono::Local;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::models::Reservation;
use super::storage::{MemoryStorage, Storage, StorageError};

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "reservations";

/// Store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid reservation fields: {0}")]
    InvalidFields(serde_json::Error),

    #[error("Stored reservations are unreadable: {0}")]
    Unreadable(serde_json::Error),
}

/// Reservation collection persisted under a single key.
#[derive(Clone)]
pub struct ReservationStore {
    storage: Arc<dyn Storage>,
    key: String,
}

impl ReservationStore {
    pub fn new(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Store over a fresh [`MemoryStorage`] using the default key.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()), DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// All reservations, newest first.
    ///
    /// An unset key, a failing backend or text that is not an array of
    /// records all read as an empty collection.
    pub fn list(&self) -> Vec<Reservation> {
        let text = match self.storage.get(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read key {}: {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&text) {
            Ok(reservations) => reservations,
            Err(e) => {
                warn!("Stored reservations under {} are unreadable: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// The collection as a writer must see it.
    ///
    /// Unlike [`list`](Self::list) this refuses to read stored text it cannot
    /// parse, so a write never replaces records it failed to load.
    fn load(&self) -> Result<Vec<Reservation>, StoreError> {
        match self.storage.get(&self.key)? {
            Some(text) => serde_json::from_str(&text).map_err(StoreError::Unreadable),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the whole collection.
    pub fn save(&self, reservations: &[Reservation]) -> Result<(), StoreError> {
        let text = serde_json::to_string(reservations)?;
        self.storage.set(&self.key, &text)?;
        Ok(())
    }

    /// Create a `Confirmed` reservation from caller fields and put it first.
    pub fn add(&self, details: Map<String, Value>) -> Result<Reservation, StoreError> {
        let mut reservations = self.load()?;
        let reservation = Reservation::new(details, Local::now().date_naive());

        reservations.insert(0, reservation.clone());
        self.save(&reservations)?;

        info!("Reservation {} added ({} total)", reservation.id, reservations.len());
        Ok(reservation)
    }

    /// Shallow-merge `fields` into the reservation with `id`.
    ///
    /// Returns `false`, without writing, when no reservation has that id.
    pub fn update(&self, id: &str, fields: Map<String, Value>) -> Result<bool, StoreError> {
        let mut reservations = self.load()?;
        let Some(existing) = reservations.iter_mut().find(|r| r.id == id) else {
            debug!("Update skipped, no reservation {}", id);
            return Ok(false);
        };

        *existing = existing.merged(fields).map_err(StoreError::InvalidFields)?;
        self.save(&reservations)?;

        info!("Reservation {} updated", id);
        Ok(true)
    }

    /// Remove every reservation with `id`. Unknown ids are ignored.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut reservations = self.load()?;
        let before = reservations.len();
        reservations.retain(|r| r.id != id);
        self.save(&reservations)?;

        if reservations.len() < before {
            info!("Reservation {} deleted", id);
        }
        Ok(())
    }

    pub fn get_by_id(&self, id: &str) -> Option<Reservation> {
        self.list().into_iter().find(|r| r.id == id)
    }
}

impl std::fmt::Debug for ReservationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
