//! Reservation records and their persistence.
//!
//! The whole collection lives under one key of an injected key/value
//! [`Storage`]; see [`ReservationStore`] for the read-modify-write rules.

pub mod models;
pub mod routes;
pub mod storage;
pub mod store;

pub use models::{Reservation, ReservationStatus};
pub use routes::router;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{ReservationStore, StoreError, DEFAULT_STORAGE_KEY};
