// --- File: crates/tailortalk_calendar/src/store.rs ---
use crate::models::Event;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tokio::fs;
use tracing::debug;

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access bookings storage: {0}")]
    Io(#[from] std::io::Error),
    /// The persisted content could not be decoded. A partial event list is
    /// never returned in this case.
    #[error("Bookings storage is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A durable, ordered collection of booked events.
///
/// `load` returns every stored event in storage order; the absence of any
/// storage yet is an empty list, not an error. `save` replaces the whole
/// collection. The store itself does not enforce the no-overlap invariant;
/// that is the booking engine's job.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn load(&self) -> Result<Vec<Event>, StoreError>;
    async fn save(&self, events: &[Event]) -> Result<(), StoreError>;
}

/// Event store backed by a single JSON file, like the original
/// `bookings.json`.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }
}

#[async_trait]
impl EventStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Event>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No bookings file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save(&self, events: &[Event]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(events)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}

/// In-memory event store for tests and demos.
#[derive(Default)]
pub struct MemoryStore {
    events: Mutex<Vec<Event>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.events.lock().expect("event store mutex poisoned").clone())
    }

    async fn save(&self, events: &[Event]) -> Result<(), StoreError> {
        *self.events.lock().expect("event store mutex poisoned") = events.to_vec();
        Ok(())
    }
}
