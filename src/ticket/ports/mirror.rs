//! Durable mirror port for the ticket collection.

use crate::ticket::domain::Ticket;
use std::sync::Arc;
use thiserror::Error;

/// Storage key the ticket collection is mirrored under.
pub const DEFAULT_STORAGE_KEY: &str = "tickets";

/// Result type for mirror operations.
pub type TicketMirrorResult<T> = Result<T, TicketMirrorError>;

/// Single named slot holding the serialized ticket collection.
///
/// The slot is read once when a store opens and overwritten wholesale after
/// every mutation. It exists to survive restarts; the in-memory collection
/// stays authoritative for the running process.
pub trait TicketMirror: Send + Sync {
    /// Reads the mirrored collection.
    ///
    /// Returns an empty collection when the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`TicketMirrorError`] when the slot cannot be read or does not
    /// hold a ticket collection.
    fn load(&self) -> TicketMirrorResult<Vec<Ticket>>;

    /// Overwrites the slot with `tickets`.
    ///
    /// # Errors
    ///
    /// Returns [`TicketMirrorError`] when the collection cannot be encoded or
    /// written.
    fn save(&self, tickets: &[Ticket]) -> TicketMirrorResult<()>;
}

/// Errors returned by mirror implementations.
#[derive(Debug, Clone, Error)]
pub enum TicketMirrorError {
    /// Reading or writing the backing storage failed.
    #[error("mirror io error: {0}")]
    Io(Arc<std::io::Error>),

    /// The slot content is not a valid ticket collection.
    #[error("mirror payload is not a ticket collection: {0}")]
    Serialization(Arc<serde_json::Error>),

    /// Any other persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TicketMirrorError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<std::io::Error> for TicketMirrorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for TicketMirrorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(Arc::new(err))
    }
}
