//! In-memory mirror holding serialized collections in named slots.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::codec;
use crate::ticket::{
    domain::Ticket,
    ports::{DEFAULT_STORAGE_KEY, TicketMirror, TicketMirrorError, TicketMirrorResult},
};

/// Thread-safe in-memory ticket mirror.
///
/// Clones share the same slots, so a clone kept by a test observes every
/// write made through the store and can seed a second store to simulate a
/// restart.
#[derive(Debug, Clone)]
pub struct InMemoryTicketMirror {
    slots: Arc<RwLock<HashMap<String, String>>>,
    key: String,
}

impl InMemoryTicketMirror {
    /// Creates an empty mirror using [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_key(DEFAULT_STORAGE_KEY)
    }

    /// Creates an empty mirror writing under `key`.
    #[must_use]
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            slots: Arc::new(RwLock::new(HashMap::new())),
            key: key.into(),
        }
    }

    /// Returns the storage key this mirror writes under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the raw payload currently stored under this mirror's key.
    ///
    /// # Errors
    ///
    /// Returns [`TicketMirrorError::Persistence`] when the slot lock is
    /// poisoned.
    pub fn raw(&self) -> TicketMirrorResult<Option<String>> {
        let slots = self.slots.read().map_err(|err| {
            TicketMirrorError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(slots.get(&self.key).cloned())
    }

    /// Overwrites the slot with an arbitrary payload.
    ///
    /// # Errors
    ///
    /// Returns [`TicketMirrorError::Persistence`] when the slot lock is
    /// poisoned.
    pub fn seed(&self, payload: impl Into<String>) -> TicketMirrorResult<()> {
        let mut slots = self.slots.write().map_err(|err| {
            TicketMirrorError::persistence(std::io::Error::other(err.to_string()))
        })?;
        slots.insert(self.key.clone(), payload.into());
        Ok(())
    }
}

impl Default for InMemoryTicketMirror {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketMirror for InMemoryTicketMirror {
    fn load(&self) -> TicketMirrorResult<Vec<Ticket>> {
        self.raw()?
            .map_or_else(|| Ok(Vec::new()), |payload| codec::decode(&payload))
    }

    fn save(&self, tickets: &[Ticket]) -> TicketMirrorResult<()> {
        let payload = codec::encode(tickets)?;
        self.seed(payload)
    }
}
