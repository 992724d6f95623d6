//! Shared world state for ticket store BDD scenarios.

use std::sync::Arc;

use helpdesk::ticket::{
    adapters::memory::InMemoryTicketMirror,
    domain::{Ticket, TicketPriority},
    services::{CreateTicketRequest, TicketStore},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Store type used by the BDD world.
pub type TestTicketStore = TicketStore<InMemoryTicketMirror, DefaultClock>;

/// Scenario world for ticket store behaviour tests.
pub struct TicketWorld {
    /// Handle on the mirror slot shared with the store.
    pub mirror: InMemoryTicketMirror,
    /// The store under test.
    pub store: TestTicketStore,
    /// Ticket returned by the last create or merge.
    pub last_ticket: Option<Ticket>,
}

impl TicketWorld {
    /// Creates a world around an empty mirror.
    #[must_use]
    pub fn new() -> Self {
        let mirror = InMemoryTicketMirror::new();
        let store = open_store(&mirror);
        Self {
            mirror,
            store,
            last_ticket: None,
        }
    }

    /// Replaces the store with a fresh one reading the same mirror.
    pub fn reopen(&mut self) {
        self.store = open_store(&self.mirror);
    }
}

impl Default for TicketWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TicketWorld {
    TicketWorld::default()
}

/// Opens a store over a clone of `mirror`.
pub fn open_store(mirror: &InMemoryTicketMirror) -> TestTicketStore {
    TicketStore::open(Arc::new(mirror.clone()), Arc::new(DefaultClock))
}

/// Builds a [`CreateTicketRequest`] with scenario defaults.
pub fn build_request(title: &str) -> CreateTicketRequest {
    CreateTicketRequest::new(title, TicketPriority::High, "alice")
        .with_description("Aberto pelo cenario")
        .with_department("T.I")
}
