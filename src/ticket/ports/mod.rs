//! Port contracts for ticket storage.
//!
//! Ports define infrastructure-agnostic interfaces used by the ticket store.

pub mod mirror;

pub use mirror::{DEFAULT_STORAGE_KEY, TicketMirror, TicketMirrorError, TicketMirrorResult};
