//! Mirror adapters for the ticket module.
//!
//! Concrete implementations of the [`TicketMirror`] port. Both adapters share
//! the same JSON encoding, so a collection written by one can be read by the
//! other.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTicketMirror`]: named in-memory slots holding the
//!   serialized collection, for tests and ephemeral sessions
//! - [`file::FileTicketMirror`]: one JSON file per storage key inside a
//!   capability-scoped directory
//!
//! [`TicketMirror`]: crate::ticket::ports::TicketMirror

mod codec;
pub mod file;
pub mod memory;
