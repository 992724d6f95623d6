//! Ticket record store with derived SLA status.
//!
//! The store owns the ticket collection, mirrors it to a durable slot after
//! every mutation and rehydrates from that slot on open. SLA urgency is
//! derived from each ticket's deadline on read and never persisted. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store itself in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
