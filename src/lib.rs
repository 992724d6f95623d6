//! Helpdesk core: ticket records with derived SLA, and department
//! classification.
//!
//! This crate holds the logic underneath the helpdesk dashboard: an owned,
//! durably mirrored ticket collection and a deterministic heuristic that
//! suggests which department a ticket belongs to.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`ticket`]: Ticket store, mutation rules and SLA derivation
//! - [`department`]: Keyword-based department classification
//! - [`intake`]: Ticket creation combining both

pub mod department;
pub mod intake;
pub mod ticket;

#[cfg(test)]
mod test_support;
