//! Domain model for helpdesk tickets.
//!
//! Tickets, their partial updates, and SLA derivation live here with no
//! knowledge of how the collection is stored.

mod error;
mod ids;
mod patch;
mod priority;
mod sla;
mod status;
mod ticket;

pub use error::{ParseTicketPriorityError, ParseTicketStatusError, TicketDomainError};
pub use ids::TicketId;
pub use patch::{TicketDetail, TicketPatch};
pub use priority::TicketPriority;
pub use sla::{CRITICAL_WINDOW_HOURS, SlaAssessment, SlaStatus, compute_sla_status};
pub use status::TicketStatus;
pub use ticket::{PersistedTicketData, Ticket, TicketDraft};
