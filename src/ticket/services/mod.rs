//! Application services for the ticket collection.

mod store;

pub use store::{CreateTicketRequest, TicketStore};
