//! Ticket intake combining the classifier and the store.
//!
//! Creation flows that leave the department blank get the classifier's
//! suggestion; deadlines can optionally default to the priority's
//! resolution window.

mod config;
mod service;

pub use config::IntakeConfig;
pub use service::TicketIntakeService;

#[cfg(test)]
mod tests;
