//! Error types for ticket domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing ticket domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TicketDomainError {
    /// The ticket identifier is empty after trimming.
    #[error("ticket identifier must not be empty")]
    EmptyTicketId,
}

/// Error returned while parsing a ticket status label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown ticket status: {0}")]
pub struct ParseTicketStatusError(pub String);

/// Error returned while parsing a ticket priority label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown ticket priority: {0}")]
pub struct ParseTicketPriorityError(pub String);
