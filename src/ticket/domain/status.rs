//! Ticket workflow status.

use super::ParseTicketStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a ticket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    /// Newly opened, not yet picked up.
    #[default]
    #[serde(rename = "Aberto")]
    Open,
    /// An agent is working on the ticket.
    #[serde(rename = "Em Andamento")]
    InProgress,
    /// Waiting on the requester or a third party.
    #[serde(rename = "Pendente")]
    Pending,
    /// A solution has been delivered.
    #[serde(rename = "Resolvido")]
    Resolved,
    /// The ticket is closed.
    #[serde(rename = "Fechado")]
    Closed,
}

impl TicketStatus {
    /// Returns the display and storage label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Aberto",
            Self::InProgress => "Em Andamento",
            Self::Pending => "Pendente",
            Self::Resolved => "Resolvido",
            Self::Closed => "Fechado",
        }
    }

    /// Returns `true` while the ticket still needs attention.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Resolved | Self::Closed)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TicketStatus {
    type Error = ParseTicketStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "aberto" => Ok(Self::Open),
            "em andamento" => Ok(Self::InProgress),
            "pendente" => Ok(Self::Pending),
            "resolvido" => Ok(Self::Resolved),
            "fechado" => Ok(Self::Closed),
            _ => Err(ParseTicketStatusError(value.to_owned())),
        }
    }
}
