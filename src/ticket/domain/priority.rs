//! Ticket priority levels.

use super::ParseTicketPriorityError;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority assigned to a ticket by its requester or triage.
///
/// Serialized with the labels the dashboard and remote API use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketPriority {
    /// Low urgency.
    #[serde(rename = "Baixa")]
    Low,
    /// Normal urgency.
    #[default]
    #[serde(rename = "Média")]
    Medium,
    /// High urgency.
    #[serde(rename = "Alta")]
    High,
    /// Business-stopping incident.
    #[serde(rename = "Crítica")]
    Critical,
}

impl TicketPriority {
    /// Returns the display and storage label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Baixa",
            Self::Medium => "Média",
            Self::High => "Alta",
            Self::Critical => "Crítica",
        }
    }

    /// Returns the resolution window granted to tickets of this priority.
    ///
    /// Used to derive a deadline for tickets opened without an explicit one.
    #[must_use]
    pub const fn resolution_window(self) -> TimeDelta {
        let hours = match self {
            Self::Critical => 2,
            Self::High => 8,
            Self::Medium => 24,
            Self::Low => 72,
        };
        TimeDelta::hours(hours)
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TicketPriority {
    type Error = ParseTicketPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "baixa" => Ok(Self::Low),
            "média" | "media" => Ok(Self::Medium),
            "alta" => Ok(Self::High),
            "crítica" | "critica" => Ok(Self::Critical),
            _ => Err(ParseTicketPriorityError(value.to_owned())),
        }
    }
}
