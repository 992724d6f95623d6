//! Ticket identifier type.

use super::TicketDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by every locally generated ticket identifier.
const LOCAL_PREFIX: &str = "HD";

/// Unique identifier for a ticket record.
///
/// Locally created tickets use the `HD-<year>-<sequence>` format with a
/// sequence zero-padded to four digits. Records merged from a remote source
/// keep whatever identifier the remote system assigned. Deserialization goes
/// through [`TicketId::new`], so blank identifiers are rejected on decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct TicketId(String);

impl TicketId {
    /// Creates an identifier from an externally supplied value.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::EmptyTicketId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TicketDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TicketDomainError::EmptyTicketId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Builds a locally generated identifier for the given year and sequence.
    #[must_use]
    pub fn sequential(year: i32, sequence: u32) -> Self {
        Self(format!("{LOCAL_PREFIX}-{year}-{sequence:04}"))
    }

    /// Returns the sequence number when this identifier was generated
    /// locally in `year`.
    #[must_use]
    pub fn sequence_in_year(&self, year: i32) -> Option<u32> {
        let prefix = format!("{LOCAL_PREFIX}-{year}-");
        let digits = self.0.strip_prefix(prefix.as_str())?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TicketId {
    type Error = TicketDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for TicketId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
