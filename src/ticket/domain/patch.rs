//! Partial updates applied to ticket records.

use super::{TicketId, TicketPriority, TicketStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Field-by-field partial update for a ticket.
///
/// Every field is optional; `None` leaves the stored value untouched. The
/// deadline is doubly optional: `Some(None)` (a JSON `null`) clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TicketPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement category.
    pub category: Option<String>,
    /// Replacement priority.
    pub priority: Option<TicketPriority>,
    /// Replacement workflow status.
    pub status: Option<TicketStatus>,
    /// Replacement requester.
    pub requester: Option<String>,
    /// Replacement department name.
    pub department: Option<String>,
    /// Replacement SLA deadline; `Some(None)` removes the deadline.
    #[serde(deserialize_with = "present_or_null")]
    pub sla_deadline: Option<Option<DateTime<Utc>>>,
}

impl TicketPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TicketPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the workflow status.
    #[must_use]
    pub const fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the requester.
    #[must_use]
    pub fn with_requester(mut self, requester: impl Into<String>) -> Self {
        self.requester = Some(requester.into());
        self
    }

    /// Sets the department name.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Sets the SLA deadline.
    #[must_use]
    pub const fn with_sla_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.sla_deadline = Some(Some(deadline));
        self
    }

    /// Removes the SLA deadline.
    #[must_use]
    pub const fn without_sla_deadline(mut self) -> Self {
        self.sla_deadline = Some(None);
        self
    }

    /// Returns `true` when the patch carries no field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.requester.is_none()
            && self.department.is_none()
            && self.sla_deadline.is_none()
    }
}

/// Keeps a present `null` distinct from an absent field.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

/// Authoritative ticket representation merged into the store by id.
///
/// Deserializes from the flat camelCase shape the remote detail endpoint
/// returns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDetail {
    /// Identifier of the record to merge into or create.
    pub id: TicketId,
    /// Creation instant reported by the remote source, if any.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Fields carried by the detail payload.
    #[serde(flatten)]
    pub fields: TicketPatch,
}

impl TicketDetail {
    /// Creates a detail payload carrying only the identifier.
    #[must_use]
    pub fn new(id: TicketId) -> Self {
        Self {
            id,
            created_at: None,
            fields: TicketPatch::default(),
        }
    }

    /// Sets the detail fields.
    #[must_use]
    pub fn with_fields(mut self, fields: TicketPatch) -> Self {
        self.fields = fields;
        self
    }

    /// Sets the remote creation instant.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
