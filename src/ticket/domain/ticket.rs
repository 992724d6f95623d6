//! Ticket aggregate and its mutation rules.

use super::{
    SlaAssessment, TicketDetail, TicketId, TicketPatch, TicketPriority, TicketStatus,
    compute_sla_status,
};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Support ticket record.
///
/// The serialized form is the camelCase shape shared with the durable mirror
/// and the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    id: TicketId,
    title: String,
    description: String,
    category: String,
    priority: TicketPriority,
    status: TicketStatus,
    requester: String,
    department: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sla_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    has_full_detail: bool,
}

/// Caller-supplied content of a new ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketDraft {
    /// Short summary.
    pub title: String,
    /// Free-text body.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Requested priority.
    pub priority: TicketPriority,
    /// Person who opened the ticket.
    pub requester: String,
    /// Owning department name.
    pub department: String,
    /// Optional SLA deadline.
    pub sla_deadline: Option<DateTime<Utc>>,
}

/// Parameter object for materializing a ticket exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTicketData {
    /// Ticket identifier.
    pub id: TicketId,
    /// Short summary.
    pub title: String,
    /// Free-text body.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Priority.
    pub priority: TicketPriority,
    /// Workflow status.
    pub status: TicketStatus,
    /// Person who opened the ticket.
    pub requester: String,
    /// Owning department name.
    pub department: String,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Latest modification instant.
    pub updated_at: DateTime<Utc>,
    /// Optional SLA deadline.
    pub sla_deadline: Option<DateTime<Utc>>,
    /// Whether the record was populated from an authoritative source.
    pub has_full_detail: bool,
}

impl Ticket {
    /// Opens a new ticket with the given identifier.
    ///
    /// The ticket starts in [`TicketStatus::Open`] with both timestamps set
    /// to the current clock time.
    #[must_use]
    pub fn open(id: TicketId, draft: TicketDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            priority: draft.priority,
            status: TicketStatus::Open,
            requester: draft.requester,
            department: draft.department,
            created_at: timestamp,
            updated_at: timestamp,
            sla_deadline: draft.sla_deadline,
            has_full_detail: false,
        }
    }

    /// Builds a fully detailed ticket from a detail payload for an id the
    /// store has never seen.
    ///
    /// Fields the payload omits stay blank.
    #[must_use]
    pub fn from_detail(detail: TicketDetail, clock: &impl Clock) -> Self {
        let now = clock.utc();
        let created_at = detail.created_at.unwrap_or(now);
        let fields = detail.fields;
        Self {
            id: detail.id,
            title: fields.title.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            category: fields.category.unwrap_or_default(),
            priority: fields.priority.unwrap_or_default(),
            status: fields.status.unwrap_or_default(),
            requester: fields.requester.unwrap_or_default(),
            department: fields.department.unwrap_or_default(),
            created_at,
            updated_at: now.max(created_at),
            sla_deadline: fields.sla_deadline.flatten(),
            has_full_detail: true,
        }
    }

    /// Reconstructs a ticket exactly as given.
    #[must_use]
    pub fn from_persisted(data: PersistedTicketData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            category: data.category,
            priority: data.priority,
            status: data.status,
            requester: data.requester,
            department: data.department,
            created_at: data.created_at,
            updated_at: data.updated_at,
            sla_deadline: data.sla_deadline,
            has_full_detail: data.has_full_detail,
        }
    }

    /// Returns the ticket identifier.
    #[must_use]
    pub const fn id(&self) -> &TicketId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TicketPriority {
        self.priority
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TicketStatus {
        self.status
    }

    /// Returns the requester.
    #[must_use]
    pub fn requester(&self) -> &str {
        &self.requester
    }

    /// Returns the owning department name.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the SLA deadline, if one is tracked.
    #[must_use]
    pub const fn sla_deadline(&self) -> Option<DateTime<Utc>> {
        self.sla_deadline
    }

    /// Returns `true` once an authoritative detail payload has been merged.
    #[must_use]
    pub const fn has_full_detail(&self) -> bool {
        self.has_full_detail
    }

    /// Computes the SLA tier of this ticket at `now`.
    #[must_use]
    pub fn sla_status(&self, now: DateTime<Utc>) -> SlaAssessment {
        compute_sla_status(self.sla_deadline, now)
    }

    /// Applies every field the patch carries, then advances `updated_at`.
    pub fn apply_patch(&mut self, patch: &TicketPatch, clock: &impl Clock) {
        assign(&mut self.title, patch.title.as_ref());
        assign(&mut self.description, patch.description.as_ref());
        assign(&mut self.category, patch.category.as_ref());
        assign(&mut self.requester, patch.requester.as_ref());
        assign(&mut self.department, patch.department.as_ref());
        self.apply_scalars(patch);
        self.touch(clock);
    }

    /// Merges an authoritative detail payload into this ticket.
    ///
    /// Blank text fields in the payload never overwrite populated ones.
    /// Marks the ticket as fully detailed and advances `updated_at`.
    pub fn merge_detail(&mut self, detail: &TicketDetail, clock: &impl Clock) {
        let fields = &detail.fields;
        merge_text(&mut self.title, fields.title.as_ref());
        merge_text(&mut self.description, fields.description.as_ref());
        merge_text(&mut self.category, fields.category.as_ref());
        merge_text(&mut self.requester, fields.requester.as_ref());
        merge_text(&mut self.department, fields.department.as_ref());
        self.apply_scalars(fields);
        if let Some(created_at) = detail.created_at {
            self.created_at = created_at;
        }
        self.has_full_detail = true;
        self.touch(clock);
    }

    fn apply_scalars(&mut self, patch: &TicketPatch) {
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(deadline) = patch.sla_deadline {
            self.sla_deadline = deadline;
        }
    }

    /// Moves `updated_at` forward to the clock time, or one millisecond past
    /// its previous value when the clock has not advanced.
    fn touch(&mut self, clock: &impl Clock) {
        let floor = self.updated_at + TimeDelta::milliseconds(1);
        self.updated_at = clock.utc().max(floor).max(self.created_at);
    }
}

fn assign(field: &mut String, value: Option<&String>) {
    if let Some(text) = value {
        field.clone_from(text);
    }
}

fn merge_text(field: &mut String, value: Option<&String>) {
    assign(field, value.filter(|text| !text.trim().is_empty()));
}
