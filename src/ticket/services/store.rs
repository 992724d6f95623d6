//! Ticket store: the owned, durably mirrored ticket collection.

use crate::department::domain::department_key;
use crate::ticket::{
    domain::{
        SlaAssessment, Ticket, TicketDetail, TicketDraft, TicketId, TicketPatch, TicketPriority,
    },
    ports::TicketMirror,
};
use chrono::{DateTime, Datelike, Utc};
use mockable::Clock;
use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// Request payload for opening a new ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTicketRequest {
    title: String,
    description: String,
    category: String,
    priority: TicketPriority,
    requester: String,
    department: String,
    sla_deadline: Option<DateTime<Utc>>,
}

impl CreateTicketRequest {
    /// Creates a request with the required ticket fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        priority: TicketPriority,
        requester: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            category: String::new(),
            priority,
            requester: requester.into(),
            department: String::new(),
            sla_deadline: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the owning department name.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the SLA deadline.
    #[must_use]
    pub const fn with_sla_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.sla_deadline = Some(deadline);
        self
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

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TicketPriority {
        self.priority
    }

    /// Returns the department name, blank when none was chosen.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the SLA deadline, if set.
    #[must_use]
    pub const fn sla_deadline(&self) -> Option<DateTime<Utc>> {
        self.sla_deadline
    }

    fn into_draft(self) -> TicketDraft {
        TicketDraft {
            title: self.title,
            description: self.description,
            category: self.category,
            priority: self.priority,
            requester: self.requester,
            department: self.department,
            sla_deadline: self.sla_deadline,
        }
    }
}

/// Owned ticket collection mirrored to durable storage after every mutation.
///
/// Every mutation holds the write lock across both the in-memory change and
/// the mirror write, so readers never observe a partially applied mutation.
/// Mirror failures are logged and never roll back the in-memory change.
pub struct TicketStore<M, C>
where
    M: TicketMirror,
    C: Clock + Send + Sync,
{
    mirror: Arc<M>,
    clock: Arc<C>,
    tickets: RwLock<Vec<Ticket>>,
}

impl<M, C> TicketStore<M, C>
where
    M: TicketMirror,
    C: Clock + Send + Sync,
{
    /// Opens a store seeded from the mirror's current contents.
    ///
    /// An unreadable mirror is logged and the store starts empty.
    #[must_use]
    pub fn open(mirror: Arc<M>, clock: Arc<C>) -> Self {
        let tickets = mirror.load().unwrap_or_else(|err| {
            warn!(error = %err, "ticket mirror unreadable, starting with an empty collection");
            Vec::new()
        });
        debug!(count = tickets.len(), "ticket store opened");
        Self {
            mirror,
            clock,
            tickets: RwLock::new(tickets),
        }
    }

    /// Returns the current clock time.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Opens a new ticket with the next `HD-<year>-NNNN` identifier.
    pub fn create(&self, request: CreateTicketRequest) -> Ticket {
        let mut tickets = self.write_state();
        let year = self.clock.utc().year();
        let id = TicketId::sequential(year, next_sequence(&tickets, year));
        let ticket = Ticket::open(id, request.into_draft(), &*self.clock);
        tickets.push(ticket.clone());
        debug!(ticket_id = %ticket.id(), "ticket created");
        self.persist(&tickets);
        ticket
    }

    /// Applies a partial update to the ticket with `id`.
    ///
    /// Returns the updated ticket, or `None` when no ticket has that id.
    pub fn update(&self, id: &TicketId, patch: &TicketPatch) -> Option<Ticket> {
        let mut tickets = self.write_state();
        let ticket = tickets.iter_mut().find(|ticket| ticket.id() == id)?;
        ticket.apply_patch(patch, &*self.clock);
        let updated = ticket.clone();
        debug!(ticket_id = %id, "ticket updated");
        self.persist(&tickets);
        Some(updated)
    }

    /// Merges an authoritative detail payload by id.
    ///
    /// Known ids are merged in place; unknown ids are inserted as new,
    /// fully detailed records.
    pub fn upsert_detail(&self, detail: TicketDetail) -> Ticket {
        let mut tickets = self.write_state();
        let merged = if let Some(existing) =
            tickets.iter_mut().find(|ticket| ticket.id() == &detail.id)
        {
            existing.merge_detail(&detail, &*self.clock);
            existing.clone()
        } else {
            let inserted = Ticket::from_detail(detail, &*self.clock);
            tickets.push(inserted.clone());
            inserted
        };
        debug!(ticket_id = %merged.id(), "ticket detail merged");
        self.persist(&tickets);
        merged
    }

    /// Removes the ticket with `id`, returning it when it existed.
    pub fn remove(&self, id: &TicketId) -> Option<Ticket> {
        let mut tickets = self.write_state();
        let position = tickets.iter().position(|ticket| ticket.id() == id)?;
        let removed = tickets.remove(position);
        debug!(ticket_id = %id, "ticket removed");
        self.persist(&tickets);
        Some(removed)
    }

    /// Replaces the whole collection with `records`, taken as given.
    pub fn replace_all(&self, records: Vec<Ticket>) {
        let mut tickets = self.write_state();
        *tickets = records;
        debug!(count = tickets.len(), "ticket collection replaced");
        self.persist(&tickets);
    }

    /// Returns a copy of the ticket with `id`.
    #[must_use]
    pub fn get(&self, id: &TicketId) -> Option<Ticket> {
        self.read_state()
            .iter()
            .find(|ticket| ticket.id() == id)
            .cloned()
    }

    /// Returns a copy of the current collection in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Ticket> {
        self.read_state().clone()
    }

    /// Returns the number of tickets held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_state().len()
    }

    /// Returns `true` when the store holds no ticket.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_state().is_empty()
    }

    /// Returns up to `limit` open tickets ordered by SLA deadline.
    ///
    /// Resolved and closed tickets are skipped. Tickets without a deadline
    /// come after every ticket that has one; ties keep collection order.
    #[must_use]
    pub fn next_due(&self, limit: usize) -> Vec<Ticket> {
        self.due_queue(limit, |_| true)
    }

    /// Same as [`Self::next_due`], restricted to tickets owned by
    /// `department`.
    ///
    /// Department names are compared accent- and punctuation-insensitively,
    /// so `"Produção"` matches tickets filed under `"Producao"`.
    #[must_use]
    pub fn next_due_in_department(&self, department: &str, limit: usize) -> Vec<Ticket> {
        let wanted = department_key(department);
        self.due_queue(limit, |ticket| department_key(ticket.department()) == wanted)
    }

    /// Computes the SLA tier of `ticket` at the current clock time.
    #[must_use]
    pub fn sla_status(&self, ticket: &Ticket) -> SlaAssessment {
        ticket.sla_status(self.clock.utc())
    }

    fn due_queue(&self, limit: usize, keep: impl Fn(&Ticket) -> bool) -> Vec<Ticket> {
        let mut open: Vec<Ticket> = self
            .read_state()
            .iter()
            .filter(|ticket| ticket.status().is_open() && keep(*ticket))
            .cloned()
            .collect();
        open.sort_by_key(|ticket| (ticket.sla_deadline().is_none(), ticket.sla_deadline()));
        open.truncate(limit);
        open
    }

    fn persist(&self, tickets: &[Ticket]) {
        if let Err(err) = self.mirror.save(tickets) {
            warn!(error = %err, count = tickets.len(), "failed to mirror ticket collection");
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, Vec<Ticket>> {
        self.tickets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, Vec<Ticket>> {
        self.tickets.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Returns the sequence the next ticket created in `year` should use.
///
/// Normally one past the highest sequence taken this year. When that would
/// overflow, the lowest free sequence is reused instead.
fn next_sequence(tickets: &[Ticket], year: i32) -> u32 {
    let taken: BTreeSet<u32> = tickets
        .iter()
        .filter_map(|ticket| ticket.id().sequence_in_year(year))
        .collect();
    match taken.last() {
        None => 1,
        Some(highest) => highest
            .checked_add(1)
            .unwrap_or_else(|| lowest_free_sequence(&taken)),
    }
}

/// A collection can never hold every `u32` sequence, so a gap always exists.
fn lowest_free_sequence(taken: &BTreeSet<u32>) -> u32 {
    (1..=u32::MAX)
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_default()
}
