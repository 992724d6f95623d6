//! When steps for ticket store BDD scenarios.

use super::world::{TicketWorld, build_request};
use chrono::{TimeDelta, Utc};
use helpdesk::ticket::domain::{
    PersistedTicketData, Ticket, TicketDetail, TicketId, TicketPatch, TicketPriority,
    TicketStatus,
};
use rstest_bdd_macros::when;

#[when(r#"a ticket titled "{title}" is created"#)]
fn create_ticket(world: &mut TicketWorld, title: String) {
    let created = world.store.create(build_request(&title));
    world.last_ticket = Some(created);
}

#[when(r#"a ticket titled "{title}" is created with a deadline {hours:u32} hours from now"#)]
fn create_ticket_due_in(world: &mut TicketWorld, title: String, hours: u32) {
    let deadline = Utc::now() + TimeDelta::hours(i64::from(hours));
    let created = world
        .store
        .create(build_request(&title).with_sla_deadline(deadline));
    world.last_ticket = Some(created);
}

#[when(r#"a ticket titled "{title}" is created with a deadline {hours:u32} hours ago"#)]
fn create_ticket_overdue_by(world: &mut TicketWorld, title: String, hours: u32) {
    let deadline = Utc::now() - TimeDelta::hours(i64::from(hours));
    let created = world
        .store
        .create(build_request(&title).with_sla_deadline(deadline));
    world.last_ticket = Some(created);
}

#[when("the store is reopened from its mirror")]
fn reopen_store(world: &mut TicketWorld) {
    world.reopen();
}

#[when(r#"the collection is replaced by the remote ticket "{id}""#)]
fn replace_with_remote(world: &mut TicketWorld, id: String) -> Result<(), eyre::Report> {
    let now = Utc::now();
    let remote = Ticket::from_persisted(PersistedTicketData {
        id: TicketId::new(id)?,
        title: "Chamado sincronizado".to_owned(),
        description: String::new(),
        category: String::new(),
        priority: TicketPriority::Medium,
        status: TicketStatus::Open,
        requester: "bob".to_owned(),
        department: "Financeiro".to_owned(),
        created_at: now,
        updated_at: now,
        sla_deadline: None,
        has_full_detail: true,
    });
    world.store.replace_all(vec![remote]);
    Ok(())
}

#[when(r#"detail for ticket "{id}" titled "{title}" is merged"#)]
fn merge_detail(world: &mut TicketWorld, id: String, title: String) -> Result<(), eyre::Report> {
    let detail = TicketDetail::new(TicketId::new(id)?)
        .with_fields(TicketPatch::new().with_title(title));
    let merged = world.store.upsert_detail(detail);
    world.last_ticket = Some(merged);
    Ok(())
}

#[when("the last created ticket is removed")]
fn remove_last(world: &mut TicketWorld) -> Result<(), eyre::Report> {
    let ticket = world
        .last_ticket
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no ticket created in scenario world"))?;
    world
        .store
        .remove(ticket.id())
        .ok_or_else(|| eyre::eyre!("ticket {} should have been removed", ticket.id()))?;
    Ok(())
}
