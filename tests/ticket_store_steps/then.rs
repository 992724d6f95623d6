//! Then steps for ticket store BDD scenarios.

use super::world::{TicketWorld, build_request};
use helpdesk::ticket::{
    domain::{TicketId, TicketStatus},
    ports::TicketMirror,
};
use rstest_bdd_macros::then;

#[then("the store holds {count:usize} tickets")]
fn store_holds(world: &TicketWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.store.len();
    if held != count {
        return Err(eyre::eyre!("expected {count} tickets, found {held}"));
    }
    Ok(())
}

#[then("the mirror holds {count:usize} tickets")]
fn mirror_holds(world: &TicketWorld, count: usize) -> Result<(), eyre::Report> {
    let mirrored = world
        .mirror
        .load()
        .map_err(|err| eyre::eyre!("mirror load failed: {err}"))?;
    if mirrored.len() != count {
        return Err(eyre::eyre!(
            "expected {count} mirrored tickets, found {}",
            mirrored.len()
        ));
    }
    if mirrored != world.store.snapshot() {
        return Err(eyre::eyre!("mirror diverges from the in-memory collection"));
    }
    Ok(())
}

#[then("every ticket id follows the yearly sequence format")]
fn ids_follow_format(world: &TicketWorld) -> Result<(), eyre::Report> {
    for ticket in world.store.snapshot() {
        let id = ticket.id().as_str();
        let parts: Vec<&str> = id.split('-').collect();
        let well_formed = matches!(
            parts.as_slice(),
            ["HD", year, sequence]
                if year.len() == 4
                    && sequence.len() == 4
                    && year.chars().all(|c| c.is_ascii_digit())
                    && sequence.chars().all(|c| c.is_ascii_digit())
        );
        if !well_formed {
            return Err(eyre::eyre!("malformed ticket id '{id}'"));
        }
    }
    Ok(())
}

#[then("every ticket is open")]
fn every_ticket_open(world: &TicketWorld) -> Result<(), eyre::Report> {
    if let Some(ticket) = world
        .store
        .snapshot()
        .iter()
        .find(|ticket| ticket.status() != TicketStatus::Open)
    {
        return Err(eyre::eyre!(
            "ticket {} has status {}",
            ticket.id(),
            ticket.status()
        ));
    }
    Ok(())
}

#[then("the next created ticket has sequence {sequence:u32}")]
fn next_sequence(world: &TicketWorld, sequence: u32) -> Result<(), eyre::Report> {
    let created = world.store.create(build_request("Depois do restart"));
    let suffix = format!("-{sequence:04}");
    if !created.id().as_str().ends_with(&suffix) {
        return Err(eyre::eyre!(
            "expected sequence {sequence}, got id {}",
            created.id()
        ));
    }
    Ok(())
}

#[then(r#"the ticket "{id}" is present"#)]
fn ticket_present(world: &TicketWorld, id: String) -> Result<(), eyre::Report> {
    let ticket_id = TicketId::new(id)?;
    if world.store.get(&ticket_id).is_none() {
        return Err(eyre::eyre!("expected ticket '{ticket_id}' to exist"));
    }
    Ok(())
}

#[then(r#"the ticket "{id}" is fully detailed"#)]
fn ticket_fully_detailed(world: &TicketWorld, id: String) -> Result<(), eyre::Report> {
    let ticket_id = TicketId::new(id)?;
    let ticket = world
        .store
        .get(&ticket_id)
        .ok_or_else(|| eyre::eyre!("expected ticket '{ticket_id}' to exist"))?;
    if !ticket.has_full_detail() {
        return Err(eyre::eyre!("ticket '{ticket_id}' lacks full detail"));
    }
    Ok(())
}

#[then(r#"its SLA status is "{label}""#)]
fn sla_status_is(world: &TicketWorld, label: String) -> Result<(), eyre::Report> {
    let ticket = world
        .last_ticket
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no ticket created in scenario world"))?;
    let status = world.store.sla_status(ticket).status();
    if status.as_str() != label {
        return Err(eyre::eyre!("expected SLA status {label}, got {status}"));
    }
    Ok(())
}
