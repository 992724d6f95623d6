//! Given steps for ticket store BDD scenarios.

use super::world::{TicketWorld, build_request};
use rstest_bdd_macros::given;

#[given("an empty ticket store")]
fn an_empty_ticket_store(world: &mut TicketWorld) -> Result<(), eyre::Report> {
    if !world.store.is_empty() {
        return Err(eyre::eyre!("scenario world should start empty"));
    }
    Ok(())
}

#[given(r#"a store that already created a ticket titled "{title}""#)]
fn store_with_created_ticket(world: &mut TicketWorld, title: String) {
    let created = world.store.create(build_request(&title));
    world.last_ticket = Some(created);
}
