//! JSON encoding of the mirrored ticket collection.

use crate::ticket::{domain::Ticket, ports::TicketMirrorResult};

/// Encodes the collection as a JSON array.
pub(super) fn encode(tickets: &[Ticket]) -> TicketMirrorResult<String> {
    Ok(serde_json::to_string(tickets)?)
}

/// Decodes a JSON array of tickets. Blank payloads decode to an empty
/// collection.
pub(super) fn decode(payload: &str) -> TicketMirrorResult<Vec<Ticket>> {
    if payload.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(payload)?)
}
