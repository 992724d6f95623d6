//! Step definitions for ticket store BDD scenarios.

mod given;
mod then;
pub mod world;
mod when;
