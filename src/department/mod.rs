//! Department classification from free ticket text.
//!
//! A ticket's title and description are normalized (accents folded, case
//! and punctuation dropped) and scored against a static keyword table. The
//! best-scoring known department is suggested; no match is a normal
//! outcome, not an error.

pub mod domain;
pub mod services;
