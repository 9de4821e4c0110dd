//! Test support for the dice-odds integration tests.
//!
//! Depends on no dice-odds types so that it can assert on the wire contract
//! the way an outside client would see it.

pub mod logging;
pub mod problem_details;
