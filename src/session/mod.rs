//! Session Module
//!
//! Per-run state: pagination cursors over the location listing and the
//! Pokedex of caught Pokemon.

mod pokedex;
mod state;

pub use pokedex::{catch_rate, catch_succeeds, Pokedex, MAX_CATCH_RATE, MIN_CATCH_RATE};
pub use state::Session;
