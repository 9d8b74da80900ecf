//! Pokedex - An interactive PokeAPI explorer
//!
//! Browses location areas, explores them and catches Pokemon, serving
//! repeated requests from an in-memory cache whose entries are reaped once
//! they grow too old.

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod session;
pub mod tasks;

pub use cache::ExpiringCache;
pub use client::{Fetcher, HttpTransport, Transport};
pub use config::Config;
pub use repl::Repl;
