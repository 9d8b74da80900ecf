//! Command-line interface parsing for the Pokedex
//!
//! Startup flags only; everything else happens inside the REPL.

use clap::Parser;

use crate::client::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use crate::config::{DEFAULT_REAP_INTERVAL_SECS, DEFAULT_TIMEOUT_SECS};

/// Explore PokeAPI location areas and catch Pokemon from your terminal
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pokedex")]
#[command(about = "Interactive PokeAPI explorer with an expiring response cache")]
#[command(version)]
pub struct Cli {
    /// Seconds between cache reap passes
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_REAP_INTERVAL_SECS)]
    pub reap_interval: u64,

    /// Seconds a cached response may age before a reap pass drops it
    /// (defaults to the reap interval)
    #[arg(long, value_name = "SECS")]
    pub max_age: Option<u64>,

    /// Root of the catalog API
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Location areas shown per page
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Seconds before a network request is abandoned
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}
