//! Error types for the Pokedex
//!
//! Provides per-layer error enums using thiserror. The cache never fails;
//! every error originates in the fetcher, the commands, or configuration.

use thiserror::Error;

/// Boxed cause carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// == Fetch Error Enum ==
/// Failure to resolve a request identity to a decoded record.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (connect, timeout, body read)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The upstream answered with a non-success status
    #[error("unexpected status: {status} {reason}")]
    Remote {
        url: String,
        status: u16,
        reason: String,
    },

    /// A freshly fetched body did not match the expected shape
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The base URL cannot have resource paths appended to it
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    /// A cached body no longer decodes into the expected shape
    #[error("cached response for {key} is corrupt: {source}")]
    CorruptCacheEntry {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Returns the HTTP status for `Remote` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// == Command Error Enum ==
/// Failure of a single REPL command. Never fatal to the loop.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A required argument was not supplied
    #[error("missing argument. Usage: {0}")]
    MissingArgument(&'static str),

    /// The named Pokemon is not in the Pokedex
    #[error("you have not caught {0}")]
    NotCaught(String),

    /// Fetching catalog data failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Writing output failed
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

// == Config Error Enum ==
/// Invalid startup configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

// == Result Type Alias ==
/// Convenience Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
