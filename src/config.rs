//! Configuration Module
//!
//! Validated startup configuration built from command-line flags.

use std::time::Duration;

use crate::cli::Cli;
use crate::client::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use crate::error::ConfigError;

/// Default seconds between reap passes.
pub const DEFAULT_REAP_INTERVAL_SECS: u64 = 300;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Startup configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Period of the background reaper
    pub reap_interval: Duration,
    /// Age beyond which a reap pass drops an entry
    pub max_age: Duration,
    /// Catalog API root, without trailing slash
    pub base_url: String,
    /// Location areas per page
    pub page_size: u32,
    /// Network request timeout
    pub request_timeout: Duration,
}

impl Config {
    /// Builds a Config from parsed flags, rejecting zero durations and sizes
    /// and URLs that are not http(s).
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let reap_interval = nonzero_secs(cli.reap_interval, "reap interval")?;
        let max_age = match cli.max_age {
            Some(secs) => nonzero_secs(secs, "max age")?,
            None => reap_interval,
        };
        if cli.page_size == 0 {
            return Err(ConfigError::Zero("page size"));
        }
        let request_timeout = nonzero_secs(cli.timeout, "timeout")?;

        let base_url = cli.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(cli.base_url.clone()));
        }

        Ok(Self {
            reap_interval,
            max_age,
            base_url,
            page_size: cli.page_size,
            request_timeout,
        })
    }
}

fn nonzero_secs(secs: u64, what: &'static str) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::Zero(what));
    }
    Ok(Duration::from_secs(secs))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reap_interval: Duration::from_secs(DEFAULT_REAP_INTERVAL_SECS),
            max_age: Duration::from_secs(DEFAULT_REAP_INTERVAL_SECS),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
