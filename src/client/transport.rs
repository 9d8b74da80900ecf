//! Transport abstraction over a single HTTP GET.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::BoxError;

/// Status and full body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Canonical reason phrase for `status`, empty if unknown
    pub reason: String,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one GET request and reads the whole body.
///
/// Errors are reserved for failures that produced no response at all; any
/// status code, success or not, is returned as a `RawResponse`.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, BoxError>> + Send;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a transport whose requests give up after `timeout`, or never
    /// when `None`.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder =
            Client::builder().user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, BoxError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(RawResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.to_vec(),
        })
    }
}
