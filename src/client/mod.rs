//! Client Module
//!
//! Resolves request identities to decoded catalog records, consulting the
//! expiring cache before touching the network.

mod fetcher;
mod transport;

pub use fetcher::{Fetcher, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use transport::{HttpTransport, RawResponse, Transport};
