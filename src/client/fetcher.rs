//! Cache-aware fetcher for the catalog endpoints.

use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::ExpiringCache;
use crate::client::{HttpTransport, Transport};
use crate::error::{FetchError, Result};
use crate::models::{AreaDetail, LocationAreaPage, Pokemon};

/// Default upstream API root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default number of location areas per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Resolves request identities (absolute URLs) to decoded records.
///
/// Every successful response body is cached under its URL, so a repeated
/// request within the cache's lifetime costs no network round trip.
#[derive(Debug, Clone)]
pub struct Fetcher<T = HttpTransport> {
    transport: T,
    cache: ExpiringCache,
    base_url: String,
    page_size: u32,
}

impl<T: Transport> Fetcher<T> {
    /// Creates a fetcher against [`DEFAULT_BASE_URL`].
    pub fn new(transport: T, cache: ExpiringCache) -> Self {
        Self {
            transport,
            cache,
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Points the fetcher at another API root. A trailing slash is ignored.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    // == Request identities ==

    /// URL of the first page of the location area listing.
    pub fn first_page_url(&self) -> String {
        format!(
            "{}/location-area?offset=0&limit={}",
            self.base_url, self.page_size
        )
    }

    /// URL of one location area. `name` is percent-encoded as a single path
    /// segment, so the cache key is exactly the URL that gets requested.
    pub fn area_url(&self, name: &str) -> Result<String> {
        self.resource_url(&["location-area", name])
    }

    /// URL of one Pokemon, encoded like [`Fetcher::area_url`].
    pub fn pokemon_url(&self, name: &str) -> Result<String> {
        self.resource_url(&["pokemon", name])
    }

    fn resource_url(&self, segments: &[&str]) -> Result<String> {
        let invalid = || FetchError::InvalidUrl(self.base_url.clone());

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }

    // == Fetch shapes ==

    /// Fetches a page of location areas. `None` means the first page;
    /// otherwise `url` is a `next`/`previous` link from an earlier page.
    pub async fn location_areas(&self, url: Option<&str>) -> Result<LocationAreaPage> {
        match url {
            Some(url) => self.fetch(url).await,
            None => self.fetch(&self.first_page_url()).await,
        }
    }

    /// Fetches an area and the Pokemon encountered in it.
    pub async fn area(&self, name: &str) -> Result<AreaDetail> {
        self.fetch(&self.area_url(name)?).await
    }

    /// Fetches the detail record of one Pokemon.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch(&self.pokemon_url(name)?).await
    }

    // == Fetch ==
    /// Resolves `url` to a decoded record, serving from cache when possible.
    ///
    /// A cached body that fails to decode is reported as
    /// [`FetchError::CorruptCacheEntry`] rather than refetched. A fresh body
    /// is cached only after it decodes successfully.
    pub async fn fetch<R: DeserializeOwned>(&self, url: &str) -> Result<R> {
        if let Some(cached) = self.cache.lookup(url).await {
            debug!(url, "cache hit");
            return serde_json::from_slice(&cached).map_err(|source| FetchError::CorruptCacheEntry {
                key: url.to_string(),
                source,
            });
        }

        debug!(url, "cache miss, fetching");
        let response = self
            .transport
            .get(url)
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        if !response.is_success() {
            warn!(url, status = response.status, "upstream returned an error status");
            return Err(FetchError::Remote {
                url: url.to_string(),
                status: response.status,
                reason: response.reason,
            });
        }

        let record = serde_json::from_slice(&response.body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })?;

        self.cache.insert(url, Arc::<[u8]>::from(response.body)).await;
        Ok(record)
    }
}
