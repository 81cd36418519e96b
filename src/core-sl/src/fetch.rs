//! The HTTP fetch boundary.
//!
//! Everything that touches the network goes through [`Fetcher`], so the
//! sitemap orchestrator and the document loaders can be exercised with an
//! in-memory fetcher in tests. Status-code policy (what counts as fatal, what
//! gets skipped) belongs to the callers, not to this layer.

use async_trait::async_trait;

use crate::errors::Result;

/// A fetched HTTP response, reduced to what the loaders need.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body decoded as text
    pub body: String,
}

impl FetchResponse {
    /// True when the status code is below 400.
    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

/// Capability to fetch a URL as text.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches the URL. A network-level failure is an error; any status code
    /// is returned as-is for the caller to inspect.
    async fn fetch(&self, url: &str) -> Result<FetchResponse>;
}

/// Any borrowed fetcher is itself a fetcher; this lets one fetcher drive
/// both a loader and the [`SitemapProcessor`] it builds internally.
///
/// [`SitemapProcessor`]: crate::SitemapProcessor
#[async_trait]
impl<'a, T: Fetcher + ?Sized> Fetcher for &'a T {
    async fn fetch(&self, url: &str) -> Result<FetchResponse> {
        (**self).fetch(url).await
    }
}

/// [`Fetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(FetchResponse { status, body })
    }
}
