//! Error types for sitemap processing.

use thiserror::Error;

/// Main error type for sitemap fetching and processing.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// HTTP request failed at the network level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but with a non-success status code
    #[error("fetching {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Type alias for Result with SitemapError
pub type Result<T> = std::result::Result<T, SitemapError>;
