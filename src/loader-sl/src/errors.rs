//! Error types for document loading.

use thiserror::Error;

/// Main error type for document-loader operations.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Sitemap fetching or processing failed
    #[error("sitemap processing failed: {0}")]
    Sitemap(#[from] core_sl::SitemapError),

    /// A URL handed to the resource filter did not parse
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Type alias for Result with LoaderError
pub type Result<T> = std::result::Result<T, LoaderError>;
