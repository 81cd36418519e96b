//! # Docs Site Document Loaders
//!
//! Turns a documentation site into markdown documents: page URLs come from a
//! sitemap (or sitemap index) via [`core_sl::SitemapProcessor`], each page is
//! fetched, a content region is located with a heuristic cascade, and the
//! HTML fragment is converted to markdown with title/description metadata.
//!
//! A loader is any component implementing [`DocumentLoader`]; the two shipped
//! loaders differ only in where their sitemap lives and how they pick the
//! content region:
//!
//! - [`DocsLoader`] walks `docs.stripe.com` and uses the `<article>` /
//!   `main-content` / `<body>` extraction cascade.
//! - [`SiteLoader`] walks the `stripe.com` sitemap index and extracts whole
//!   `<body>` regions.
//!
//! ## Examples
//!
//! ```no_run
//! use loader_sl::{DocsLoader, DocumentLoader, LoadOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = LoadOptions::builder()
//!         .resource("connect".to_string())
//!         .exclude_resource("connect/testing".to_string())
//!         .build();
//!
//!     let documents = DocsLoader::new().load(options).await?;
//!     for doc in &documents {
//!         println!("{}: {}", doc.metadata.source, doc.metadata.title);
//!     }
//!     Ok(())
//! }
//! ```

mod assemble;
mod document;
mod errors;
mod html;
mod loader;
#[cfg(test)]
mod test_util;
mod url_filter;

pub use assemble::{fetch_raw_articles, into_documents};
pub use document::{Document, DocumentMetadata, RawArticle};
pub use errors::{LoaderError, Result};
pub use html::{extract_article_from_html, extract_body_from_html, get_description, get_title};
pub use loader::{DocsLoader, DocumentLoader, LoadOptions, LoadOptionsBuilder, SiteLoader};
pub use url_filter::{filter_urls, matches_exclude_resources, matches_resource};

// Re-exported so loader callers can inject fetchers without depending on the
// core crate directly.
pub use core_sl::{
    FetchResponse, Fetcher, HttpFetcher, SitemapProcessor, find_new_urls, setup_logging,
};
