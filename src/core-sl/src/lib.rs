//! # Sitemap Processing Core
//!
//! Fetches sitemap and sitemap-index XML, extracts page URLs, and diffs URL
//! sets against a previous snapshot. Extraction is deliberately plain-text
//! pattern matching over the raw XML: sitemaps in the wild are regular enough
//! that a `<loc>` scan is all that is needed, and a malformed document then
//! degrades to an empty URL list instead of a parse failure.
//!
//! The HTTP side lives behind the [`Fetcher`] trait so the orchestrator can be
//! driven by an in-memory fetcher in tests.
//!
//! ## Examples
//!
//! ```no_run
//! use core_sl::SitemapProcessor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let processor = SitemapProcessor::new();
//!     let urls = processor
//!         .fetch_and_process_sitemap("https://docs.stripe.com/sitemap.xml", None)
//!         .await?;
//!     println!("{} page URLs", urls.len());
//!     Ok(())
//! }
//! ```

mod diff;
mod errors;
mod fetch;
mod logging;
mod processor;
mod sitemap;

pub use diff::find_new_urls;
pub use errors::{Result, SitemapError};
pub use fetch::{FetchResponse, Fetcher, HttpFetcher};
pub use logging::setup_logging;
pub use processor::SitemapProcessor;
pub use sitemap::{DEFAULT_BASE_URL, extract_sitemap_urls_from_index, extract_urls_from_sitemap};
