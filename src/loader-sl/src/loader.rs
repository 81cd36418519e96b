//! The document loaders and their options.

use async_trait::async_trait;
use core_sl::{Fetcher, HttpFetcher, SitemapProcessor};

use crate::assemble::{fetch_raw_articles, into_documents};
use crate::document::Document;
use crate::errors::Result;
use crate::html::{extract_article_from_html, extract_body_from_html};
use crate::url_filter::filter_urls;

/// Sitemap behind [`DocsLoader`].
const DOCS_SITEMAP_URL: &str = "https://docs.stripe.com/sitemap.xml";

/// Sitemap index behind [`SiteLoader`] and the base prefix its page URLs
/// must carry.
const SITE_SITEMAP_INDEX_URL: &str = "https://stripe.com/sitemap/sitemap.xml";
const SITE_BASE_URL: &str = "https://stripe.com/";

/// Options accepted by every loader.
///
/// When `urls` is given, sitemap discovery and resource filtering are
/// bypassed entirely and only the explicit URL list is fetched.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Locale passed through to each page request (default: "en-US")
    pub locale: String,
    /// Resource path that URLs must match to be loaded
    pub resource: Option<String>,
    /// Resource paths whose URLs are dropped even when `resource` matches
    pub exclude_resources: Vec<String>,
    /// Explicit URL list, bypassing sitemap discovery and filtering
    pub urls: Option<Vec<String>>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            resource: None,
            exclude_resources: Vec::new(),
            urls: None,
        }
    }
}

impl LoadOptions {
    /// Creates a new builder for LoadOptions.
    pub fn builder() -> LoadOptionsBuilder {
        LoadOptionsBuilder::default()
    }
}

/// Builder for [`LoadOptions`].
#[derive(Debug, Clone, Default)]
pub struct LoadOptionsBuilder {
    locale: Option<String>,
    resource: Option<String>,
    exclude_resources: Vec<String>,
    urls: Option<Vec<String>>,
}

impl LoadOptionsBuilder {
    /// Sets the locale passed through to each page request.
    pub fn locale(mut self, locale: String) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Sets the resource path URLs must match.
    pub fn resource(mut self, resource: String) -> Self {
        self.resource = Some(resource);
        self
    }

    /// Adds a resource path to exclude.
    pub fn exclude_resource(mut self, resource: String) -> Self {
        self.exclude_resources.push(resource);
        self
    }

    /// Adds multiple resource paths to exclude.
    pub fn exclude_resources(mut self, resources: Vec<String>) -> Self {
        self.exclude_resources.extend(resources);
        self
    }

    /// Sets an explicit URL list, bypassing sitemap discovery.
    pub fn urls(mut self, urls: Vec<String>) -> Self {
        self.urls = Some(urls);
        self
    }

    /// Builds the LoadOptions.
    pub fn build(self) -> LoadOptions {
        LoadOptions {
            locale: self.locale.unwrap_or_else(|| "en-US".to_string()),
            resource: self.resource,
            exclude_resources: self.exclude_resources,
            urls: self.urls,
        }
    }
}

/// A loader is anything that turns [`LoadOptions`] into markdown documents.
/// No base-class hierarchy; compose loaders out of the sitemap processor,
/// the extractors, and the assembler.
#[async_trait]
pub trait DocumentLoader {
    async fn load(&self, options: LoadOptions) -> Result<Vec<Document>>;
}

/// Loads docs-site pages (default: `docs.stripe.com`) using the
/// article-extraction cascade.
#[derive(Debug, Clone)]
pub struct DocsLoader<F: Fetcher = HttpFetcher> {
    fetcher: F,
}

impl DocsLoader<HttpFetcher> {
    pub fn new() -> Self {
        Self {
            fetcher: HttpFetcher::new(),
        }
    }
}

impl Default for DocsLoader<HttpFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fetcher> DocsLoader<F> {
    /// Builds a loader around a caller-supplied fetcher.
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// The fetcher this loader issues requests through.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

#[async_trait]
impl<F: Fetcher> DocumentLoader for DocsLoader<F> {
    async fn load(&self, options: LoadOptions) -> Result<Vec<Document>> {
        let urls = match &options.urls {
            Some(urls) => urls.clone(),
            None => {
                let processor = SitemapProcessor::with_fetcher(&self.fetcher);
                let discovered = processor
                    .fetch_and_process_sitemap(DOCS_SITEMAP_URL, None)
                    .await?;
                filter_urls(
                    &discovered,
                    options.resource.as_deref(),
                    &options.exclude_resources,
                )?
            }
        };
        tracing::info!("loading {} page(s)", urls.len());

        let articles = fetch_raw_articles(
            &self.fetcher,
            &urls,
            &options.locale,
            extract_article_from_html,
        )
        .await;
        Ok(into_documents(articles))
    }
}

/// Loads marketing-site pages (default: `stripe.com`) from a partitioned
/// sitemap index, extracting whole `<body>` regions.
#[derive(Debug, Clone)]
pub struct SiteLoader<F: Fetcher = HttpFetcher> {
    fetcher: F,
}

impl SiteLoader<HttpFetcher> {
    pub fn new() -> Self {
        Self {
            fetcher: HttpFetcher::new(),
        }
    }
}

impl Default for SiteLoader<HttpFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fetcher> SiteLoader<F> {
    /// Builds a loader around a caller-supplied fetcher.
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// The fetcher this loader issues requests through.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

#[async_trait]
impl<F: Fetcher> DocumentLoader for SiteLoader<F> {
    async fn load(&self, options: LoadOptions) -> Result<Vec<Document>> {
        let urls = match &options.urls {
            Some(urls) => urls.clone(),
            None => {
                let processor = SitemapProcessor::with_fetcher(&self.fetcher);
                let discovered = processor
                    .fetch_and_process_sitemap_index(SITE_SITEMAP_INDEX_URL, Some(SITE_BASE_URL))
                    .await?;
                filter_urls(
                    &discovered,
                    options.resource.as_deref(),
                    &options.exclude_resources,
                )?
            }
        };
        tracing::info!("loading {} page(s)", urls.len());

        let articles = fetch_raw_articles(
            &self.fetcher,
            &urls,
            &options.locale,
            extract_body_from_html,
        )
        .await;
        Ok(into_documents(articles))
    }
}
