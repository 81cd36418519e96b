//! Sitemap orchestration: fetch a sitemap (or a partitioned sitemap index)
//! and return the flattened page-URL list.

use crate::errors::{Result, SitemapError};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::sitemap::{DEFAULT_BASE_URL, extract_sitemap_urls_from_index, extract_urls_from_sitemap};

/// Drives sitemap fetching through a [`Fetcher`].
///
/// A failed sitemap or index fetch is fatal for the whole call; this is the
/// one place in the pipeline where HTTP errors propagate instead of being
/// skipped per item.
#[derive(Debug, Clone)]
pub struct SitemapProcessor<F: Fetcher = HttpFetcher> {
    fetcher: F,
}

impl SitemapProcessor<HttpFetcher> {
    pub fn new() -> Self {
        Self {
            fetcher: HttpFetcher::new(),
        }
    }
}

impl Default for SitemapProcessor<HttpFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fetcher> SitemapProcessor<F> {
    /// Builds a processor around a caller-supplied fetcher.
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetches one sitemap and extracts the page URLs matching `base_url`
    /// (defaulting to [`DEFAULT_BASE_URL`]).
    ///
    /// # Errors
    ///
    /// A network failure or a non-success HTTP status is fatal and propagates.
    pub async fn fetch_and_process_sitemap(
        &self,
        url: &str,
        base_url: Option<&str>,
    ) -> Result<Vec<String>> {
        let response = self.fetcher.fetch(url).await?;
        if !response.is_success() {
            return Err(SitemapError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        Ok(extract_urls_from_sitemap(
            &response.body,
            base_url.unwrap_or(DEFAULT_BASE_URL),
        ))
    }

    /// Fetches a sitemap index, then each partition sitemap sequentially,
    /// concatenating page URLs in partition order.
    ///
    /// # Errors
    ///
    /// Failure to fetch the index is fatal. A failure on an individual
    /// partition also propagates and aborts the whole call; there is no
    /// partial-result mode.
    pub async fn fetch_and_process_sitemap_index(
        &self,
        index_url: &str,
        base_url: Option<&str>,
    ) -> Result<Vec<String>> {
        tracing::info!("fetching sitemap index: {index_url}");
        let response = self.fetcher.fetch(index_url).await?;
        if !response.is_success() {
            return Err(SitemapError::Status {
                url: index_url.to_string(),
                status: response.status,
            });
        }

        let sitemap_urls = extract_sitemap_urls_from_index(&response.body);
        tracing::info!("sitemap index has {} partition(s)", sitemap_urls.len());

        let mut all_urls = Vec::new();
        for (i, sitemap_url) in sitemap_urls.iter().enumerate() {
            tracing::info!(
                "processing partition {}/{}: {sitemap_url}",
                i + 1,
                sitemap_urls.len()
            );
            let urls = self.fetch_and_process_sitemap(sitemap_url, base_url).await?;
            tracing::info!("partition {} yielded {} URL(s)", i + 1, urls.len());
            all_urls.extend(urls);
        }

        Ok(all_urls)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::fetch::FetchResponse;

    /// In-memory fetcher keyed by URL; unknown URLs come back as 404.
    struct MockFetcher {
        responses: HashMap<String, (u16, String)>,
        requests: Mutex<Vec<String>>,
    }

    impl MockFetcher {
        fn new(responses: &[(&str, u16, &str)]) -> Self {
            Self {
                responses: responses
                    .iter()
                    .map(|(url, status, body)| (url.to_string(), (*status, body.to_string())))
                    .collect(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchResponse> {
            self.requests.lock().unwrap().push(url.to_string());
            let (status, body) = self
                .responses
                .get(url)
                .cloned()
                .unwrap_or((404, String::new()));
            Ok(FetchResponse { status, body })
        }
    }

    const INDEX_XML: &str = r#"<?xml version="1.0"?>
        <sitemapindex>
          <sitemap><loc>https://stripe.com/sitemap/p0.xml</loc></sitemap>
          <sitemap><loc>https://stripe.com/sitemap/p1.xml</loc></sitemap>
        </sitemapindex>"#;

    #[tokio::test]
    async fn sitemap_fetch_extracts_page_urls() {
        let fetcher = MockFetcher::new(&[(
            "https://docs.stripe.com/sitemap.xml",
            200,
            "<loc>https://docs.stripe.com/billing</loc><loc>https://docs.stripe.com/connect</loc>",
        )]);
        let processor = SitemapProcessor::with_fetcher(fetcher);

        let urls = processor
            .fetch_and_process_sitemap("https://docs.stripe.com/sitemap.xml", None)
            .await
            .unwrap();
        assert_eq!(
            urls,
            vec![
                "https://docs.stripe.com/billing",
                "https://docs.stripe.com/connect",
            ]
        );
    }

    #[tokio::test]
    async fn non_success_sitemap_status_is_fatal() {
        let fetcher = MockFetcher::new(&[("https://docs.stripe.com/sitemap.xml", 503, "")]);
        let processor = SitemapProcessor::with_fetcher(fetcher);

        let err = processor
            .fetch_and_process_sitemap("https://docs.stripe.com/sitemap.xml", None)
            .await
            .unwrap_err();
        assert!(matches!(err, SitemapError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn index_concatenates_partitions_in_order() {
        let fetcher = MockFetcher::new(&[
            ("https://stripe.com/sitemap/sitemap.xml", 200, INDEX_XML),
            (
                "https://stripe.com/sitemap/p0.xml",
                200,
                "<loc>https://stripe.com/payments</loc>",
            ),
            (
                "https://stripe.com/sitemap/p1.xml",
                200,
                "<loc>https://stripe.com/terminal</loc>",
            ),
        ]);
        let processor = SitemapProcessor::with_fetcher(fetcher);

        let urls = processor
            .fetch_and_process_sitemap_index(
                "https://stripe.com/sitemap/sitemap.xml",
                Some("https://stripe.com/"),
            )
            .await
            .unwrap();
        assert_eq!(
            urls,
            vec!["https://stripe.com/payments", "https://stripe.com/terminal"]
        );
    }

    #[tokio::test]
    async fn partition_failure_aborts_the_whole_call() {
        let fetcher = MockFetcher::new(&[
            ("https://stripe.com/sitemap/sitemap.xml", 200, INDEX_XML),
            (
                "https://stripe.com/sitemap/p0.xml",
                200,
                "<loc>https://stripe.com/payments</loc>",
            ),
            // p1 is not registered and answers 404
        ]);
        let processor = SitemapProcessor::with_fetcher(fetcher);

        let err = processor
            .fetch_and_process_sitemap_index(
                "https://stripe.com/sitemap/sitemap.xml",
                Some("https://stripe.com/"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, SitemapError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn invalid_index_body_yields_empty_list_not_error() {
        let fetcher = MockFetcher::new(&[(
            "https://stripe.com/sitemap/sitemap.xml",
            200,
            "<html>not a sitemap index</html>",
        )]);
        let processor = SitemapProcessor::with_fetcher(fetcher);

        let urls = processor
            .fetch_and_process_sitemap_index("https://stripe.com/sitemap/sitemap.xml", None)
            .await
            .unwrap();
        assert!(urls.is_empty());
        // only the index itself was fetched
        assert_eq!(
            processor.fetcher.requests(),
            vec!["https://stripe.com/sitemap/sitemap.xml"]
        );
    }
}
