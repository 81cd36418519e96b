//! Per-page document assembly: fetch, extract, convert to markdown.

use core_sl::Fetcher;

use crate::document::{Document, DocumentMetadata, NO_DESCRIPTION, RawArticle, UNKNOWN_TITLE};
use crate::html::{get_description, get_title};

/// Fetches every URL sequentially and extracts its content regions.
///
/// The locale is passed through as a `?locale=` query parameter. A per-page
/// fetch error or a status of 400 and above skips that URL with a warning and
/// moves on; this function itself never fails. Every fragment the extractor
/// returns becomes one [`RawArticle`] sharing the page's title, description,
/// and source URL.
pub async fn fetch_raw_articles<F, E>(
    fetcher: &F,
    urls: &[String],
    locale: &str,
    extract: E,
) -> Vec<RawArticle>
where
    F: Fetcher,
    E: Fn(&str) -> Vec<String>,
{
    let mut articles = Vec::new();
    for url in urls {
        let page_url = format!("{url}?locale={locale}");
        let response = match fetcher.fetch(&page_url).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("skipping {url}: {e}");
                continue;
            }
        };
        if !response.is_success() {
            tracing::warn!("skipping {url}: HTTP {}", response.status);
            continue;
        }

        let html = response.body;
        let title = get_title(&html).unwrap_or_else(|| UNKNOWN_TITLE.to_string());
        let description = get_description(&html).unwrap_or_else(|| NO_DESCRIPTION.to_string());

        for content in extract(&html) {
            articles.push(RawArticle {
                url: url.clone(),
                content,
                title: title.clone(),
                description: description.clone(),
            });
        }
    }
    articles
}

/// Converts raw articles into normalized markdown documents, preserving
/// input order.
pub fn into_documents(articles: Vec<RawArticle>) -> Vec<Document> {
    articles
        .into_iter()
        .map(|article| Document {
            page_content: html2md::parse_html(&article.content),
            metadata: DocumentMetadata {
                source: article.url,
                title: article.title,
                description: article.description,
            },
        })
        .collect()
}
