//! Pattern-based URL extraction from sitemap and sitemap-index XML.
//!
//! The XML is treated as plain text: every `<loc>...</loc>` region is scanned
//! with a regex, in document order, without deduplication. Malformed input
//! never fails the caller; it degrades to an empty list with a diagnostic.

use regex::Regex;
use url::Url;

/// Base-URL prefix used when the caller does not supply one.
pub const DEFAULT_BASE_URL: &str = "https://docs.stripe.com/";

/// Extracts every `<loc>` value that starts with `base_url`, in document order.
///
/// Duplicates are kept; deduplication is the caller's policy. Empty or
/// non-matching input yields an empty vector.
///
/// # Examples
///
/// ```
/// # use core_sl::extract_urls_from_sitemap;
/// let xml = "<url><loc>https://docs.stripe.com/billing</loc></url>";
/// let urls = extract_urls_from_sitemap(xml, "https://docs.stripe.com/");
/// assert_eq!(urls, vec!["https://docs.stripe.com/billing"]);
/// ```
pub fn extract_urls_from_sitemap(content: &str, base_url: &str) -> Vec<String> {
    let pattern = format!("<loc>({}[^<]+)</loc>", regex::escape(base_url));
    let url_regex = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::error!("could not build sitemap URL pattern for {base_url}: {e}");
            return Vec::new();
        }
    };

    url_regex
        .captures_iter(content)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Extracts every sitemap partition URL from sitemap-index XML.
///
/// Validates that the text at least looks like a sitemap index (an XML
/// declaration and a `<sitemapindex` marker); when either check fails the
/// input is rejected with a diagnostic and an empty vector, not an error.
/// Individual `<loc>` entries that do not parse as URLs are skipped.
pub fn extract_sitemap_urls_from_index(content: &str) -> Vec<String> {
    if !content.contains("<?xml") || !content.contains("<sitemapindex") {
        tracing::error!("invalid sitemap index XML: missing <?xml or <sitemapindex> elements");
        return Vec::new();
    }

    let loc_regex = match Regex::new("<loc>([^<]+)</loc>") {
        Ok(re) => re,
        Err(e) => {
            tracing::error!("could not build sitemap index pattern: {e}");
            return Vec::new();
        }
    };

    let mut sitemap_urls = Vec::new();
    for cap in loc_regex.captures_iter(content) {
        let url = &cap[1];
        match Url::parse(url) {
            Ok(_) => sitemap_urls.push(url.to_string()),
            Err(e) => {
                tracing::warn!("skipping malformed sitemap URL {url}: {e}");
            }
        }
    }

    if sitemap_urls.is_empty() {
        tracing::warn!("no valid sitemap URLs found in sitemap index");
    }

    sitemap_urls
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn extracts_matching_urls_in_document_order() {
        let xml = indoc! {r#"
            <?xml version="1.0" encoding="UTF-8"?>
            <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
              <url><loc>https://docs.stripe.com/payments</loc></url>
              <url><loc>https://docs.stripe.com/billing</loc></url>
              <url><loc>https://docs.stripe.com/connect</loc></url>
            </urlset>
        "#};

        let urls = extract_urls_from_sitemap(xml, DEFAULT_BASE_URL);
        assert_eq!(
            urls,
            vec![
                "https://docs.stripe.com/payments",
                "https://docs.stripe.com/billing",
                "https://docs.stripe.com/connect",
            ]
        );
    }

    #[test]
    fn drops_urls_outside_the_base_prefix() {
        let xml = indoc! {r#"
            <url><loc>https://docs.stripe.com/payments</loc></url>
            <url><loc>https://stripe.com/pricing</loc></url>
        "#};

        let urls = extract_urls_from_sitemap(xml, DEFAULT_BASE_URL);
        assert_eq!(urls, vec!["https://docs.stripe.com/payments"]);
    }

    #[test]
    fn empty_or_locless_input_yields_nothing() {
        assert!(extract_urls_from_sitemap("", DEFAULT_BASE_URL).is_empty());
        assert!(extract_urls_from_sitemap("<url></url>", DEFAULT_BASE_URL).is_empty());
    }

    #[test]
    fn keeps_duplicate_entries() {
        let xml = "<loc>https://docs.stripe.com/a</loc><loc>https://docs.stripe.com/a</loc>";
        assert_eq!(extract_urls_from_sitemap(xml, DEFAULT_BASE_URL).len(), 2);
    }

    #[test]
    fn index_extraction_keeps_partition_order() {
        let xml = indoc! {r#"
            <?xml version="1.0" encoding="UTF-8"?>
            <sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
              <sitemap><loc>https://stripe.com/sitemap/partition-0.xml</loc></sitemap>
              <sitemap><loc>https://stripe.com/sitemap/partition-1.xml</loc></sitemap>
            </sitemapindex>
        "#};

        let urls = extract_sitemap_urls_from_index(xml);
        assert_eq!(
            urls,
            vec![
                "https://stripe.com/sitemap/partition-0.xml",
                "https://stripe.com/sitemap/partition-1.xml",
            ]
        );
    }

    #[test]
    fn index_without_xml_markers_is_rejected() {
        assert!(extract_sitemap_urls_from_index("").is_empty());
        assert!(extract_sitemap_urls_from_index("<sitemapindex></sitemapindex>").is_empty());
        assert!(
            extract_sitemap_urls_from_index(
                r#"<?xml version="1.0"?><urlset><loc>https://stripe.com/a</loc></urlset>"#
            )
            .is_empty()
        );
    }

    #[test]
    fn index_skips_malformed_loc_entries() {
        let xml = indoc! {r#"
            <?xml version="1.0" encoding="UTF-8"?>
            <sitemapindex>
              <sitemap><loc>not a url</loc></sitemap>
              <sitemap><loc>https://stripe.com/sitemap/partition-0.xml</loc></sitemap>
            </sitemapindex>
        "#};

        let urls = extract_sitemap_urls_from_index(xml);
        assert_eq!(urls, vec!["https://stripe.com/sitemap/partition-0.xml"]);
    }
}
