//! Heuristic content extraction over raw HTML text.
//!
//! No DOM is built. The docs pages this targets are server-rendered and
//! regular enough that non-greedy, case-insensitive patterns locate the
//! content region reliably, and a page that matches nothing degrades to an
//! empty result instead of a parse error.
//!
//! [`extract_article_from_html`] runs a three-tier cascade; each tier is
//! attempted only when the previous one found nothing:
//!
//! 1. every `<article>` element (all of them, in document order);
//! 2. the element carrying `id="main-content"`, narrowed to a
//!    `Content-article` or `Document` classed div when one exists;
//! 3. the `<body>`, but only when it contains one of those classed divs.
//!
//! [`extract_body_from_html`] is the flat variant used by [`SiteLoader`]
//! (every `<body>` region, no cascade).
//!
//! [`SiteLoader`]: crate::SiteLoader

use regex::Regex;

/// Extracts content fragments from raw HTML using the three-tier cascade.
///
/// Returns all `<article>` inner contents when any exist; otherwise a single
/// fragment from the `main-content` scope; otherwise a single classed-div
/// fragment from `<body>`; otherwise nothing. Never errors: unusable input
/// yields an empty vector.
pub fn extract_article_from_html(html: &str) -> Vec<String> {
    if html.is_empty() {
        tracing::debug!("input HTML is empty");
        return Vec::new();
    }

    let articles = article_tag_contents(html);
    if !articles.is_empty() {
        return articles;
    }

    tracing::debug!("no article tags found, trying main-content");
    if let Some(fragment) = main_content_fragment(html) {
        return vec![fragment];
    }

    tracing::debug!("no main-content found, trying body content");
    match body_fragment(html) {
        Some(fragment) => vec![fragment],
        None => Vec::new(),
    }
}

/// Extracts every `<body>` region from raw HTML, trimmed, in document order.
///
/// Independent of the cascade: no class-based narrowing, no fallbacks.
pub fn extract_body_from_html(html: &str) -> Vec<String> {
    if html.is_empty() {
        tracing::debug!("input HTML is empty");
        return Vec::new();
    }

    let Ok(body_regex) = Regex::new(r"(?is)<body[^>]*>(.*?)</body>") else {
        return Vec::new();
    };

    let mut bodies = Vec::new();
    for cap in body_regex.captures_iter(html) {
        let inner = &cap[1];
        if !inner.is_empty() {
            bodies.push(inner.trim().to_string());
        }
    }

    if bodies.is_empty() {
        tracing::debug!("no body tags found");
    }
    bodies
}

/// Extracts the `<title>` text, if present and non-empty.
pub fn get_title(html: &str) -> Option<String> {
    let re = Regex::new(r"<title[^>]*>([^<]+)</title>").ok()?;
    let cap = re.captures(html)?;
    let title = cap.get(1)?.as_str().trim().to_string();
    if title.is_empty() { None } else { Some(title) }
}

/// Extracts the `<meta name="description" content="...">` text, if present.
pub fn get_description(html: &str) -> Option<String> {
    let re = Regex::new(r#"<meta[^>]*name="description"[^>]*content="([^"]+)"[^>]*>"#).ok()?;
    let cap = re.captures(html)?;
    let description = cap.get(1)?.as_str().trim().to_string();
    if description.is_empty() {
        None
    } else {
        Some(description)
    }
}

/// Tier 1: inner content of every `<article>` element, in document order.
fn article_tag_contents(html: &str) -> Vec<String> {
    let Ok(article_regex) = Regex::new(r"(?is)<article(?:\s+[^>]*)?>(.*?)</article>") else {
        return Vec::new();
    };

    let mut articles = Vec::new();
    for cap in article_regex.captures_iter(html) {
        let inner = &cap[1];
        if !inner.is_empty() {
            articles.push(inner.trim().to_string());
        }
    }
    articles
}

/// Tier 2: the earliest element with `id="main-content"`, narrowed to a
/// classed div when one exists, else the whole scope.
fn main_content_fragment(html: &str) -> Option<String> {
    let scope = find_main_content_scope(html)?;
    tracing::debug!("found element with main-content id");

    if let Some(inner) = classed_div_content(&scope, "Content-article") {
        tracing::debug!("found content with Content-article class");
        return Some(inner);
    }
    if let Some(inner) = classed_div_content(&scope, "Document") {
        tracing::debug!("found content with Document class");
        return Some(inner);
    }

    tracing::debug!("using all content within main-content");
    Some(scope.trim().to_string())
}

/// Tier 3: a classed div inside `<body>`. There is deliberately no
/// whole-body fallback here.
fn body_fragment(html: &str) -> Option<String> {
    let body_regex = Regex::new(r"(?is)<body[^>]*>(.*?)</body>").ok()?;
    let cap = body_regex.captures(html)?;
    let body = cap.get(1)?.as_str();

    if let Some(inner) = classed_div_content(body, "Content-article") {
        tracing::debug!("found content with Content-article class in body");
        return Some(inner);
    }
    if let Some(inner) = classed_div_content(body, "Document") {
        tracing::debug!("found content with Document class in body");
        return Some(inner);
    }

    tracing::debug!("no specific content container found");
    None
}

/// Finds the inner content of the first `div|section|main|article` element
/// whose attributes carry `id="main-content"`. "First" means earliest in the
/// document, across all four tag names.
fn find_main_content_scope(html: &str) -> Option<String> {
    const TAGS: [&str; 4] = ["div", "section", "main", "article"];

    let mut earliest: Option<(usize, String)> = None;
    for tag in TAGS {
        let pattern = format!(r#"(?is)<{tag}\s[^>]*?id=["']main-content["'][^>]*>(.*?)</{tag}>"#);
        let Ok(re) = Regex::new(&pattern) else {
            continue;
        };
        if let Some(cap) = re.captures(html) {
            let (Some(whole), Some(inner)) = (cap.get(0), cap.get(1)) else {
                continue;
            };
            if inner.as_str().is_empty() {
                continue;
            }
            let start = whole.start();
            if earliest.as_ref().is_none_or(|(s, _)| start < *s) {
                earliest = Some((start, inner.as_str().to_string()));
            }
        }
    }

    earliest.map(|(_, scope)| scope)
}

/// Inner content of the first `div` whose `class` attribute contains
/// `class_token`.
fn classed_div_content(scope: &str, class_token: &str) -> Option<String> {
    let pattern = format!(
        r#"(?is)<div\s[^>]*?class=["'][^"']*{}[^"']*["'][^>]*>(.*?)</div>"#,
        regex::escape(class_token)
    );
    let re = Regex::new(&pattern).ok()?;
    let cap = re.captures(scope)?;
    let inner = cap.get(1)?.as_str();
    if inner.is_empty() {
        return None;
    }
    Some(inner.trim().to_string())
}
