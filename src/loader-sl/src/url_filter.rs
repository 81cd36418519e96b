//! Resource-path filtering of page URLs.
//!
//! A resource pattern is a `/`-delimited sequence of literal path segments
//! (no wildcards) matched positionally against the URL's path segments.
//! Multi-segment patterns match as a prefix (extra trailing URL segments are
//! allowed). A single-segment pattern matches only when it equals the FIRST
//! path segment, never elsewhere in the path; this asymmetry mirrors the
//! observed behavior of the deployment this was built against and is kept
//! deliberately.

use url::Url;

use crate::errors::Result;

/// True when the URL's path matches the resource pattern.
///
/// # Errors
///
/// A URL that fails to parse propagates as [`LoaderError::Url`]; callers
/// either pre-validate or accept the propagation.
///
/// [`LoaderError::Url`]: crate::LoaderError::Url
///
/// # Examples
///
/// ```
/// # use loader_sl::matches_resource;
/// assert!(matches_resource("https://h/connect/accounts", "connect").unwrap());
/// // single-segment patterns only match the first path segment
/// assert!(!matches_resource("https://h/docs/connect", "connect").unwrap());
/// ```
pub fn matches_resource(url: &str, resource: &str) -> Result<bool> {
    let segments = path_segments(url)?;
    Ok(segments_match(&segments, resource))
}

/// True when the URL matches ANY of the exclude patterns. An empty pattern
/// list never matches, and does not require the URL to parse.
pub fn matches_exclude_resources(url: &str, exclude_resources: &[String]) -> Result<bool> {
    if exclude_resources.is_empty() {
        return Ok(false);
    }

    let segments = path_segments(url)?;
    Ok(exclude_resources
        .iter()
        .any(|resource| segments_match(&segments, resource)))
}

/// Keeps every URL that matches `resource` (when given) and matches none of
/// `exclude_resources`. Order is preserved and nothing is deduplicated; with
/// neither filter this is the identity.
///
/// # Errors
///
/// Propagates the first URL parse failure encountered.
pub fn filter_urls(
    urls: &[String],
    resource: Option<&str>,
    exclude_resources: &[String],
) -> Result<Vec<String>> {
    if resource.is_none() && exclude_resources.is_empty() {
        return Ok(urls.to_vec());
    }

    let mut kept = Vec::new();
    for url in urls {
        if let Some(resource) = resource
            && !matches_resource(url, resource)?
        {
            continue;
        }
        if matches_exclude_resources(url, exclude_resources)? {
            continue;
        }
        kept.push(url.clone());
    }
    Ok(kept)
}

/// The URL's path split into non-empty segments.
fn path_segments(url: &str) -> Result<Vec<String>> {
    let parsed = Url::parse(url)?;
    Ok(parsed
        .path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect())
}

fn segments_match(segments: &[String], resource: &str) -> bool {
    if resource.contains('/') {
        // multi-segment pattern: positional prefix, trailing URL segments allowed
        resource
            .split('/')
            .filter(|segment| !segment.is_empty())
            .enumerate()
            .all(|(i, segment)| segments.get(i).map(String::as_str) == Some(segment))
    } else {
        // single-segment pattern: must be the first path segment
        segments.first().map(String::as_str) == Some(resource)
    }
}
