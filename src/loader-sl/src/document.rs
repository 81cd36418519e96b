//! The document records produced by the loaders.

use serde::{Deserialize, Serialize};

/// Sentinel title used when a page carries no `<title>`.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Sentinel description used when a page carries no description meta tag.
pub const NO_DESCRIPTION: &str = "No description";

/// One extracted content region of a fetched page, still raw HTML.
///
/// A page with several content regions produces several articles sharing the
/// same url/title/description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArticle {
    pub url: String,
    pub content: String,
    pub title: String,
    pub description: String,
}

/// Metadata attached to every loaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// URL the content was fetched from
    pub source: String,
    pub title: String,
    pub description: String,
}

/// A normalized markdown document, the unit returned to callers.
///
/// Serializes as `{"pageContent": ..., "metadata": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Markdown rendering of the extracted content region
    pub page_content: String,
    pub metadata: DocumentMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_serializes_with_camel_case_content_field() {
        let doc = Document {
            page_content: "# Title".to_string(),
            metadata: DocumentMetadata {
                source: "https://h/a".to_string(),
                title: "A".to_string(),
                description: "desc".to_string(),
            },
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["pageContent"], "# Title");
        assert_eq!(json["metadata"]["source"], "https://h/a");
        assert_eq!(json["metadata"]["title"], "A");
        assert_eq!(json["metadata"]["description"], "desc");
    }
}
