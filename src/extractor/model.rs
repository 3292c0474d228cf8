use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where a post's publication date was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateSource {
    /// `datetime` attribute of the entry-date `<time>` element.
    EntryDateAttribute,
    /// Human-readable text of the entry-date `<time>` element.
    EntryDateText,
    /// `<meta property="article:published_time">`.
    PublishedTimeMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMetadata {
    /// Never empty; placeholder or file-name derived when the document has none.
    pub title: String,
    /// Blog posts only.
    pub date: Option<NaiveDate>,
    pub date_source: Option<DateSource>,
    /// Blog posts only.
    pub categories: Option<Vec<String>>,
    /// Manual pages only.
    pub page_id: Option<String>,
}

/// A document reduced to its metadata and normalized body
/// (markdown for posts, plain text for manual pages).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub metadata: ExtractedMetadata,
    pub body: String,
}

impl ExtractedContent {
    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn categories(&self) -> &[String] {
        self.metadata.categories.as_deref().unwrap_or_default()
    }
}

/// Collapses every whitespace run, newlines included, to one space and trims.
pub fn normalize_whitespace(text: &str) -> String {
    static WHITESPACE_REGEX: std::sync::LazyLock<regex::Regex> =
        std::sync::LazyLock::new(|| regex::Regex::new(r"\s+").unwrap());
    WHITESPACE_REGEX.replace_all(text.trim(), " ").into_owned()
}
